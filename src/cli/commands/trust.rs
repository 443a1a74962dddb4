//! `cloudtrust trust`

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::CommandContext;
use crate::cli::output::{output, yes_no, CommandOutput};
use crate::domain::models::{TrustConfig, TrustMode};
use crate::services::resolve_cloud_trust;

#[derive(Args, Debug)]
pub struct TrustArgs {
    /// Cloud name (defaults to OS_CLOUD)
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrustOutput {
    pub name: String,
    pub mode: TrustMode,
    pub insecure_skip_verify: bool,
    pub ca_certificates: usize,
}

impl TrustOutput {
    pub fn new(name: String, trust: &TrustConfig) -> Self {
        Self {
            name,
            mode: trust.mode(),
            insecure_skip_verify: trust.insecure_skip_verify(),
            ca_certificates: trust.ca_pool().map_or(0, |pool| pool.len()),
        }
    }
}

impl CommandOutput for TrustOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("Cloud:              {}", self.name),
            format!("Trust mode:         {}", self.mode),
            format!("Skip verification:  {}", yes_no(self.insecure_skip_verify)),
            format!("CA certificates:    {}", self.ca_certificates),
        ];
        if self.insecure_skip_verify && self.ca_certificates > 0 {
            lines.push("Note: verification is disabled, the CA pool is not used to validate peers".to_string());
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: TrustArgs, ctx: &CommandContext) -> Result<()> {
    let (name, cloud) = ctx.cloud(args.name)?;
    let trust = resolve_cloud_trust(&cloud)
        .with_context(|| format!("Failed to resolve TLS trust for cloud {name}"))?;
    output(&TrustOutput::new(name, &trust), ctx.json);
    Ok(())
}
