//! `cloudtrust probe`

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::time::Duration;

use super::CommandContext;
use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::http::{self, ProbeReport};

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Cloud name (defaults to OS_CLOUD)
    pub name: Option<String>,

    /// Request timeout in seconds (defaults to probe_timeout_secs)
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ProbeOutput {
    pub name: String,
    #[serde(flatten)]
    pub report: ProbeReport,
}

impl CommandOutput for ProbeOutput {
    fn to_human(&self) -> String {
        [
            format!("Cloud:       {}", self.name),
            format!("URL:         {}", self.report.url),
            format!("Status:      {}", self.report.status),
            format!("Elapsed:     {} ms", self.report.elapsed_ms),
            format!("Trust mode:  {}", self.report.trust_mode),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: ProbeArgs, ctx: &CommandContext) -> Result<()> {
    let (name, cloud) = ctx.cloud(args.name)?;
    let timeout = Duration::from_secs(args.timeout.unwrap_or(ctx.settings.probe_timeout_secs).max(1));

    let report = http::probe(&cloud, timeout)
        .await
        .with_context(|| format!("Probe of cloud {name} failed"))?;

    output(&ProbeOutput { name, report }, ctx.json);
    Ok(())
}
