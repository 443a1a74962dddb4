//! `cloudtrust show`

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::CommandContext;
use crate::cli::output::{output, yes_no, CommandOutput};
use crate::domain::models::{CloudRecord, REDACTED};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Cloud name (defaults to OS_CLOUD)
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthOutput {
    pub username: String,
    pub password: String,
    pub project_name: String,
    pub project_domain_name: String,
    pub user_domain_name: String,
    pub auth_url: String,
    pub verify: bool,
    pub has_cacert: bool,
}

#[derive(Debug, Serialize)]
pub struct CloudDetailOutput {
    pub name: String,
    pub region_name: String,
    pub identity_api_version: String,
    pub identity_interface: String,
    pub auth: AuthOutput,
}

impl CloudDetailOutput {
    pub fn new(name: String, cloud: CloudRecord) -> Self {
        let auth = cloud.auth;
        let password = if auth.password.is_empty() {
            String::new()
        } else {
            REDACTED.to_string()
        };

        Self {
            name,
            region_name: cloud.region_name,
            identity_api_version: cloud.identity_api_version,
            identity_interface: cloud.identity_interface,
            auth: AuthOutput {
                has_cacert: auth.has_cacert(),
                username: auth.username,
                password,
                project_name: auth.project_name,
                project_domain_name: auth.project_domain_name,
                user_domain_name: auth.user_domain_name,
                auth_url: auth.auth_url,
                verify: auth.verify,
            },
        }
    }
}

impl CommandOutput for CloudDetailOutput {
    fn to_human(&self) -> String {
        let auth = &self.auth;
        [
            format!("Cloud:                {}", self.name),
            format!("Region:               {}", self.region_name),
            format!("Identity API version: {}", self.identity_api_version),
            format!("Identity interface:   {}", self.identity_interface),
            format!("Auth URL:             {}", auth.auth_url),
            format!("Username:             {}", auth.username),
            format!("Password:             {}", auth.password),
            format!("Project:              {}", auth.project_name),
            format!("Project domain:       {}", auth.project_domain_name),
            format!("User domain:          {}", auth.user_domain_name),
            format!("Verify:               {}", yes_no(auth.verify)),
            format!("CA certificate:       {}", yes_no(auth.has_cacert)),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: ShowArgs, ctx: &CommandContext) -> Result<()> {
    let (name, cloud) = ctx.cloud(args.name)?;
    output(&CloudDetailOutput::new(name, cloud), ctx.json);
    Ok(())
}
