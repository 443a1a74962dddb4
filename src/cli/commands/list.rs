//! `cloudtrust list`

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::CommandContext;
use crate::cli::output::{output, table, yes_no, CommandOutput};
use crate::domain::models::{CloudConfig, CloudRecord};

#[derive(Args, Debug)]
pub struct ListArgs {}

#[derive(Debug, Serialize)]
pub struct CloudSummary {
    pub name: String,
    pub region_name: String,
    pub auth_url: String,
    pub verify: bool,
    pub has_cacert: bool,
}

impl CloudSummary {
    fn new(name: &str, cloud: &CloudRecord) -> Self {
        Self {
            name: name.to_string(),
            region_name: cloud.region_name.clone(),
            auth_url: cloud.auth.auth_url.clone(),
            verify: cloud.auth.verify,
            has_cacert: cloud.auth.has_cacert(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CloudListOutput {
    pub clouds: Vec<CloudSummary>,
    pub total: usize,
}

impl From<&CloudConfig> for CloudListOutput {
    fn from(config: &CloudConfig) -> Self {
        let clouds: Vec<_> = config
            .iter()
            .map(|(name, cloud)| CloudSummary::new(name, cloud))
            .collect();
        Self {
            total: clouds.len(),
            clouds,
        }
    }
}

impl CommandOutput for CloudListOutput {
    fn to_human(&self) -> String {
        if self.clouds.is_empty() {
            return "No clouds found.".to_string();
        }

        let mut table = table(&["Name", "Region", "Auth URL", "Verify", "CA"]);
        for cloud in &self.clouds {
            table.add_row(vec![
                cloud.name.as_str(),
                cloud.region_name.as_str(),
                cloud.auth_url.as_str(),
                yes_no(cloud.verify),
                yes_no(cloud.has_cacert),
            ]);
        }
        format!("{table}\n{} cloud(s)", self.total)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(_args: ListArgs, ctx: &CommandContext) -> Result<()> {
    let config = ctx.load_clouds()?;
    output(&CloudListOutput::from(&config), ctx.json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_output() {
        let yaml = "clouds:\n  b:\n    region_name: r2\n  a:\n    auth:\n      verify: false\n";
        let config = CloudConfig::from_yaml_slice(yaml.as_bytes()).unwrap();
        let out = CloudListOutput::from(&config);

        assert_eq!(out.total, 2);
        assert_eq!(out.clouds[0].name, "a");
        assert!(!out.clouds[0].verify);

        let human = out.to_human();
        assert!(human.contains("r2"));
        assert!(human.contains("2 cloud(s)"));
        assert_eq!(out.to_json()["clouds"][1]["name"], "b");
    }

    #[test]
    fn test_empty_list() {
        let out = CloudListOutput::from(&CloudConfig::default());
        assert_eq!(out.to_human(), "No clouds found.");
    }
}
