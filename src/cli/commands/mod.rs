//! CLI command implementations.

use anyhow::{Context, Result};

use crate::domain::models::{CloudConfig, CloudRecord};
use crate::infrastructure::config::{CloudConfigLoader, Settings};

pub mod list;
pub mod probe;
pub mod show;
pub mod trust;

/// State shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub settings: Settings,
    pub json: bool,
}

impl CommandContext {
    pub const fn new(settings: Settings, json: bool) -> Self {
        Self { settings, json }
    }

    /// Load the clouds document selected by the settings
    pub fn load_clouds(&self) -> Result<CloudConfig> {
        CloudConfigLoader::load(self.settings.clouds_file.as_deref())
            .context("Failed to load clouds document")
    }

    /// Pick the requested cloud name, falling back to the configured default
    pub fn cloud_name(&self, name: Option<String>) -> Result<String> {
        name.or_else(|| self.settings.cloud.clone())
            .filter(|n| !n.is_empty())
            .context("No cloud name given; pass NAME or set OS_CLOUD")
    }

    /// Resolve the cloud name and fetch its record
    pub fn cloud(&self, name: Option<String>) -> Result<(String, CloudRecord)> {
        let name = self.cloud_name(name)?;
        let record = self.load_clouds()?.get_by_name(&name)?;
        Ok((name, record))
    }
}
