use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::logging::{LogConfig, LogFormat};

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to extract settings: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Invalid probe_timeout_secs: {0}. Must be at least 1")]
    InvalidProbeTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

impl From<figment::Error> for SettingsError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(Box::new(err))
    }
}

/// Runtime settings for the `cloudtrust` binary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Explicit clouds.yaml path; the search path is used when unset
    #[serde(default)]
    pub clouds_file: Option<PathBuf>,

    /// Cloud used when a command is given no name
    #[serde(default)]
    pub cloud: Option<String>,

    /// Timeout for `probe` requests
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    #[serde(default)]
    pub logging: LogConfig,
}

const fn default_probe_timeout_secs() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clouds_file: None,
            cloud: None,
            probe_timeout_secs: default_probe_timeout_secs(),
            logging: LogConfig::default(),
        }
    }
}

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. Settings file, when given
    /// 3. `OS_CLIENT_CONFIG_FILE` and `OS_CLOUD`
    /// 4. Environment variables (`CLOUDTRUST_*`, nested keys split on `__`)
    pub fn load(settings_file: Option<&Path>) -> Result<Settings, SettingsError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        if let Some(path) = settings_file {
            figment = figment.merge(Yaml::file(path));
        }

        let settings: Settings = figment
            .merge(Env::raw().only(&["OS_CLIENT_CONFIG_FILE"]).map(|_| "clouds_file".into()))
            .merge(Env::raw().only(&["OS_CLOUD"]).map(|_| "cloud".into()))
            .merge(Env::prefixed("CLOUDTRUST_").split("__"))
            .extract()?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        if settings.probe_timeout_secs == 0 {
            return Err(SettingsError::InvalidProbeTimeout(settings.probe_timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&settings.logging.level.as_str()) {
            return Err(SettingsError::InvalidLogLevel(settings.logging.level.clone()));
        }

        Ok(())
    }
}

impl Settings {
    /// Whether logs should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.logging.format == LogFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CLEAN_ENV: [(&str, Option<&str>); 6] = [
        ("OS_CLIENT_CONFIG_FILE", None),
        ("OS_CLOUD", None),
        ("CLOUDTRUST_CLOUD", None),
        ("CLOUDTRUST_CLOUDS_FILE", None),
        ("CLOUDTRUST_PROBE_TIMEOUT_SECS", None),
        ("CLOUDTRUST_LOGGING__LEVEL", None),
    ];

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.probe_timeout_secs, 10);
        assert!(settings.cloud.is_none());
        assert_eq!(settings.logging.level, "warn");
        SettingsLoader::validate(&settings).expect("Default settings should be valid");
    }

    #[test]
    fn test_load_without_sources_yields_defaults() {
        temp_env::with_vars(CLEAN_ENV, || {
            let settings = SettingsLoader::load(None).unwrap();
            assert_eq!(settings, Settings::default());
        });
    }

    #[test]
    fn test_openstack_variables() {
        let mut vars = CLEAN_ENV.to_vec();
        vars.push(("OS_CLOUD", Some("prod")));
        vars.push(("OS_CLIENT_CONFIG_FILE", Some("/tmp/clouds.yaml")));

        temp_env::with_vars(vars, || {
            let settings = SettingsLoader::load(None).unwrap();
            assert_eq!(settings.cloud.as_deref(), Some("prod"));
            assert_eq!(settings.clouds_file, Some(PathBuf::from("/tmp/clouds.yaml")));
        });
    }

    #[test]
    fn test_prefixed_env_overrides_openstack_variables() {
        let mut vars = CLEAN_ENV.to_vec();
        vars.push(("OS_CLOUD", Some("prod")));
        vars.push(("CLOUDTRUST_CLOUD", Some("lab")));
        vars.push(("CLOUDTRUST_LOGGING__LEVEL", Some("debug")));

        temp_env::with_vars(vars, || {
            let settings = SettingsLoader::load(None).unwrap();
            assert_eq!(settings.cloud.as_deref(), Some("lab"));
            assert_eq!(settings.logging.level, "debug");
        });
    }

    #[test]
    fn test_settings_file_layer() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cloud: staging\nprobe_timeout_secs: 3\nlogging:\n  format: json").unwrap();

        temp_env::with_vars(CLEAN_ENV, || {
            let settings = SettingsLoader::load(Some(file.path())).unwrap();
            assert_eq!(settings.cloud.as_deref(), Some("staging"));
            assert_eq!(settings.probe_timeout_secs, 3);
            assert!(settings.json_logs());
        });
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut vars = CLEAN_ENV.to_vec();
        vars.push(("CLOUDTRUST_PROBE_TIMEOUT_SECS", Some("0")));

        temp_env::with_vars(vars, || {
            let err = SettingsLoader::load(None).unwrap_err();
            assert!(matches!(err, SettingsError::InvalidProbeTimeout(0)));
        });
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let settings = Settings {
            logging: LogConfig {
                level: "loud".to_string(),
                ..LogConfig::default()
            },
            ..Settings::default()
        };
        assert!(matches!(
            SettingsLoader::validate(&settings),
            Err(SettingsError::InvalidLogLevel(_))
        ));
    }
}
