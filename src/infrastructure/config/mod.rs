//! Configuration management infrastructure
//!
//! - clouds.yaml loading and discovery
//! - Layered runtime settings using figment (YAML file, environment overrides)

pub mod loader;
pub mod settings;

pub use loader::{default_search_paths, search_paths, CloudConfigLoader, CLOUDS_FILE_NAME};
pub use settings::{Settings, SettingsError, SettingsLoader};
