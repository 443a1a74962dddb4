//! cloudtrust - clouds.yaml credentials and TLS trust resolution
//!
//! Loads an OpenStack style `clouds.yaml`, looks up clouds by name, and
//! derives the TLS trust policy needed to reach each cloud's identity service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): credential records, the cloud store, trust types
//! - **Service Layer** (`services`): trust resolution
//! - **Infrastructure Layer** (`infrastructure`): file loading, settings, logging, HTTP
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use cloudtrust::{resolve_trust, CloudConfigLoader};
//!
//! fn main() -> anyhow::Result<()> {
//!     let clouds = CloudConfigLoader::load_from_file("clouds.yaml")?;
//!     let prod = clouds.get_by_name("prod")?;
//!     let trust = resolve_trust(&prod.auth)?;
//!     println!("{}", trust.mode());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{CloudConfigError, TrustError};
pub use domain::models::{
    AuthRecord, CaPool, CloudConfig, CloudRecord, TlsTrust, TrustConfig, TrustMode,
};
pub use infrastructure::config::{CloudConfigLoader, Settings, SettingsLoader};
pub use services::{load_ca_pool, resolve_cloud_trust, resolve_trust};
