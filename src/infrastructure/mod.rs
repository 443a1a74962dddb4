//! Infrastructure layer module
//!
//! This module contains the adapters around the credential core:
//! - clouds.yaml loading and runtime settings
//! - Logging infrastructure
//! - HTTP client wiring for resolved trust

pub mod config;
pub mod http;
pub mod logging;
