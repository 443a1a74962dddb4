//! Domain layer for cloud credentials
//!
//! This module contains the credential data model, the trust configuration
//! types, and the errors raised while loading or resolving them.

pub mod errors;
pub mod models;

// Re-export error types for convenient access
pub use errors::{CloudConfigError, CloudConfigResult, TrustError};
