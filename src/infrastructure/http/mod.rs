//! HTTP adapter consuming resolved trust configurations
//!
//! The core never opens connections; this adapter turns a
//! [`TrustConfig`](crate::domain::models::TrustConfig) into a reqwest client
//! and offers a connectivity probe for the CLI.

pub mod client;
pub mod error;
pub mod probe;

pub use client::{build_client, client_builder};
pub use error::ProbeError;
pub use probe::{probe, ProbeReport};
