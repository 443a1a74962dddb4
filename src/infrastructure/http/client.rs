//! Applies a resolved [`TrustConfig`] to a reqwest client.

use reqwest::{Certificate, Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;

use super::error::ProbeError;
use crate::domain::models::TrustConfig;

/// Build a rustls-backed client builder honoring `trust`.
///
/// - `SystemDefault` leaves the builder's built-in roots untouched.
/// - Skip-verification disables certificate validation.
/// - A CA pool replaces the built-in roots with the pool's certificates.
pub fn client_builder(trust: &TrustConfig) -> Result<ClientBuilder, ProbeError> {
    let mut builder = Client::builder().use_rustls_tls();

    if trust.insecure_skip_verify() {
        debug!("disabling certificate verification");
        builder = builder.danger_accept_invalid_certs(true);
    }

    if let Some(pool) = trust.ca_pool() {
        debug!(certificates = pool.len(), "using private CA pool");
        builder = builder.tls_built_in_root_certs(false);
        for der in pool.certificates() {
            let cert = Certificate::from_der(der.as_ref()).map_err(ProbeError::Client)?;
            builder = builder.add_root_certificate(cert);
        }
    }

    Ok(builder)
}

/// Build a ready client with a request timeout.
pub fn build_client(trust: &TrustConfig, timeout: Duration) -> Result<Client, ProbeError> {
    client_builder(trust)?
        .timeout(timeout)
        .build()
        .map_err(ProbeError::Client)
}
