//! Reachability check for a cloud's identity endpoint.

use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

use super::client::build_client;
use super::error::ProbeError;
use crate::domain::models::{CloudRecord, TrustMode};
use crate::services::resolve_cloud_trust;

/// Outcome of a probe; any HTTP response counts as reachable
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub url: String,
    pub status: u16,
    pub elapsed_ms: u64,
    pub trust_mode: TrustMode,
}

impl ProbeReport {
    /// 2xx or 3xx response
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 400
    }
}

/// Issue `GET auth_url` using the trust derived from `cloud`.
#[instrument(skip(cloud), fields(url = %cloud.auth.auth_url))]
pub async fn probe(cloud: &CloudRecord, timeout: Duration) -> Result<ProbeReport, ProbeError> {
    let url = cloud.auth.auth_url.trim();
    if url.is_empty() {
        return Err(ProbeError::MissingAuthUrl);
    }

    let trust = resolve_cloud_trust(cloud)?;
    let client = build_client(&trust, timeout)?;

    let started = Instant::now();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ProbeError::Request {
            url: url.to_string(),
            source,
        })?;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let status = response.status().as_u16();
    debug!(status, elapsed_ms, "probe completed");

    Ok(ProbeReport {
        url: url.to_string(),
        status,
        elapsed_ms,
        trust_mode: trust.mode(),
    })
}
