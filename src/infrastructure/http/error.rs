use thiserror::Error;

use crate::domain::errors::TrustError;

/// Errors raised while probing an identity endpoint
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The cloud has no endpoint to contact
    #[error("cloud has no auth_url")]
    MissingAuthUrl,

    /// Trust resolution failed
    #[error(transparent)]
    Trust(#[from] TrustError),

    /// The TLS client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The endpoint did not answer
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
