//! Domain errors for cloud credential loading and trust resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Format a list of searched paths as `a, b, c`.
fn format_searched(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while building or querying a [`CloudConfig`](super::models::CloudConfig).
#[derive(Debug, Error)]
pub enum CloudConfigError {
    /// The clouds file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid clouds document; no store is built
    #[error("failed to decode clouds document: {0}")]
    Decode(#[from] serde_yaml::Error),

    /// No cloud with this name
    #[error("cloud {0} not found")]
    NotFound(String),

    /// Discovery found no clouds file
    #[error("no clouds.yaml found (searched: {})", format_searched(.searched))]
    NoConfigFile { searched: Vec<PathBuf> },
}

/// Errors raised while deriving a TLS trust configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrustError {
    /// The cacert bundle yielded no usable certificate
    #[error("unable to load cacert")]
    InvalidCaCert,
}

/// Result alias for clouds document operations.
pub type CloudConfigResult<T> = Result<T, CloudConfigError>;
