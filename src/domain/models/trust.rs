use std::fmt;

use rustls::pki_types::CertificateDer;
use rustls::RootCertStore;
use serde::Serialize;

/// Coarse classification of a [`TrustConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustMode {
    /// Platform trust store, nothing configured explicitly
    SystemDefault,
    /// Peer certificates are not verified
    InsecureSkipVerify,
    /// Peer certificates are verified against a private CA pool
    CustomCaPool,
}

impl TrustMode {
    /// Stable snake_case name, as used in JSON output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SystemDefault => "system_default",
            Self::InsecureSkipVerify => "insecure_skip_verify",
            Self::CustomCaPool => "custom_ca_pool",
        }
    }
}

impl fmt::Display for TrustMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trusted root certificates decoded from a PEM bundle.
///
/// A pool always holds at least one certificate; construction goes through
/// the trust resolver, which rejects bundles that yield none.
#[derive(Debug, Clone)]
pub struct CaPool {
    certificates: Vec<CertificateDer<'static>>,
    roots: RootCertStore,
}

impl CaPool {
    pub(crate) const fn new(certificates: Vec<CertificateDer<'static>>, roots: RootCertStore) -> Self {
        Self { certificates, roots }
    }

    /// DER encodings of the accepted certificates, in bundle order.
    pub fn certificates(&self) -> &[CertificateDer<'static>] {
        &self.certificates
    }

    /// Root store ready to hand to a rustls client configuration.
    pub const fn root_store(&self) -> &RootCertStore {
        &self.roots
    }

    /// Number of accepted certificates.
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    /// Always false for a pool built by the resolver.
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }
}

/// Explicit TLS settings. Both flags are independent and may be set together.
#[derive(Debug, Clone)]
pub struct TlsTrust {
    pub(crate) insecure_skip_verify: bool,
    pub(crate) ca_pool: Option<CaPool>,
}

impl TlsTrust {
    /// Peer certificates are accepted without validation.
    pub const fn insecure_skip_verify(&self) -> bool {
        self.insecure_skip_verify
    }

    /// Private roots to validate against, if a bundle was supplied.
    pub const fn ca_pool(&self) -> Option<&CaPool> {
        self.ca_pool.as_ref()
    }
}

/// Transport trust derived from a cloud's auth block.
#[derive(Debug, Clone)]
pub enum TrustConfig {
    /// Nothing non-standard requested; the client keeps its normal trust handling
    SystemDefault,
    /// Skip-verification, a private CA pool, or both
    Explicit(TlsTrust),
}

impl TrustConfig {
    /// Whether the client keeps its normal trust handling.
    pub const fn is_system_default(&self) -> bool {
        matches!(self.mode(), TrustMode::SystemDefault)
    }

    /// Whether peer certificates go unverified.
    pub const fn insecure_skip_verify(&self) -> bool {
        match self {
            Self::SystemDefault => false,
            Self::Explicit(tls) => tls.insecure_skip_verify,
        }
    }

    /// The private CA pool, if one was loaded.
    pub const fn ca_pool(&self) -> Option<&CaPool> {
        match self {
            Self::SystemDefault => None,
            Self::Explicit(tls) => tls.ca_pool.as_ref(),
        }
    }

    /// Skip-verification takes precedence in the reported mode since it
    /// decides peer validation; the pool stays available via [`Self::ca_pool`].
    pub const fn mode(&self) -> TrustMode {
        match self {
            Self::SystemDefault => TrustMode::SystemDefault,
            Self::Explicit(tls) if tls.insecure_skip_verify => TrustMode::InsecureSkipVerify,
            Self::Explicit(tls) if tls.ca_pool.is_some() => TrustMode::CustomCaPool,
            // Neither toggle set: nothing to apply.
            Self::Explicit(_) => TrustMode::SystemDefault,
        }
    }
}
