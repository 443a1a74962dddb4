pub mod cloud;
pub mod trust;

pub use cloud::{AuthRecord, CloudConfig, CloudRecord, REDACTED};
pub use trust::{CaPool, TlsTrust, TrustConfig, TrustMode};
