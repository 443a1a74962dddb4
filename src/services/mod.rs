pub mod trust_resolver;

pub use trust_resolver::{load_ca_pool, resolve_cloud_trust, resolve_trust};
