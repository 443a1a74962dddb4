use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Unexpected, Visitor};

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::errors::{CloudConfigError, CloudConfigResult};

/// Placeholder printed instead of secret values.
pub const REDACTED: &str = "***";

/// Authentication block of a single cloud entry.
///
/// Decoding starts from [`AuthRecord::default`] and overlays whatever the
/// document supplies, so an omitted `verify` stays `true` while an explicit
/// `verify: false` wins.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AuthRecord {
    #[serde(deserialize_with = "null_as_empty")]
    pub username: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub project_name: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub project_domain_name: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub user_domain_name: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub auth_url: String,

    /// Verify the identity service certificate. Accepts YAML 1.1 booleans
    /// (`yes`, `off`, ...); `null` keeps the default.
    #[serde(deserialize_with = "lenient_bool")]
    pub verify: bool,

    /// PEM-encoded CA bundle; empty when not provided
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub cacert: String,
}

const fn default_verify() -> bool {
    true
}

impl Default for AuthRecord {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            project_name: String::new(),
            project_domain_name: String::new(),
            user_domain_name: String::new(),
            auth_url: String::new(),
            verify: default_verify(),
            cacert: String::new(),
        }
    }
}

impl AuthRecord {
    /// Whether the entry carries CA material.
    pub fn has_cacert(&self) -> bool {
        !self.cacert.is_empty()
    }
}

impl fmt::Debug for AuthRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { REDACTED };
        f.debug_struct("AuthRecord")
            .field("username", &self.username)
            .field("password", &password)
            .field("project_name", &self.project_name)
            .field("project_domain_name", &self.project_domain_name)
            .field("user_domain_name", &self.user_domain_name)
            .field("auth_url", &self.auth_url)
            .field("verify", &self.verify)
            .field("cacert", &format_args!("<{} bytes>", self.cacert.len()))
            .finish()
    }
}

/// One named cloud from a clouds document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CloudRecord {
    #[serde(deserialize_with = "null_as_empty")]
    pub region_name: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub identity_api_version: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub identity_interface: String,

    #[serde(deserialize_with = "null_as_default")]
    pub auth: AuthRecord,
}

/// Immutable store of cloud entries keyed by (case-sensitive) name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    clouds: BTreeMap<String, CloudRecord>,
}

impl CloudConfig {
    /// Build a store from already decoded records.
    pub const fn new(clouds: BTreeMap<String, CloudRecord>) -> Self {
        Self { clouds }
    }

    /// Decode a whole clouds document.
    ///
    /// Decoding is all-or-nothing: a single malformed entry fails the whole
    /// document. Empty or whitespace-only input yields an empty store.
    pub fn from_yaml_slice(data: &[u8]) -> CloudConfigResult<Self> {
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_slice(data)?)
    }

    /// Look up a cloud by name, returning an owned copy.
    pub fn get_by_name(&self, name: &str) -> CloudConfigResult<CloudRecord> {
        self.clouds
            .get(name)
            .cloned()
            .ok_or_else(|| CloudConfigError::NotFound(name.to_string()))
    }

    /// Whether a cloud with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.clouds.contains_key(name)
    }

    /// Cloud names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clouds.keys().map(String::as_str)
    }

    /// Name and record pairs in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CloudRecord)> {
        self.clouds.iter().map(|(name, cloud)| (name.as_str(), cloud))
    }

    /// Number of clouds in the store.
    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    /// Whether the store holds no clouds.
    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

struct LenientBool;

impl<'de> Visitor<'de> for LenientBool {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean (true/false, yes/no, on/off)")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        match v.to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "on" => Ok(true),
            "false" | "no" | "n" | "off" => Ok(false),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
        Ok(default_verify())
    }

    fn visit_none<E: de::Error>(self) -> Result<bool, E> {
        Ok(default_verify())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<bool, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// YAML 1.1 style boolean, with `null` meaning "not set".
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientBool)
}
