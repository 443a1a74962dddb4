use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::errors::{CloudConfigError, CloudConfigResult};
use crate::domain::models::CloudConfig;

/// File name looked up in each search directory
pub const CLOUDS_FILE_NAME: &str = "clouds.yaml";

/// Loader for clouds documents
pub struct CloudConfigLoader;

impl CloudConfigLoader {
    /// Decode a clouds document held in memory
    pub fn load_from_bytes(data: &[u8]) -> CloudConfigResult<CloudConfig> {
        let config = CloudConfig::from_yaml_slice(data)?;
        debug!(clouds = config.len(), "decoded clouds document");
        Ok(config)
    }

    /// Read and decode a clouds document from disk
    pub fn load_from_file(path: impl AsRef<Path>) -> CloudConfigResult<CloudConfig> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| CloudConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = data.len(), "read clouds document");
        Self::load_from_bytes(&data)
    }

    /// Load from `explicit` when given, otherwise from the first file found on
    /// the conventional search path
    pub fn load(explicit: Option<&Path>) -> CloudConfigResult<CloudConfig> {
        let path = Self::discover(explicit)?;
        Self::load_from_file(path)
    }

    /// Pick the clouds file to read.
    ///
    /// An explicit path is returned untouched so a missing file surfaces as a
    /// read error naming it.
    pub fn discover(explicit: Option<&Path>) -> CloudConfigResult<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }

        let searched = default_search_paths();
        searched
            .iter()
            .find(|candidate| candidate.is_file())
            .cloned()
            .ok_or(CloudConfigError::NoConfigFile { searched })
    }
}

/// Search path built from the process environment.
pub fn default_search_paths() -> Vec<PathBuf> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let xdg = env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    let home = env::var_os("HOME").map(PathBuf::from);
    search_paths(&cwd, xdg.as_deref(), home.as_deref())
}

/// Conventional clouds.yaml locations, highest priority first:
/// 1. `<cwd>/clouds.yaml`
/// 2. `$XDG_CONFIG_HOME/openstack/clouds.yaml`, falling back to `$HOME/.config`
/// 3. `/etc/openstack/clouds.yaml`
pub fn search_paths(cwd: &Path, xdg_config_home: Option<&Path>, home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![cwd.join(CLOUDS_FILE_NAME)];

    let user_config = xdg_config_home
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| home.map(|h| h.join(".config")));
    if let Some(dir) = user_config {
        paths.push(dir.join("openstack").join(CLOUDS_FILE_NAME));
    }

    paths.push(PathBuf::from("/etc/openstack").join(CLOUDS_FILE_NAME));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const YAML: &str = r"
clouds:
  prod:
    region_name: RegionOne
    auth:
      auth_url: https://keystone.example.com/v3
";

    #[test]
    fn test_load_from_bytes() {
        let config = CloudConfigLoader::load_from_bytes(YAML.as_bytes()).expect("YAML should parse");
        assert_eq!(config.len(), 1);
        assert_eq!(config.get_by_name("prod").unwrap().region_name, "RegionOne");
    }

    #[test]
    fn test_load_from_bytes_malformed() {
        let err = CloudConfigLoader::load_from_bytes(b"clouds: {prod: [").unwrap_err();
        assert!(matches!(err, CloudConfigError::Decode(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let config = CloudConfigLoader::load_from_file(file.path()).unwrap();
        assert!(config.contains("prod"));
    }

    #[test]
    fn test_load_from_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.yaml");

        let err = CloudConfigLoader::load_from_file(&missing).unwrap_err();
        match err {
            CloudConfigError::Read { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_discover_returns_explicit_path() {
        let explicit = Path::new("/does/not/exist/clouds.yaml");
        assert_eq!(CloudConfigLoader::discover(Some(explicit)).unwrap(), explicit);
    }

    #[test]
    fn test_search_paths_prefers_xdg() {
        let paths = search_paths(
            Path::new("/work"),
            Some(Path::new("/xdg")),
            Some(Path::new("/home/user")),
        );
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/work/clouds.yaml"),
                PathBuf::from("/xdg/openstack/clouds.yaml"),
                PathBuf::from("/etc/openstack/clouds.yaml"),
            ]
        );
    }

    #[test]
    fn test_search_paths_falls_back_to_home() {
        let paths = search_paths(Path::new("/work"), Some(Path::new("")), Some(Path::new("/home/user")));
        assert_eq!(paths[1], PathBuf::from("/home/user/.config/openstack/clouds.yaml"));
    }

    #[test]
    fn test_search_paths_without_home() {
        let paths = search_paths(Path::new("/work"), None, None);
        assert_eq!(paths.len(), 2);
    }
}
