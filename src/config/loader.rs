//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the desk
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{DeskError, DeskResult};

use super::types::DeskConfig;

/// File name of the desk configuration inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "desk.yaml";

/// Loads and provides access to the desk configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── desk.yaml
/// ```
///
/// ```yaml
/// api:
///   base_url: https://payroll-api-d6uc.onrender.com
///   timeout_secs: 30
/// session:
///   path: /var/lib/payrun-desk/session.json
/// ```
///
/// Every key is optional; missing keys take their defaults.
///
/// # Example
///
/// ```no_run
/// use payrun_desk::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Payroll API: {}", loader.config().api.base_url);
/// # Ok::<(), payrun_desk::error::DeskError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: DeskConfig,
}

impl ConfigLoader {
    /// Loads `desk.yaml` from the specified directory.
    ///
    /// Returns `ConfigNotFound` if the file is missing and
    /// `ConfigParseError` if it is not valid YAML for [`DeskConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> DeskResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<DeskConfig>(&config_path)?;
        info!(
            path = %config_path.display(),
            base_url = %config.api.base_url,
            "Loaded desk configuration"
        );
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: DeskConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> DeskResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DeskError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| DeskError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &DeskConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_config(contents: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), contents).unwrap();
        dir
    }

    #[test]
    fn test_load_full_configuration() {
        let dir = write_config(
            "api:\n  base_url: https://payroll-api-d6uc.onrender.com\n  timeout_secs: 10\nsession:\n  path: /tmp/desk/session.json\n",
        );
        let loader = ConfigLoader::load(dir.path()).unwrap();
        let config = loader.config();
        assert_eq!(config.api.base_url, "https://payroll-api-d6uc.onrender.com");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.session.path, PathBuf::from("/tmp/desk/session.json"));
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let dir = write_config("api:\n  timeout_secs: 5\n");
        let config = ConfigLoader::load(dir.path()).unwrap().config().clone();
        assert_eq!(config.api.base_url, "http://localhost:5050");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.session, Default::default());
    }

    #[test]
    fn test_empty_mapping_is_default() {
        let dir = write_config("{}\n");
        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(loader.config(), &DeskConfig::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(DeskError::ConfigNotFound { path }) => assert!(path.ends_with("desk.yaml")),
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_wraps_given_config() {
        let mut config = DeskConfig::default();
        config.api.base_url = "https://payroll-api-d6uc.onrender.com".to_string();
        let loader = ConfigLoader::from_config(config.clone());
        assert_eq!(loader.config(), &config);
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = write_config("api:\n  timeout_secs: soon\n");
        let result = ConfigLoader::load(dir.path());
        assert!(matches!(result, Err(DeskError::ConfigParseError { .. })));
    }
}
