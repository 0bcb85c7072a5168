//! Configuration types for the pay run desk.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `desk.yaml`.

use std::path::PathBuf;

use serde::Deserialize;

/// Default payroll API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5050";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default location of the persisted operator session.
pub const DEFAULT_SESSION_PATH: &str = ".payrun-desk/session.json";

/// Connection settings for the payroll API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the payroll API (e.g., "https://payroll-api-d6uc.onrender.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where the operator session is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Path of the session file.
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

/// The complete desk configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeskConfig {
    /// Payroll API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Session storage settings.
    #[serde(default)]
    pub session: SessionConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_session_path() -> PathBuf {
    PathBuf::from(DEFAULT_SESSION_PATH)
}
