//! Configuration loading for the pay run desk.
//!
//! This module loads the desk configuration (payroll API location, request
//! timeout and session storage path) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payrun_desk::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Payroll API: {}", config.config().api.base_url);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    ApiConfig, DEFAULT_BASE_URL, DEFAULT_SESSION_PATH, DEFAULT_TIMEOUT_SECS, DeskConfig,
    SessionConfig,
};
