//! Server configuration.
//!
//! Loaded from the JSON file named by `MARKETPLACE_CONFIG`, falling back to
//! `marketplace.json` in the working directory. A missing file means
//! defaults; a malformed one is an error.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use marketplace_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::logging::LogRotation;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "MARKETPLACE_CONFIG";

/// Config file used when `MARKETPLACE_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "marketplace.json";

/// Backend server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,
    /// JSON file holding the item catalog.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
    /// Directory with the built storefront assets, served at `/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
    /// Where rolling log files go. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_directory: Option<PathBuf>,
    /// Console level for our own crates ("debug", "info", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_level: Option<String>,
    /// Log file level for our own crates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_level: Option<String>,
    /// Log file rotation: "hourly", "daily" or "never".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_rotation: Option<LogRotation>,
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("items.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            catalog_path: default_catalog_path(),
            static_dir: None,
            log_directory: None,
            console_level: None,
            file_level: None,
            log_rotation: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the file named by the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            Error::Configuration(format!("Failed to parse {}: {e}", path.display()))
        })?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Path of the config file, honouring `MARKETPLACE_CONFIG`.
#[must_use]
pub fn config_file_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from)
}
