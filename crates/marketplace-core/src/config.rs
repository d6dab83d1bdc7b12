//! Storefront client configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::query::SEARCH_PATH;

/// Settings shared by the storefront components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Base URL prepended to backend paths. Empty means same origin.
    #[serde(default)]
    pub api_base_url: String,
    /// Path the session cookies were set on.
    #[serde(default = "default_cookie_path")]
    pub cookie_path: String,
    /// Path of the backend search endpoint.
    #[serde(default = "default_search_path")]
    pub search_path: String,
}

fn default_cookie_path() -> String {
    "/".to_string()
}

fn default_search_path() -> String {
    SEARCH_PATH.to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            cookie_path: default_cookie_path(),
            search_path: default_search_path(),
        }
    }
}

impl StorefrontConfig {
    /// Parse configuration from JSON, filling in defaults for missing fields.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(?config, "Loaded storefront configuration");
        Ok(config)
    }

    /// Check that the configured paths are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.cookie_path.starts_with('/') {
            return Err(Error::Configuration(format!(
                "cookie_path must start with '/': {}",
                self.cookie_path
            )));
        }
        if !self.search_path.starts_with('/') {
            return Err(Error::Configuration(format!(
                "search_path must start with '/': {}",
                self.search_path
            )));
        }
        Ok(())
    }

    /// Join a backend path onto the configured base URL.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url.trim_end_matches('/'))
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.cookie_path, "/");
        assert_eq!(config.search_path, "/search");
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = StorefrontConfig::from_json(r#"{"api_base_url":"http://localhost:9000"}"#).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert_eq!(config.cookie_path, "/");
        assert_eq!(config.search_path, "/search");
    }

    #[test]
    fn test_from_json_rejects_relative_paths() {
        let err = StorefrontConfig::from_json(r#"{"search_path":"search"}"#).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = StorefrontConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_url_for() {
        let same_origin = StorefrontConfig::default();
        assert_eq!(same_origin.url_for("/items"), "/items");

        let remote = StorefrontConfig::default().with_api_base_url("http://api.local/");
        assert_eq!(remote.url_for("/search?name=x"), "http://api.local/search?name=x");
    }
}
