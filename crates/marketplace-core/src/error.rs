//! Error types for marketplace core operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in marketplace core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Request to {path} failed: {message}")]
    Request {
        /// Request path, including the query string.
        path: String,
        /// Underlying transport message.
        message: String,
    },

    /// The server answered with a non-success status code.
    #[error("Request to {path} returned HTTP {status}")]
    Status {
        /// Request path, including the query string.
        path: String,
        /// HTTP status code.
        status: u16,
    },

    /// The item catalog could not be loaded.
    #[error("Catalog error at {path}: {message}")]
    Catalog {
        /// Path of the catalog file.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a request error for the given path.
    pub fn request(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Request {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns true if the error came from talking to the backend.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Request { .. } | Self::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_display() {
        let err = Error::request("/search?name=hat", "connection refused");
        assert_eq!(
            err.to_string(),
            "Request to /search?name=hat failed: connection refused"
        );
        assert!(err.is_network());
    }

    #[test]
    fn test_status_error_display() {
        let err = Error::Status {
            path: "/search?name=hat".to_string(),
            status: 500,
        };
        assert_eq!(err.to_string(), "Request to /search?name=hat returned HTTP 500");
        assert!(err.is_network());
    }

    #[test]
    fn test_catalog_error_display() {
        let err = Error::Catalog {
            path: PathBuf::from("/srv/items.json"),
            message: "duplicate item id 3".to_string(),
        };
        assert!(err.to_string().contains("/srv/items.json"));
        assert!(err.to_string().contains("duplicate item id 3"));
        assert!(!err.is_network());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
