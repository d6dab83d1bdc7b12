//! Structured logging for the backend.
//!
//! Console output is human-readable and filtered by `RUST_LOG` when set.
//! File output is JSON, rolled by [`LogRotation`] under the log directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::ServerConfig;

/// Crates whose events we always want at the configured level.
const OWN_TARGETS: [&str; 2] = ["marketplace_server", "marketplace_core"];

/// Logging configuration options.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory where log files are stored.
    pub log_directory: PathBuf,
    /// Log file name prefix ("marketplace" -> "marketplace.2026-01-15").
    pub log_file_prefix: String,
    /// Maximum level for our own crates on the console.
    pub console_level: Level,
    /// Maximum level for our own crates in the log file.
    pub file_level: Level,
    /// How often to roll the log file.
    pub rotation: LogRotation,
    /// Whether to colour console output.
    pub console_ansi: bool,
    /// Whether to include file/line info on the console.
    pub include_file_line: bool,
    /// Whether to log request span open/close.
    pub log_span_events: bool,
    /// Whether tower-http request traces are emitted.
    pub trace_requests: bool,
}

/// Log rotation frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// New file every hour.
    Hourly,
    /// New file every day.
    Daily,
    /// Single file, never rolled.
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Hourly => Self::HOURLY,
            LogRotation::Daily => Self::DAILY,
            LogRotation::Never => Self::NEVER,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::production()
    }
}

impl LoggingConfig {
    /// Verbose logging with request spans, for local work.
    #[must_use]
    pub fn development() -> Self {
        Self {
            log_directory: default_log_directory(),
            log_file_prefix: "marketplace".to_string(),
            console_level: Level::DEBUG,
            file_level: Level::TRACE,
            rotation: LogRotation::Hourly,
            console_ansi: true,
            include_file_line: true,
            log_span_events: true,
            trace_requests: true,
        }
    }

    /// Quiet console, daily JSON files.
    #[must_use]
    pub fn production() -> Self {
        Self {
            log_directory: default_log_directory(),
            log_file_prefix: "marketplace".to_string(),
            console_level: Level::INFO,
            file_level: Level::DEBUG,
            rotation: LogRotation::Daily,
            console_ansi: true,
            include_file_line: false,
            log_span_events: false,
            trace_requests: false,
        }
    }

    /// Pick development or production by build type.
    #[must_use]
    pub fn auto() -> Self {
        if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }

    /// Build-type preset with the overrides from the server config applied.
    pub fn for_server(config: &ServerConfig) -> Result<Self, LoggingError> {
        let mut logging = Self::auto();
        if let Some(dir) = &config.log_directory {
            logging = logging.with_log_directory(dir);
        }
        if let Some(level) = &config.console_level {
            logging = logging.with_console_level(parse_level(level)?);
        }
        if let Some(level) = &config.file_level {
            logging = logging.with_file_level(parse_level(level)?);
        }
        if let Some(rotation) = config.log_rotation {
            logging = logging.with_rotation(rotation);
        }
        Ok(logging)
    }

    /// Set the log directory.
    #[must_use]
    pub fn with_log_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_directory = path.into();
        self
    }

    /// Set the console log level.
    #[must_use]
    pub const fn with_console_level(mut self, level: Level) -> Self {
        self.console_level = level;
        self
    }

    /// Set the file log level.
    #[must_use]
    pub const fn with_file_level(mut self, level: Level) -> Self {
        self.file_level = level;
        self
    }

    /// Set the log rotation frequency.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: LogRotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Console filter used when `RUST_LOG` is not set.
    fn console_filter(&self) -> Result<EnvFilter, LoggingError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        own_filter("warn", self.console_level, self.trace_requests)
    }

    fn file_filter(&self) -> Result<EnvFilter, LoggingError> {
        own_filter("info", self.file_level, self.trace_requests)
    }
}

/// Guard that keeps file logging active. Drop it to flush the log file.
pub struct LoggingGuard {
    _file_guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for as long as the server runs.
///
/// # Errors
///
/// Fails if the log directory cannot be created or a subscriber is already
/// installed.
pub fn init(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    ensure_directory(&config.log_directory)?;

    let file_appender = RollingFileAppender::new(
        config.rotation.into(),
        &config.log_directory,
        &config.log_file_prefix,
    );
    let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);

    let span_events = if config.log_span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let console_layer = fmt::layer()
        .with_ansi(config.console_ansi)
        .with_file(config.include_file_line)
        .with_line_number(config.include_file_line)
        .with_span_events(span_events.clone())
        .with_filter(config.console_filter()?);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .json()
        .with_filter(config.file_filter()?);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Default log directory under the platform data dir.
#[must_use]
pub fn default_log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marketplace")
        .join("logs")
}

fn ensure_directory(path: &Path) -> Result<(), LoggingError> {
    if path.exists() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(|e| LoggingError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn own_filter(base: &str, level: Level, trace_requests: bool) -> Result<EnvFilter, LoggingError> {
    let level = level_to_directive(level);
    let mut filter = EnvFilter::new(base);
    for target in OWN_TARGETS {
        filter = filter.add_directive(parse_directive(&format!("{target}={level}"))?);
    }
    if trace_requests {
        filter = filter.add_directive(parse_directive("tower_http=debug")?);
    }
    Ok(filter)
}

fn parse_level(level: &str) -> Result<Level, LoggingError> {
    level
        .parse()
        .map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

fn parse_directive(
    directive: &str,
) -> Result<tracing_subscriber::filter::Directive, LoggingError> {
    directive
        .parse()
        .map_err(|_| LoggingError::InvalidDirective(directive.to_string()))
}

const fn level_to_directive(level: Level) -> &'static str {
    match level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    }
}

/// Errors that can occur during logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Failed to create log directory {path}: {reason}")]
    DirectoryCreationFailed { path: PathBuf, reason: String },

    /// A configured level is not one of trace, debug, info, warn, error.
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// A filter directive did not parse.
    #[error("Invalid log filter directive: {0}")]
    InvalidDirective(String),

    /// Another global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_production() {
        let config = LoggingConfig::default();
        assert_eq!(config.console_level, Level::INFO);
        assert_eq!(config.rotation, LogRotation::Daily);
        assert!(!config.trace_requests);
    }

    #[test]
    fn test_development_config() {
        let config = LoggingConfig::development();
        assert_eq!(config.console_level, Level::DEBUG);
        assert_eq!(config.file_level, Level::TRACE);
        assert_eq!(config.rotation, LogRotation::Hourly);
        assert!(config.log_span_events);
        assert!(config.trace_requests);
    }

    #[test]
    fn test_for_server_applies_overrides() {
        let server = ServerConfig {
            log_directory: Some(PathBuf::from("/tmp/marketplace-logs")),
            console_level: Some("warn".to_string()),
            file_level: Some("INFO".to_string()),
            log_rotation: Some(LogRotation::Never),
            ..ServerConfig::default()
        };

        let config = LoggingConfig::for_server(&server).unwrap();
        assert_eq!(config.log_directory, PathBuf::from("/tmp/marketplace-logs"));
        assert_eq!(config.console_level, Level::WARN);
        assert_eq!(config.file_level, Level::INFO);
        assert_eq!(config.rotation, LogRotation::Never);
    }

    #[test]
    fn test_for_server_without_overrides_is_auto() {
        let config = LoggingConfig::for_server(&ServerConfig::default()).unwrap();
        let auto = LoggingConfig::auto();
        assert_eq!(config.console_level, auto.console_level);
        assert_eq!(config.file_level, auto.file_level);
        assert_eq!(config.rotation, auto.rotation);
        assert_eq!(config.log_directory, default_log_directory());
    }

    #[test]
    fn test_for_server_rejects_unknown_level() {
        let server = ServerConfig {
            console_level: Some("loud".to_string()),
            ..ServerConfig::default()
        };
        let err = LoggingConfig::for_server(&server).unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLevel(ref level) if level == "loud"));
    }

    #[test]
    fn test_log_rotation_conversion() {
        assert!(matches!(Rotation::from(LogRotation::Hourly), Rotation::HOURLY));
        assert!(matches!(Rotation::from(LogRotation::Daily), Rotation::DAILY));
        assert!(matches!(Rotation::from(LogRotation::Never), Rotation::NEVER));
    }

    #[test]
    fn test_own_filter_parses() {
        let filter = own_filter("warn", Level::DEBUG, true).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("marketplace_server=debug"));
        assert!(rendered.contains("marketplace_core=debug"));
        assert!(rendered.contains("tower_http=debug"));
    }

    #[test]
    fn test_ensure_directory_creates_nested() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("logs");
        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_default_log_directory() {
        let dir = default_log_directory();
        assert!(dir.ends_with("marketplace/logs"));
    }
}
