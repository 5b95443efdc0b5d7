//! Logging configuration and initialization
//!
//! Centralized logging setup for all catalog components. Supports:
//!
//! - Text or JSON output on stderr
//! - Configurable log level with `tracing`'s `EnvFilter` directives
//! - Environment-based configuration (`LOG_LEVEL`, `LOG_FORMAT`, `RUST_LOG`)
//!
//! Prefer structured fields over string interpolation:
//!
//! ```rust
//! use tracing::info;
//!
//! # let book_id = "abc";
//! info!(book_id = %book_id, "book created");
//! ```

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::{CatalogError, Result};

/// Log level for filtering messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert to a tracing [`Level`]
    pub fn to_tracing_level(self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(CatalogError::config(format!("invalid log level: {other}"))),
        }
    }
}

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(CatalogError::config(format!("invalid log format: {other}"))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level emitted when no filter directives are given
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
    /// Optional `EnvFilter` directives, e.g. `catalog_server=debug,tower_http=info`
    pub filter_directives: Option<String>,
}

impl LogConfig {
    /// Build configuration from `LOG_LEVEL`, `LOG_FORMAT` and `RUST_LOG`
    pub fn from_env() -> Result<Self> {
        let level = match std::env::var("LOG_LEVEL") {
            Ok(value) => value.parse()?,
            Err(_) => LogLevel::default(),
        };

        let format = match std::env::var("LOG_FORMAT") {
            Ok(value) => value.parse()?,
            Err(_) => LogFormat::default(),
        };

        Ok(Self {
            level,
            format,
            filter_directives: std::env::var("RUST_LOG").ok(),
        })
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        match &self.filter_directives {
            Some(directives) => EnvFilter::try_new(directives)
                .map_err(|e| CatalogError::config(format!("invalid RUST_LOG directives: {e}"))),
            None => Ok(EnvFilter::new(self.level.to_tracing_level().to_string())),
        }
    }
}

/// Initialize the global tracing subscriber from the given configuration.
///
/// Safe to call more than once; subsequent calls are no-ops so tests that race
/// on subscriber setup do not panic.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = config.env_filter()?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    match result {
        Ok(()) => Ok(()),
        // Another subscriber already claimed the global default.
        Err(err) => {
            tracing::debug!(error = %err, "logging already initialized");
            Ok(())
        }
    }
}
