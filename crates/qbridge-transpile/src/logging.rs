//! Logging setup.
//!
//! Installs a `tracing-subscriber` registry with an environment filter and
//! either human-readable console output or JSON structured logging.

use crate::config::LoggingConfig;
use std::str::FromStr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable console output.
    Console,
    /// JSON structured logging.
    Json,
}

impl FromStr for LogFormat {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(LogFormat::Console),
            "json" => Ok(LogFormat::Json),
            other => Err(LogError::InvalidFormat(other.to_string())),
        }
    }
}

/// Logging setup errors.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Invalid log format: {0}")]
    InvalidFormat(String),

    #[error("Subscriber error: {0}")]
    Init(#[from] TryInitError),
}

/// Initialize logging from `config`.
///
/// An unparsable level falls back to `RUST_LOG`, then to `info`. Fails on an
/// unknown format, or if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), LogError> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let format: LogFormat = config.format.parse()?;
    let fmt_layer = match format {
        LogFormat::Console => fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(level = %config.level, ?format, "Logging initialized");
    Ok(())
}

/// Initialize logging from `QBRIDGE_LOG_LEVEL` and `QBRIDGE_LOG_FORMAT`.
pub fn init_from_env() -> Result<(), LogError> {
    let config = crate::config::Config::default().merge_env();
    init(&config.logging)
}
