//! Configuration for qbridge.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with QBRIDGE_ prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use crate::logging::{LogError, LogFormat};
use qbridge_qasm::{MAX_PRECISION, QASM_VERSION, QasmOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// QASM output settings
    #[serde(default)]
    pub qasm: QasmOptions,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "qbridge_transpile=trace")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: "console" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config =
            serde_yaml_ng::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load from file if provided
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };
        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge `QBRIDGE_*` environment variables into this configuration.
    ///
    /// - `QBRIDGE_QASM_PRECISION`: significant digits for angles
    /// - `QBRIDGE_QASM_HEADER`: header comment for QASM output
    /// - `QBRIDGE_LOG_LEVEL`: log level filter
    /// - `QBRIDGE_LOG_FORMAT`: "console" or "json"
    pub fn merge_env(self) -> Self {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Merge overrides from `lookup`, keyed by environment variable name.
    ///
    /// Only variables that are set override the current values; a precision
    /// that does not parse is ignored.
    pub fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("QBRIDGE_QASM_PRECISION") {
            if let Ok(val) = v.parse() {
                self.qasm.precision = val;
            }
        }
        if let Some(v) = lookup("QBRIDGE_QASM_HEADER") {
            self.qasm.header = Some(v);
        }
        if let Some(v) = lookup("QBRIDGE_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("QBRIDGE_LOG_FORMAT") {
            self.logging.format = v;
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Precision must be usable as significant digits of an f64
        if !(1..=MAX_PRECISION).contains(&self.qasm.precision) {
            return Err(ConfigError::ValidationError(format!(
                "QASM precision must be between 1 and {MAX_PRECISION}, got {}",
                self.qasm.precision
            )));
        }

        if self.qasm.version != QASM_VERSION {
            return Err(ConfigError::ValidationError(format!(
                "Unsupported QASM version: {}",
                self.qasm.version
            )));
        }

        self.log_format()?;
        Ok(())
    }

    /// The configured log format.
    pub fn log_format(&self) -> Result<LogFormat, ConfigError> {
        self.logging
            .format
            .parse()
            .map_err(|e: LogError| ConfigError::ValidationError(e.to_string()))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.qasm.precision, 10);
        assert_eq!(config.qasm.version, "2.0");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_with_defaults() {
        let config = Config::from_yaml(
            "qasm:\n  precision: 6\n  header: |\n    Generated by qbridge\nlogging:\n  format: json\n",
        )
        .unwrap();
        assert_eq!(config.qasm.precision, 6);
        assert_eq!(config.qasm.header.as_deref(), Some("Generated by qbridge\n"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.log_format().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_from_yaml_rejects_bad_values() {
        assert!(matches!(
            Config::from_yaml("qasm:\n  precision: 0\n"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            Config::from_yaml("qasm:\n  version: \"3.0\"\n"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            Config::from_yaml("qasm: 5\n"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_vars() {
        let config = Config::default().merge_vars(|key| match key {
            "QBRIDGE_QASM_PRECISION" => Some("12".to_string()),
            "QBRIDGE_LOG_LEVEL" => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(config.qasm.precision, 12);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "console");
        assert!(config.qasm.header.is_none());
    }

    #[test]
    fn test_merge_vars_ignores_bad_precision() {
        let config = Config::default().merge_vars(|key| {
            (key == "QBRIDGE_QASM_PRECISION").then(|| "many".to_string())
        });
        assert_eq!(config.qasm.precision, 10);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qbridge.yaml");
        std::fs::write(&path, "logging:\n  level: warn\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.logging.level, "warn");

        let missing = Config::from_file(dir.path().join("missing.yaml"));
        assert!(matches!(missing, Err(ConfigError::IoError(_))));
    }
}
