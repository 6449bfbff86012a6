//! Configuration management for SponsorIQ.
//!
//! Configuration lives in a single JSON file at `~/.sponsoriq/config.json`.
//!
//! # Configuration Priority
//!
//! 1. Command-line flags
//! 2. Explicit config file values
//! 3. Default values
//!
//! A missing config file is not an error; defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".sponsoriq"),
        |dirs| dirs.home_dir().join(".sponsoriq"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

// ============================================================================
// Report Configuration
// ============================================================================

/// Report rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default usage mode: "property" (event owner) or "brand" (sponsor)
    #[serde(default = "default_report_mode")]
    pub mode: String,

    /// Currency symbol used in rendered reports
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            mode: default_report_mode(),
            currency: default_currency(),
        }
    }
}

fn default_report_mode() -> String {
    "property".into()
}

fn default_currency() -> String {
    "$".into()
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration for SponsorIQ.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report rendering configuration
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load configuration from an explicit path.
    ///
    /// A missing file yields the default configuration; a present but
    /// malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.report.mode, "property");
        assert_eq!(config.report.currency, "$");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"report": {{"mode": "brand"}}}}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.report.mode, "brand");
        assert_eq!(config.report.currency, "$");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
