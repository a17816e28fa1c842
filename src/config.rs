//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines the fixed
//! parameters of the weekly population job. The job's sample count and
//! cadence are deliberately constants rather than configuration: every
//! deployment runs the same schedule, and the candidate list is sized
//! against `SAMPLE_COUNT` at compile time.

use chrono::{NaiveTime, Weekday};
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Weekly Population Job
// =============================================================================

/// Number of questions written per weekly run, one per upcoming day.
pub const SAMPLE_COUNT: usize = 8;

/// Day of week the population job fires.
pub const WEEKLY_RUN_WEEKDAY: Weekday = Weekday::Sun;

/// Time of day (UTC) the population job fires: midnight.
pub const WEEKLY_RUN_TIME: NaiveTime = NaiveTime::MIN;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "qotd_scheduler=debug,sqlx=warn";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        if config.logging.format != "text" && config.logging.format != "json" {
            return Err(ConfigError::Validation(format!(
                "Unknown logging format '{}'. Expected \"text\" or \"json\"",
                config.logging.format
            )));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
