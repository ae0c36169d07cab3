//! Configuration types.
//!
//! This module defines the library configuration struct and the logging
//! enums shared between the library and the CLI binary.

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_ELIGIBLE_FARES, HTTP_TIMEOUT_SECS, SMILES_API_URL};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration.
///
/// Constructed programmatically by the caller; the library never reads
/// credentials from global state. The API key and telemetry identifier are
/// injected here once and fixed for the lifetime of the client built from
/// this config.
///
/// # Examples
///
/// ```
/// use miles_search::Config;
///
/// let config = Config::new("my-api-key", "my-telemetry-id");
/// assert_eq!(config.timeout_seconds, 30);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// API key sent as the `x-api-key` header on every upstream request
    pub api_key: String,

    /// Telemetry identifier sent as the `x-strackid` header
    pub telemetry_id: String,

    /// Upstream search endpoint (defaults to the production Smiles API)
    pub api_base_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Fare-class tokens eligible for cheapest-mile-price selection
    pub eligible_fares: Vec<String>,
}

impl Config {
    /// Creates a configuration with the given credentials and default
    /// endpoint, timeout, and fare allow-list.
    pub fn new(api_key: impl Into<String>, telemetry_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            telemetry_id: telemetry_id.into(),
            api_base_url: SMILES_API_URL.to_string(),
            timeout_seconds: HTTP_TIMEOUT_SECS,
            eligible_fares: DEFAULT_ELIGIBLE_FARES
                .iter()
                .map(|fare| (*fare).to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new("key", "telemetry");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.telemetry_id, "telemetry");
        assert_eq!(config.api_base_url, SMILES_API_URL);
        assert_eq!(config.timeout_seconds, HTTP_TIMEOUT_SECS);
        assert_eq!(config.eligible_fares, vec!["SMILES", "SMILES_CLUB"]);
    }
}
