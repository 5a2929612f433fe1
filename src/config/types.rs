//! Configuration types.
//!
//! This module defines the library configuration, its validation, and the log
//! settings it carries.

use thiserror::Error;

use crate::config::constants::DEFAULT_ENDPOINT;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq)]
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
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// The binary only ever fills in `ip` (and, through the documented test hook,
/// `endpoint`); the remaining fields are for programmatic use and tests. The
/// defaults query ip-api.com with no request timeout.
///
/// # Examples
///
/// ```no_run
/// use ip_geolocate::Config;
///
/// let config = Config {
///     ip: Some("8.8.8.8".to_string()),
///     timeout_seconds: Some(5),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address to look up (the remote service validates it)
    pub ip: Option<String>,

    /// Base URL of the ip-api compatible JSON endpoint
    pub endpoint: String,

    /// Request timeout in seconds (`None` waits indefinitely)
    pub timeout_seconds: Option<u64>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl Config {
    /// Checks that the endpoint and timeout are usable.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails:
    /// - `timeout_seconds` when set to 0
    /// - `endpoint` when it is not an absolute http(s) URL that can carry path segments
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == Some(0) {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0 (omit it to disable the timeout)".to_string(),
            });
        }

        parse_endpoint(&self.endpoint)?;

        Ok(())
    }
}

/// Parses an endpoint base URL, accepting only absolute http(s) URLs that can
/// take additional path segments.
///
/// # Errors
///
/// Returns a `ConfigValidationError` for the `endpoint` field describing the problem.
pub fn parse_endpoint(endpoint: &str) -> Result<url::Url, ConfigValidationError> {
    let url = url::Url::parse(endpoint).map_err(|e| ConfigValidationError {
        field: "endpoint",
        message: format!("'{}' is not a valid URL: {}", endpoint, e),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigValidationError {
            field: "endpoint",
            message: format!("scheme must be http or https, got '{}'", url.scheme()),
        });
    }
    if url.cannot_be_a_base() {
        return Err(ConfigValidationError {
            field: "endpoint",
            message: format!("'{}' cannot be used as a base URL", endpoint),
        });
    }
    Ok(url)
}
