//! HTTP client initialization.

use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for the lookup.
///
/// No default headers are added and no timeout is set unless
/// `config.timeout_seconds` is present; without it, the request waits as long as
/// the remote service takes.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend or
/// connector cannot be created.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new();
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().map_err(InitializationError::HttpClientError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_without_timeout() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_with_timeout() {
        let config = Config {
            timeout_seconds: Some(2),
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
