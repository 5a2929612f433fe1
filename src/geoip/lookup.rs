//! IP address lookup against the remote geolocation service.
//!
//! One GET per call, no retries and no caching. Every failure is folded into a
//! [`LookupResult`] by [`resolve`]; [`fetch_location`] keeps the typed error for
//! callers that want to branch on it.

use log::{debug, info, warn};
use url::Url;

use super::types::{ApiResponse, Location, LookupResult};
use crate::config::{parse_endpoint, Config, DEFAULT_ENDPOINT};
use crate::error_handling::LookupError;
use crate::initialization::init_client;

/// Builds the request URL by appending `ip` to `endpoint` as one path segment.
///
/// A trailing slash on the endpoint is absorbed, so `http://ip-api.com/json` and
/// `http://ip-api.com/json/` yield the same URL. The IP is not validated;
/// characters that cannot appear in a path segment are percent-encoded.
///
/// # Errors
///
/// Returns `LookupError::InvalidEndpoint` if `endpoint` is not a usable http(s)
/// base URL.
pub fn build_lookup_url(endpoint: &str, ip: &str) -> Result<Url, LookupError> {
    let mut url = parse_endpoint(endpoint)?;
    // parse_endpoint rejects cannot-be-a-base URLs, so path_segments_mut succeeds
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(ip);
    }
    Ok(url)
}

/// Queries the service for `ip` and maps the answer onto a [`Location`].
///
/// The HTTP status code is not inspected: ip-api reports failures in the body,
/// so whatever arrives is parsed as JSON.
///
/// # Errors
///
/// - `LookupError::InvalidEndpoint` for an unusable endpoint
/// - `LookupError::Transport` when no response arrives (DNS, connect, timeout)
/// - `LookupError::Body` when the body cannot be read
/// - `LookupError::Parse` when the body is not a JSON object
/// - `LookupError::MissingStatus` / `LookupError::Rejected` from the body itself
pub async fn fetch_location(
    client: &reqwest::Client,
    endpoint: &str,
    ip: &str,
) -> Result<Location, LookupError> {
    let url = build_lookup_url(endpoint, ip)?;
    debug!("Requesting {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(LookupError::Transport)?;
    debug!("Geolocation service answered HTTP {}", response.status());

    let body = response.text().await.map_err(LookupError::Body)?;
    let parsed: ApiResponse = serde_json::from_str(&body).map_err(LookupError::Parse)?;

    parsed.into_location()
}

/// Resolves `ip` into a [`LookupResult`]. Never fails; errors become failure records.
pub async fn resolve(client: &reqwest::Client, endpoint: &str, ip: &str) -> LookupResult {
    match fetch_location(client, endpoint, ip).await {
        Ok(location) => {
            info!(
                "Resolved {} to {}, {}, {}",
                ip,
                location.city.as_deref().unwrap_or("?"),
                location.state.as_deref().unwrap_or("?"),
                location.country.as_deref().unwrap_or("?")
            );
            location.into()
        }
        Err(e) => {
            warn!("Lookup of '{}' failed ({}): {}", ip, e.kind(), e.to_message());
            e.into()
        }
    }
}

/// Resolves `ip` against ip-api.com with a default client (no timeout).
pub async fn resolve_default(ip: &str) -> LookupResult {
    match init_client(&Config::default()) {
        Ok(client) => resolve(&client, DEFAULT_ENDPOINT, ip).await,
        Err(e) => LookupError::from(e).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_lookup_url_default_endpoint() {
        let url = build_lookup_url(DEFAULT_ENDPOINT, "8.8.8.8").unwrap();
        assert_eq!(url.as_str(), "http://ip-api.com/json/8.8.8.8");
    }

    #[test]
    fn test_build_lookup_url_without_trailing_slash() {
        let url = build_lookup_url("http://ip-api.com/json", "1.1.1.1").unwrap();
        assert_eq!(url.as_str(), "http://ip-api.com/json/1.1.1.1");
    }

    #[test]
    fn test_build_lookup_url_ipv6() {
        let url = build_lookup_url(DEFAULT_ENDPOINT, "2001:4860:4860::8888").unwrap();
        assert_eq!(url.as_str(), "http://ip-api.com/json/2001:4860:4860::8888");
    }

    #[test]
    fn test_build_lookup_url_passes_garbage_through() {
        let url = build_lookup_url(DEFAULT_ENDPOINT, "not-an-ip").unwrap();
        assert_eq!(url.as_str(), "http://ip-api.com/json/not-an-ip");
    }

    #[test]
    fn test_build_lookup_url_encodes_segment() {
        let url = build_lookup_url(DEFAULT_ENDPOINT, "a b/c?d").unwrap();
        assert_eq!(url.as_str(), "http://ip-api.com/json/a%20b%2Fc%3Fd");
    }

    #[test]
    fn test_build_lookup_url_option_like_ip() {
        let url = build_lookup_url(DEFAULT_ENDPOINT, "--help").unwrap();
        assert_eq!(url.as_str(), "http://ip-api.com/json/--help");
        let url = build_lookup_url(DEFAULT_ENDPOINT, "-1").unwrap();
        assert_eq!(url.as_str(), "http://ip-api.com/json/-1");
    }

    #[test]
    fn test_build_lookup_url_empty_ip() {
        let url = build_lookup_url(DEFAULT_ENDPOINT, "").unwrap();
        assert_eq!(url.as_str(), "http://ip-api.com/json/");
    }

    #[test]
    fn test_build_lookup_url_keeps_query() {
        let url = build_lookup_url("http://localhost:8080/json/?lang=de", "8.8.8.8").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/json/8.8.8.8?lang=de");
    }

    #[test]
    fn test_build_lookup_url_invalid_endpoint() {
        let err = build_lookup_url("ip-api.com/json", "8.8.8.8").unwrap_err();
        assert!(matches!(err, LookupError::InvalidEndpoint(_)));
    }

    #[tokio::test]
    async fn test_resolve_invalid_endpoint_is_failure_record() {
        let client = reqwest::Client::new();
        let result = resolve(&client, "not a url", "8.8.8.8").await;
        assert!(!result.is_success());
        assert!(result.message().unwrap().starts_with("Invalid endpoint:"));
    }

    #[tokio::test]
    async fn test_resolve_unreachable_endpoint_is_failure_record() {
        let client = reqwest::Client::new();
        let result = resolve(&client, "http://127.0.0.1:1/json/", "8.8.8.8").await;
        assert!(!result.is_success());
        let message = result.message().unwrap();
        assert!(message.starts_with("Request to geolocation service failed"));
    }
}
