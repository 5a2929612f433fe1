// Shared test helpers for mock ip-api servers and canned response bodies.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Body ip-api.com returns for 8.8.8.8 (trimmed to the usual field set).
#[allow(dead_code)] // Used by other test files
pub fn google_dns_body() -> Value {
    json!({
        "status": "success",
        "country": "United States",
        "countryCode": "US",
        "region": "VA",
        "regionName": "Virginia",
        "city": "Ashburn",
        "zip": "20149",
        "lat": 39.03,
        "lon": -77.5,
        "timezone": "America/New_York",
        "isp": "Google LLC",
        "org": "Google Public DNS",
        "as": "AS15169 Google LLC",
        "query": "8.8.8.8"
    })
}

/// Body ip-api.com returns for input it cannot parse as an address.
#[allow(dead_code)]
pub fn invalid_query_body(query: &str) -> Value {
    json!({
        "status": "fail",
        "message": "invalid query",
        "query": query
    })
}

/// Starts a mock server answering `GET /json/<ip>` with `template`.
#[allow(dead_code)]
pub async fn mock_ip_api(ip: &str, template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/json/{}", ip)))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

/// Endpoint base URL for a mock server, in the same shape as the real one.
#[allow(dead_code)]
pub fn endpoint_for(server: &MockServer) -> String {
    format!("{}/json/", server.uri())
}

/// An endpoint with nothing listening behind it.
///
/// Binds an ephemeral loopback port and releases it again, so connecting is refused.
#[allow(dead_code)]
pub fn unreachable_endpoint() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{}/json/", addr)
}
