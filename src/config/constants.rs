//! Configuration constants.
//!
//! Default endpoint, output messages and size limits used across the crate.

/// Default ip-api.com JSON endpoint. The IP is appended as the last path segment.
///
/// ip-api's free tier is plain HTTP only; HTTPS requires a paid key.
pub const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json/";

/// Status value ip-api reports for a successful lookup.
pub const STATUS_SUCCESS: &str = "success";

/// Message emitted when the command is invoked without an IP argument.
pub const NO_IP_PROVIDED: &str = "No IP provided";

/// Maximum failure message length in characters.
/// Longer messages are truncated with a note about the original length.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;

/// Environment variable the binary reads to replace the service base URL.
///
/// This is the only environment input the binary honours. It exists so that
/// tests can run the binary against a local mock server.
pub const ENDPOINT_OVERRIDE_ENV: &str = "IP_GEOLOCATE_ENDPOINT";
