//! Geolocation data structures.
//!
//! This module defines the wire format returned by ip-api.com and the flat
//! record printed by the command.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::config::{NO_IP_PROVIDED, STATUS_SUCCESS};
use crate::error_handling::LookupError;
use crate::utils::sanitize_and_truncate_error_message;

/// Body returned by the ip-api.com JSON endpoint.
///
/// Only the fields this crate maps are declared; anything else in the body is
/// ignored. All fields are optional so that schema drift in the descriptive
/// fields shows up as `null` output rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// `"success"` or `"fail"`
    pub status: Option<String>,
    /// Failure reason (`"invalid query"`, `"private range"`, `"reserved range"`, ...)
    pub message: Option<String>,
    /// The address that was looked up, as the service normalized it
    pub query: Option<String>,
    pub country: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub isp: Option<String>,
}

impl ApiResponse {
    /// Maps the body onto a [`Location`], or the service's rejection onto an error.
    ///
    /// # Errors
    ///
    /// - `LookupError::MissingStatus` when the body has no `status`
    /// - `LookupError::Rejected` when `status` is anything but `"success"`
    pub fn into_location(self) -> Result<Location, LookupError> {
        match self.status.as_deref() {
            None => Err(LookupError::MissingStatus),
            Some(STATUS_SUCCESS) => Ok(Location {
                ip: self.query,
                country: self.country,
                state: self.region_name,
                city: self.city,
                isp: self.isp,
            }),
            Some(_) => Err(LookupError::Rejected {
                message: self.message,
            }),
        }
    }
}

/// Coarse location of an IP address.
///
/// Fields the service omitted stay `None` and serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub ip: Option<String>,
    pub country: Option<String>,
    /// Region name (state, province, ...)
    pub state: Option<String>,
    pub city: Option<String>,
    pub isp: Option<String>,
}

/// Outcome of one lookup, printed as a single JSON object.
///
/// Serializes to a flat record gated by `success`:
///
/// ```json
/// {"success":true,"ip":"8.8.8.8","country":"United States","state":"Virginia","city":"Ashburn","isp":"Google LLC"}
/// {"success":false,"message":"invalid query"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// The service resolved the address
    Found(Location),
    /// Anything else; `message` is `None` only when the service rejected the
    /// query without giving a reason
    Failed { message: Option<String> },
}

/// Emitted if serializing a result ever fails, so stdout still carries valid JSON.
const SERIALIZATION_FALLBACK: &str =
    r#"{"success":false,"message":"Failed to serialize lookup result"}"#;

impl LookupResult {
    /// Result for an invocation without an IP argument.
    pub fn missing_ip() -> Self {
        LookupResult::Failed {
            message: Some(NO_IP_PROVIDED.to_string()),
        }
    }

    /// Failure with a locally generated message (sanitized and length-capped).
    pub fn failure(message: impl AsRef<str>) -> Self {
        LookupResult::Failed {
            message: Some(sanitize_and_truncate_error_message(message.as_ref())),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            LookupResult::Found(location) => Some(location),
            LookupResult::Failed { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LookupResult::Found(_) => None,
            LookupResult::Failed { message } => message.as_deref(),
        }
    }

    /// Compact single-line JSON, without a trailing newline.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            log::error!("Failed to serialize lookup result: {}", e);
            SERIALIZATION_FALLBACK.to_string()
        })
    }
}

impl From<Location> for LookupResult {
    fn from(location: Location) -> Self {
        LookupResult::Found(location)
    }
}

impl From<LookupError> for LookupResult {
    fn from(err: LookupError) -> Self {
        match err {
            // The service's own wording is passed through untouched
            LookupError::Rejected { message } => LookupResult::Failed { message },
            other => LookupResult::failure(other.to_message()),
        }
    }
}

impl From<Result<Location, LookupError>> for LookupResult {
    fn from(result: Result<Location, LookupError>) -> Self {
        match result {
            Ok(location) => location.into(),
            Err(err) => err.into(),
        }
    }
}

impl Serialize for LookupResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LookupResult::Found(location) => {
                let mut map = serializer.serialize_map(Some(6))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("ip", &location.ip)?;
                map.serialize_entry("country", &location.country)?;
                map.serialize_entry("state", &location.state)?;
                map.serialize_entry("city", &location.city)?;
                map.serialize_entry("isp", &location.isp)?;
                map.end()
            }
            LookupResult::Failed { message } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("message", message)?;
                map.end()
            }
        }
    }
}
