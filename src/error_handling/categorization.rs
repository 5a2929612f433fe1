//! Error categorization.
//!
//! This module maps transport errors onto [`FailureKind`] for log output.

use super::types::FailureKind;

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// Timeouts are checked before connect errors because a connect timeout
/// reports both.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `FailureKind` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.is_builder() {
        FailureKind::InvalidEndpoint
    } else if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_decode() {
        FailureKind::Parse
    } else {
        FailureKind::Transport
    }
}
