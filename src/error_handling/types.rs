//! Error type definitions.
//!
//! This module defines the initialization errors, the lookup error carried by the
//! resolver, and the failure classification used in log output.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::ConfigValidationError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error")]
    HttpClientError(#[source] ReqwestError),
}

/// Everything that can stop a lookup from producing a location.
///
/// The `Display` text of each variant describes only its own layer; the
/// underlying cause is reachable through `source()`. Use
/// [`LookupError::to_message`] to render the whole chain.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The configured endpoint cannot be used to build a request URL.
    #[error(transparent)]
    InvalidEndpoint(#[from] ConfigValidationError),

    /// The HTTP client could not be created.
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// The request could not be sent or no response arrived (DNS, connect, timeout).
    #[error("Request to geolocation service failed")]
    Transport(#[source] ReqwestError),

    /// The response body could not be read.
    #[error("Failed to read response body")]
    Body(#[source] ReqwestError),

    /// The response body is not the JSON object the service documents.
    #[error("Malformed response from geolocation service")]
    Parse(#[source] serde_json::Error),

    /// The body parsed but carries no `status` field.
    #[error("Response from geolocation service is missing the \"status\" field")]
    MissingStatus,

    /// The service answered with a non-success status.
    #[error("Lookup rejected by geolocation service: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected {
        /// The service's `message` field, verbatim
        message: Option<String>,
    },
}

impl LookupError {
    /// Classifies the error for logging.
    pub fn kind(&self) -> FailureKind {
        match self {
            LookupError::InvalidEndpoint(_) => FailureKind::InvalidEndpoint,
            LookupError::Initialization(_) => FailureKind::Initialization,
            LookupError::Transport(source) | LookupError::Body(source) => {
                super::categorize_reqwest_error(source)
            }
            LookupError::Parse(_) | LookupError::MissingStatus => FailureKind::Parse,
            LookupError::Rejected { .. } => FailureKind::RemoteRejected,
        }
    }

    /// Renders the error and all of its sources as one line, outermost first.
    ///
    /// `"Request to geolocation service failed: error sending request for url (...): ..."`
    pub fn to_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            // transparent variants and reqwest both repeat inner text in places
            if !message.ends_with(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }
}

/// Coarse classification of a failed lookup.
///
/// Every kind collapses to the same `{"success": false, "message": ...}` output;
/// the kind only shows up in log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// No IP argument on the command line
    MissingArgument,
    /// Options could not be parsed
    InvalidArguments,
    /// Endpoint URL is unusable
    InvalidEndpoint,
    /// Logger or HTTP client could not be set up
    Initialization,
    /// Service answered with a non-success status
    RemoteRejected,
    /// Request did not complete in the configured time
    Timeout,
    /// TCP/DNS connection could not be established
    Connect,
    /// Any other transport-level failure
    Transport,
    /// Body was not the expected JSON document
    Parse,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::MissingArgument => "missing argument",
            FailureKind::InvalidArguments => "invalid arguments",
            FailureKind::InvalidEndpoint => "invalid endpoint",
            FailureKind::Initialization => "initialization error",
            FailureKind::RemoteRejected => "rejected by remote service",
            FailureKind::Timeout => "request timeout",
            FailureKind::Connect => "connect error",
            FailureKind::Transport => "transport error",
            FailureKind::Parse => "parse error",
        }
    }
}
