//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization and lookup failures)
//! - Failure classification used in log output
//!
//! Every lookup failure ends up as a `{"success": false, "message": ...}` record;
//! nothing here is allowed to surface as a non-zero exit status.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{FailureKind, InitializationError, LookupError};
