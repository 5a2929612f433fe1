//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default endpoint, fixed messages, limits)
//! - The library `Config` and its validation
//! - The binary's minimal argument parser

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::Cli;
pub use constants::*;
pub use types::{parse_endpoint, Config, ConfigValidationError, LogFormat, LogLevel};
