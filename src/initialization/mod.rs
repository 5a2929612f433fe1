//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger (stderr, plain or JSON)
//! - HTTP client (optional timeout)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
