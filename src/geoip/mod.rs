//! IP geolocation via the ip-api.com JSON endpoint.
//!
//! This module provides the resolver: it appends the IP to the endpoint, issues a
//! single GET, and maps `query`, `country`, `regionName`, `city` and `isp` from the
//! response onto a flat [`LookupResult`].

mod lookup;
mod types;

// Re-export public API
pub use lookup::{build_lookup_url, fetch_location, resolve, resolve_default};
pub use types::{ApiResponse, Location, LookupResult};
