//! ip_geolocate library: resolve an IP address to coarse geolocation metadata
//!
//! This library queries the public ip-api.com JSON endpoint for a single IP address
//! and reduces the answer to a flat record of country, region, city and ISP. Every
//! failure (missing argument, rejected query, network or parse error) becomes a
//! `{"success": false, "message": ...}` record instead of an error.
//!
//! # Example
//!
//! ```no_run
//! use ip_geolocate::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = Config {
//!     ip: Some("8.8.8.8".to_string()),
//!     timeout_seconds: Some(10),
//!     ..Default::default()
//! };
//!
//! let result = run_lookup(&config).await;
//! println!("{}", result.to_json_line());
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod error_handling;
pub mod geoip;
pub mod initialization;
mod utils;

// Re-export public API
pub use config::{Cli, Config, ConfigValidationError, LogFormat, LogLevel};
pub use error_handling::{FailureKind, LookupError};
pub use geoip::{fetch_location, resolve, resolve_default, Location, LookupResult};
pub use run::run_lookup;

// Internal run module (contains the entry-point logic)
mod run {
    use log::{debug, warn};

    use crate::config::Config;
    use crate::error_handling::{FailureKind, LookupError};
    use crate::geoip::{resolve, LookupResult};
    use crate::initialization::init_client;

    /// Runs one lookup as described by `config`.
    ///
    /// Without `config.ip` the resolver is skipped and the result is the fixed
    /// `"No IP provided"` failure. Otherwise the configuration is validated, an
    /// HTTP client is built and the IP is resolved against `config.endpoint`.
    ///
    /// This never returns an error: every failure is already folded into the
    /// returned [`LookupResult`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ip_geolocate::{run_lookup, Config};
    ///
    /// # async fn example() {
    /// let result = run_lookup(&Config::default()).await;
    /// assert_eq!(result.message(), Some("No IP provided"));
    /// # }
    /// ```
    pub async fn run_lookup(config: &Config) -> LookupResult {
        let Some(ip) = config.ip.as_deref() else {
            debug!("Skipping lookup ({})", FailureKind::MissingArgument);
            return LookupResult::missing_ip();
        };

        if let Err(e) = config.validate() {
            warn!("Refusing to run lookup: {}", e);
            return LookupError::from(e).into();
        }

        let client = match init_client(config) {
            Ok(client) => client,
            Err(e) => {
                let err = LookupError::from(e);
                warn!("Lookup of '{}' failed ({}): {}", ip, err.kind(), err.to_message());
                return err.into();
            }
        };

        resolve(&client, &config.endpoint, ip).await
    }
}
