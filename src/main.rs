//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_geolocate` library that handles:
//! - Reading the IP argument (everything after it is ignored)
//! - Logger initialization
//! - Writing the single JSON line to stdout
//!
//! The process exits 0 for every lookup outcome; failures are reported inside
//! the JSON payload.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use log::debug;

use ip_geolocate::config::ENDPOINT_OVERRIDE_ENV;
use ip_geolocate::initialization::init_logger_with;
use ip_geolocate::{run_lookup, Cli, FailureKind, LookupResult};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Only reachable for arguments that are not valid UTF-8
            let message = e.to_string();
            let first_line = message.lines().next().unwrap_or_default();
            let first_line = first_line.strip_prefix("error: ").unwrap_or(first_line);
            eprintln!("ip_geolocate: {} ({})", first_line, FailureKind::InvalidArguments);
            emit(&LookupResult::failure(first_line));
            return;
        }
    };

    let ignored = cli.ignored.clone();
    let config = cli.into_config(std::env::var(ENDPOINT_OVERRIDE_ENV).ok());

    if let Err(e) = init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")
    {
        eprintln!("ip_geolocate: {:#}", e);
    }

    if !ignored.is_empty() {
        debug!("Ignoring {} extra argument(s): {:?}", ignored.len(), ignored);
    }

    let result = run_lookup(&config).await;
    emit(&result);
}

/// Writes the result as one line on stdout. A closed pipe is not an error worth
/// a non-zero exit.
fn emit(result: &LookupResult) {
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "{}", result.to_json_line());
    let _ = stdout.flush();
}
