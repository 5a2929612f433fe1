//! Command-line surface of the binary.
//!
//! The binary takes exactly `[IP] [ignored...]`: no flags and no help or
//! version output. Every first argument, including ones that look like
//! options (`--help`, `-1`) or the empty string, is handed to the resolver.

use clap::Parser;

use crate::config::types::Config;

/// Look up country, region, city and ISP for an IP address and print one line of JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ip_geolocate",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// IP address to look up
    #[arg(value_name = "IP", allow_hyphen_values = true)]
    pub ip: Option<String>,

    /// Anything after the IP is accepted and ignored
    #[arg(
        value_name = "IGNORED",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true
    )]
    pub ignored: Vec<String>,
}

impl Cli {
    /// Builds the library configuration for this invocation.
    ///
    /// Everything except the IP keeps its default. `endpoint_override` replaces
    /// the service base URL when set; the binary fills it from
    /// `IP_GEOLOCATE_ENDPOINT` so that tests can point it at a local server.
    pub fn into_config(self, endpoint_override: Option<String>) -> Config {
        let mut config = Config {
            ip: self.ip,
            ..Default::default()
        };
        if let Some(endpoint) = endpoint_override {
            config.endpoint = endpoint;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENDPOINT;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("ip_geolocate").chain(args.iter().copied());
        Cli::try_parse_from(argv).expect("every argument list should parse")
    }

    #[test]
    fn test_no_arguments() {
        let cli = parse(&[]);
        assert_eq!(cli.ip, None);
        assert!(cli.ignored.is_empty());
    }

    #[test]
    fn test_plain_ip() {
        assert_eq!(parse(&["8.8.8.8"]).ip.as_deref(), Some("8.8.8.8"));
    }

    #[test]
    fn test_help_and_version_tokens_are_ips() {
        for token in ["--help", "-h", "--version", "-V"] {
            assert_eq!(parse(&[token]).ip.as_deref(), Some(token), "token {}", token);
        }
    }

    #[test]
    fn test_option_like_tokens_are_ips() {
        for token in ["-1", "--foo", "--endpoint=http://x", "-"] {
            assert_eq!(parse(&[token]).ip.as_deref(), Some(token), "token {}", token);
        }
    }

    #[test]
    fn test_empty_string_is_an_ip() {
        assert_eq!(parse(&[""]).ip.as_deref(), Some(""));
    }

    #[test]
    fn test_trailing_arguments_are_ignored() {
        let cli = parse(&["8.8.8.8", "--help", "1.1.1.1", "-x"]);
        assert_eq!(cli.ip.as_deref(), Some("8.8.8.8"));
        assert_eq!(cli.ignored, vec!["--help", "1.1.1.1", "-x"]);
    }

    #[test]
    fn test_lone_double_dash_ends_options() {
        // `--` is clap's end-of-options marker and is never a value on its own
        assert_eq!(parse(&["--"]).ip, None);
        assert_eq!(parse(&["--", "8.8.8.8"]).ip.as_deref(), Some("8.8.8.8"));
    }

    #[test]
    fn test_into_config_keeps_defaults() {
        let config = parse(&["8.8.8.8", "extra"]).into_config(None);
        assert_eq!(config.ip.as_deref(), Some("8.8.8.8"));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds, None);
    }

    #[test]
    fn test_into_config_applies_endpoint_override() {
        let config = parse(&["8.8.8.8"]).into_config(Some("http://127.0.0.1:9/json/".to_string()));
        assert_eq!(config.endpoint, "http://127.0.0.1:9/json/");
    }
}
