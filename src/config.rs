//! Validated runtime settings derived from the command line.

use std::time::Duration;

use url::Url;

use crate::api::TermEncoding;
use crate::cli::Cli;
use crate::error::ConfigError;

/// Runtime configuration shared by the API client and the components.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: Url,
    pub debounce: Duration,
    pub request_timeout: Duration,
    pub term_encoding: TermEncoding,
    pub discard_stale: bool,
}

impl Settings {
    /// Validate the parsed flags. The base URL must parse and use `http` or
    /// `https`, and the request timeout must be non-zero.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let api_base_url = Url::parse(&cli.api_base_url).map_err(|source| ConfigError::BaseUrl {
            url: cli.api_base_url.clone(),
            source,
        })?;
        if !matches!(api_base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(
                api_base_url.scheme().to_string(),
            ));
        }
        if cli.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            api_base_url,
            debounce: Duration::from_millis(cli.debounce_ms),
            request_timeout: Duration::from_secs(cli.timeout_secs),
            term_encoding: if cli.raw_terms {
                TermEncoding::Raw
            } else {
                TermEncoding::Percent
            },
            discard_stale: cli.discard_stale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["news_reader"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_settings_from_defaults() {
        let settings = Settings::from_cli(&cli(&["-u", "http://localhost:8080/api"])).unwrap();
        assert_eq!(settings.api_base_url.as_str(), "http://localhost:8080/api");
        assert_eq!(settings.debounce, Duration::from_millis(1000));
        assert_eq!(settings.request_timeout, Duration::from_secs(10));
        assert_eq!(settings.term_encoding, TermEncoding::Percent);
        assert!(!settings.discard_stale);
    }

    #[test]
    fn test_raw_terms_flag() {
        let settings =
            Settings::from_cli(&cli(&["-u", "http://localhost", "--raw-terms"])).unwrap();
        assert_eq!(settings.term_encoding, TermEncoding::Raw);
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Settings::from_cli(&cli(&["-u", "not a url"])).unwrap_err();
        assert!(matches!(err, ConfigError::BaseUrl { .. }));
    }

    #[test]
    fn test_unsupported_scheme() {
        let err = Settings::from_cli(&cli(&["-u", "ftp://news.example.com"])).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(s) if s == "ftp"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Settings::from_cli(&cli(&["-u", "http://localhost", "-t", "0"])).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout));
    }
}
