//! Error types for the news reader.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The base URL and path did not form a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Connection failure, timeout, or an error reading the body.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any non-2xx response.
    #[error("Unexpected status {0}")]
    Status(u16),

    /// The body was not an article list.
    #[error("Malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API base URL '{url}': {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("Request timeout must be at least one second")]
    ZeroTimeout,
}
