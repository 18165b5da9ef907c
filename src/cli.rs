//! Command-line interface definitions for the news reader.
//!
//! Every option can also be supplied through an environment variable, which
//! is how the API base URL is normally configured.

use clap::Parser;

/// Command-line arguments for the news reader.
///
/// # Examples
///
/// ```sh
/// # Point at a local API
/// news_reader --api-base-url http://localhost:8080/api
///
/// # Same, configured through the environment, with a shorter debounce
/// NEWS_API_BASE_URL=http://localhost:8080/api news_reader --debounce-ms 300
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base URL of the news API; requests go to `<base>/news` and `<base>/news/<term>`
    #[arg(short = 'u', long, env = "NEWS_API_BASE_URL")]
    pub api_base_url: String,

    /// Quiet period after the last keystroke before suggestions are fetched
    #[arg(short, long, env = "NEWS_DEBOUNCE_MS", default_value_t = 1000)]
    pub debounce_ms: u64,

    /// Per-request timeout in seconds
    #[arg(short, long, env = "NEWS_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Concatenate search terms into the request path without percent-encoding
    #[arg(long)]
    pub raw_terms: bool,

    /// Ignore suggestion responses that arrive after a newer request was issued
    #[arg(long)]
    pub discard_stale: bool,
}
