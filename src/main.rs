//! # News Reader
//!
//! Terminal news reader with a debounced search-with-suggestions box.
//!
//! ## Usage
//!
//! ```sh
//! news_reader --api-base-url http://localhost:8080/api
//! ```
//!
//! Type to search, `:click <col> <row>` to send a pointer event, `:quit` to
//! exit. Logs go to stderr; set `RUST_LOG=news_reader=debug` for detail.

use std::error::Error;
use std::rc::Rc;

use clap::Parser;
use tokio::task::LocalSet;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use news_reader::api::HttpNewsApi;
use news_reader::cli::Cli;
use news_reader::config::Settings;
use news_reader::host;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_reader starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let settings = match Settings::from_cli(&args) {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };
    info!(
        api_base_url = %settings.api_base_url,
        debounce_ms = settings.debounce.as_millis() as u64,
        term_encoding = ?settings.term_encoding,
        discard_stale = settings.discard_stale,
        "Loaded configuration"
    );

    let api = Rc::new(HttpNewsApi::new(
        settings.api_base_url.clone(),
        settings.request_timeout,
    )?);

    LocalSet::new().run_until(host::run(api, &settings)).await?;

    let elapsed = start_time.elapsed();
    info!(?elapsed, secs = elapsed.as_secs(), "Execution complete");
    Ok(())
}
