//! News API client.
//!
//! Components never talk to HTTP directly. They depend on the [`NewsApi`]
//! trait, which resolves a relative path such as `news` or `news/rates`
//! against the configured base URL and returns the decoded article list.
//!
//! # Architecture
//!
//! - [`NewsApi`]: core trait defining one async `GET`
//! - [`HttpNewsApi`]: reqwest-backed implementation
//! - [`news_path`] / [`search_path`]: the two request paths the UI issues
//!
//! There is deliberately no retry policy here. A failed request is returned
//! as an [`ApiError`] and the calling component decides what to keep.

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::ApiError;
use crate::models::{Article, NewsPayload};

/// Path of the default article collection.
pub const NEWS_PATH: &str = "news";

/// How a search term is placed into the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEncoding {
    /// Percent-encode the term so it always lands in a single path segment.
    Percent,
    /// Concatenate the term verbatim. Characters such as `/`, `?` or `#`
    /// change the meaning of the resulting URL.
    Raw,
}

/// Trait for fetching articles from the news API.
///
/// Implementors resolve `path` relative to their base URL and return the
/// articles in response order.
pub trait NewsApi {
    async fn get(&self, path: &str) -> Result<Vec<Article>, ApiError>;
}

/// Path for the default article collection.
pub fn news_path() -> String {
    NEWS_PATH.to_string()
}

/// Path for articles matching `term`.
///
/// An empty term yields `news/`, which the API treats as the unfiltered set.
pub fn search_path(term: &str, encoding: TermEncoding) -> String {
    match encoding {
        TermEncoding::Percent => format!("{}/{}", NEWS_PATH, urlencoding::encode(term)),
        TermEncoding::Raw => format!("{}/{}", NEWS_PATH, term),
    }
}

/// reqwest-backed [`NewsApi`].
#[derive(Debug, Clone)]
pub struct HttpNewsApi {
    client: Client,
    base_url: Url,
}

impl HttpNewsApi {
    /// Build a client with the given per-request timeout.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Join `path` onto the base URL as `<base>/<path>`.
    ///
    /// `Url::join` would replace the last segment of a base without a
    /// trailing slash, so the two halves are concatenated instead.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!(
            "{}/{}",
            base,
            path.trim_start_matches('/')
        ))?)
    }
}

impl NewsApi for HttpNewsApi {
    #[instrument(level = "debug", skip(self))]
    async fn get(&self, path: &str) -> Result<Vec<Article>, ApiError> {
        let t0 = Instant::now();
        let url = self.endpoint(path)?;
        debug!(%url, "Issuing news request");

        let res = fetch(&self.client, url).await;
        let elapsed_ms = t0.elapsed().as_millis() as u64;

        match &res {
            Ok(articles) => debug!(elapsed_ms, count = articles.len(), "News request succeeded"),
            Err(e) => warn!(elapsed_ms, error = %e, "News request failed"),
        }
        res
    }
}

async fn fetch(client: &Client, url: Url) -> Result<Vec<Article>, ApiError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    let body = response.bytes().await?;
    let payload: NewsPayload = serde_json::from_slice(&body)?;
    Ok(payload.into_articles())
}
