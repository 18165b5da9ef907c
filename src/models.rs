//! Data models for articles returned by the news API.
//!
//! - [`Article`]: a single news item as rendered by a news card
//! - [`Source`]: the publisher attached to an article
//! - [`NewsPayload`]: the response body of a `news` request
//!
//! The wire format uses camelCase names (`urlToImage`, `publishedAt`). News
//! APIs routinely emit `null` for text fields, so every string field here
//! tolerates both a missing key and an explicit `null`, mapping them to `""`.

use serde::{Deserialize, Deserializer, Serialize};

/// A news article as received from the API.
///
/// Articles are immutable once received. They are owned by the component
/// that fetched them and replaced wholesale on the next fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    /// The article headline.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// A short description or lede.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// URL of the lead image.
    #[serde(
        rename = "urlToImage",
        alias = "imageUrl",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub image_url: String,
    /// The publisher, if the API reported one.
    #[serde(default)]
    pub source: Option<Source>,
    /// Publication timestamp, displayed verbatim.
    #[serde(rename = "publishedAt", default, deserialize_with = "null_as_empty")]
    pub published_at: String,
}

impl Article {
    /// Name of the publisher, or an empty string when the source is absent.
    pub fn source_name(&self) -> &str {
        self.source.as_ref().map(|s| s.name.as_str()).unwrap_or_default()
    }
}

/// The publisher of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Source {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Response body of a `news` request.
///
/// The API wraps the collection as `{ "data": [...] }`; a bare array is
/// accepted as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NewsPayload {
    Wrapped { data: Vec<Article> },
    Bare(Vec<Article>),
}

impl NewsPayload {
    /// Articles in payload order, whichever shape the body had.
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            NewsPayload::Wrapped { data } => data,
            NewsPayload::Bare(data) => data,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
