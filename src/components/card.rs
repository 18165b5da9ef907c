//! Presentational block for a single article.

use std::fmt;

use crate::models::Article;

/// Renders one article as a block of text lines:
///
/// ```text
/// [img] https://img.example.com/rates.jpg
/// Rates held steady
/// Wire Service - 2025-05-06T14:30:00Z
/// The central bank paused.
/// ```
///
/// Fields are shown as received. A missing source renders as an empty name.
#[derive(Debug, Clone, Copy)]
pub struct NewsCard<'a> {
    article: &'a Article,
}

impl<'a> NewsCard<'a> {
    pub fn new(article: &'a Article) -> Self {
        Self { article }
    }

    pub fn lines(&self) -> Vec<String> {
        let a = self.article;
        let mut lines = vec![
            format!("[img] {}", a.image_url),
            a.title.clone(),
            format!("{} - {}", a.source_name(), a.published_at),
        ];
        lines.extend(a.description.lines().map(str::to_string));
        lines
    }
}

impl fmt::Display for NewsCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Render `articles` as consecutive cards, each line prefixed with `indent`.
pub fn render_cards(articles: &[Article], indent: &str) -> Vec<String> {
    articles
        .iter()
        .flat_map(|a| NewsCard::new(a).lines())
        .map(|line| format!("{}{}", indent, line))
        .collect()
}
