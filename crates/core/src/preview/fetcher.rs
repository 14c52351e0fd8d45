//! Open Graph preview fetching.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-URL fetch timeout.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// The small title/description/image summary of a linked page.
///
/// A total function of the URL: every field degrades independently to the
/// empty string, so downstream code never sees a missing card or a null
/// field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreviewCard {
    pub url: String,
    pub title: String,
    pub desc: String,
    pub image: String,
}

impl PreviewCard {
    /// Card for a URL whose preview could not be obtained.
    pub fn empty(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            desc: String::new(),
            image: String::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.desc.is_empty() && self.image.is_empty()
    }
}

/// Why a preview fetch failed. Degraded to an empty card at the
/// [`PreviewFetcher`] boundary; kept separate so logs name the cause.
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// A source of preview cards. The seam the index builder and tests mock.
#[async_trait]
pub trait PreviewFetcher: Send + Sync {
    /// Fetch the preview card for one URL. Total - failures come back as
    /// an empty card, never as an error.
    async fn fetch(&self, url: &str) -> PreviewCard;
}

/// Fetches previews with one bounded GET per URL, no retries.
pub struct HttpPreviewFetcher {
    client: reqwest::Client,
}

impl HttpPreviewFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn try_fetch(&self, url: &str) -> Result<PreviewCard, PreviewError> {
        let body = self
            .client
            .get(url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?
            .text()
            .await?;
        Ok(parse_preview(url, &body))
    }
}

#[async_trait]
impl PreviewFetcher for HttpPreviewFetcher {
    async fn fetch(&self, url: &str) -> PreviewCard {
        match self.try_fetch(url).await {
            Ok(card) => card,
            Err(err) => {
                debug!("preview for {} unavailable: {}", url, err);
                PreviewCard::empty(url)
            }
        }
    }
}

/// Extracts Open Graph fields from page markup.
///
/// For each field the `<meta property>` tag wins; only when no such
/// tag exists at all is the same-named `<meta name>` tag consulted. A
/// present tag without a `content` attribute yields an empty field.
fn parse_preview(url: &str, html: &str) -> PreviewCard {
    let doc = Html::parse_document(html);
    PreviewCard {
        url: url.to_string(),
        title: meta_content(&doc, "og:title"),
        desc: meta_content(&doc, "og:description"),
        image: meta_content(&doc, "og:image"),
    }
}

fn meta_content(doc: &Html, prop: &str) -> String {
    let by_property =
        Selector::parse(&format!(r#"meta[property="{prop}"]"#)).expect("static selector");
    let by_name = Selector::parse(&format!(r#"meta[name="{prop}"]"#)).expect("static selector");

    doc.select(&by_property)
        .next()
        .or_else(|| doc.select(&by_name).next())
        .and_then(|tag| tag.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_open_graph_tags() {
        let html = r#"<html><head>
            <meta property="og:title" content="Rate cut expected">
            <meta property="og:description" content="Central bank signals easing">
            <meta property="og:image" content="https://img.example.com/a.jpg">
        </head><body></body></html>"#;
        let card = parse_preview("https://news.example.com/a", html);
        assert_eq!(card.url, "https://news.example.com/a");
        assert_eq!(card.title, "Rate cut expected");
        assert_eq!(card.desc, "Central bank signals easing");
        assert_eq!(card.image, "https://img.example.com/a.jpg");
    }

    #[test]
    fn falls_back_to_name_attribute_tags() {
        let html = r#"<head><meta name="og:title" content="Named variant"></head>"#;
        let card = parse_preview("u", html);
        assert_eq!(card.title, "Named variant");
    }

    #[test]
    fn property_tag_without_content_does_not_fall_back() {
        let html = r#"<head>
            <meta property="og:title">
            <meta name="og:title" content="should be ignored">
        </head>"#;
        let card = parse_preview("u", html);
        assert_eq!(card.title, "");
    }

    #[test]
    fn missing_tags_degrade_to_empty_fields() {
        let card = parse_preview("https://plain.example.com", "<html><body>hi</body></html>");
        assert_eq!(card.url, "https://plain.example.com");
        assert!(card.is_blank());
    }

    #[test]
    fn non_html_body_degrades_to_empty_fields() {
        let card = parse_preview("u", "{\"not\": \"html\"}");
        assert!(card.is_blank());
    }
}
