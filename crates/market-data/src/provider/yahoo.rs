//! Yahoo Finance quote-page provider.
//!
//! Scrapes the public quote page rather than the JSON API: the dashboard
//! only needs the headline price and percent change, which the page exposes
//! under stable `data-testid` markers. Any structural drift in the page
//! degrades the affected symbol to unavailable, never to a pipeline error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use rust_decimal::Decimal;
use scraper::{Html, Selector};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::ResolvedQuote;
use crate::provider::QuoteProvider;

const QUOTE_PAGE_BASE: &str = "https://finance.yahoo.com/quote";

/// Per-symbol fetch timeout.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser-ish user agent; the quote page serves a reduced document to
/// unknown clients.
const USER_AGENT: &str = "Mozilla/5.0";

/// Quote provider backed by the Yahoo Finance quote page.
///
/// Holds a caller-supplied [`reqwest::Client`] so the connection pool is
/// shared across all symbol fetches of a pass.
pub struct YahooQuotePage {
    client: reqwest::Client,
}

impl YahooQuotePage {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn quote_url(symbol: &str) -> String {
        format!("{}/{}", QUOTE_PAGE_BASE, encode(symbol))
    }
}

#[async_trait]
impl QuoteProvider for YahooQuotePage {
    async fn fetch_quote(&self, symbol: &str) -> Result<ResolvedQuote, MarketDataError> {
        let body = self
            .client
            .get(Self::quote_url(symbol))
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?
            .text()
            .await?;
        parse_quote_page(symbol, &body)
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Extracts price and percent change from quote-page markup.
///
/// The price section is located by its `data-testid` marker, then the two
/// value spans inside it. Price text has thousands separators stripped;
/// change text is trimmed of surrounding `()%+ ` characters and rounded to
/// 2 decimal places.
fn parse_quote_page(symbol: &str, html: &str) -> Result<ResolvedQuote, MarketDataError> {
    let doc = Html::parse_document(html);

    let section_sel = selector(r#"section[data-testid="quote-price"]"#);
    let section = doc
        .select(&section_sel)
        .next()
        .ok_or_else(|| MarketDataError::SectionMissing {
            symbol: symbol.to_string(),
        })?;

    let price_sel = selector(r#"span[data-testid="qsp-price"]"#);
    let price_text: String = section
        .select(&price_sel)
        .next()
        .ok_or_else(|| MarketDataError::FieldMissing {
            symbol: symbol.to_string(),
            field: "price",
        })?
        .text()
        .collect();

    let change_sel = selector(r#"span[data-testid="qsp-price-change-percent"]"#);
    let change_text: String = section
        .select(&change_sel)
        .next()
        .ok_or_else(|| MarketDataError::FieldMissing {
            symbol: symbol.to_string(),
            field: "change",
        })?
        .text()
        .collect();

    let price = parse_price(symbol, &price_text)?;
    let change = parse_change(symbol, &change_text)?;

    Ok(ResolvedQuote { price, change })
}

fn parse_price(symbol: &str, text: &str) -> Result<Decimal, MarketDataError> {
    let cleaned = text.replace(',', "");
    cleaned
        .trim()
        .parse::<Decimal>()
        .map_err(|_| MarketDataError::Numeric {
            symbol: symbol.to_string(),
            text: text.to_string(),
        })
}

fn parse_change(symbol: &str, text: &str) -> Result<Decimal, MarketDataError> {
    let trimmed = text.trim_matches(|c: char| matches!(c, '(' | ')' | '%' | '+' | ' '));
    let cleaned = trimmed.replace(',', "");
    cleaned
        .parse::<Decimal>()
        .map(|d| d.round_dp(2))
        .map_err(|_| MarketDataError::Numeric {
            symbol: symbol.to_string(),
            text: text.to_string(),
        })
}
