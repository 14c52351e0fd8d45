//! Newsbrief Market Data Crate
//!
//! Fetches index/ticker quotes for the dashboard's market board by scraping
//! the public Yahoo Finance quote page.
//!
//! # Overview
//!
//! - [`QuoteProvider`] - trait for a single-symbol quote source
//! - [`YahooQuotePage`] - quote-page scraping provider
//! - [`QuoteService`] - batch fetching (concurrent fan-out or sequential)
//! - [`TickerQuote`] / [`QuoteValue`] - resolved-or-unavailable quote values
//!
//! A symbol's quote is either fully resolved (price and percent change) or
//! fully unavailable. Unavailability is a value, not an error: batch fetches
//! always return one entry per requested symbol, in request order.

pub mod errors;
pub mod models;
pub mod provider;
pub mod service;

pub use errors::MarketDataError;
pub use models::{QuoteValue, ResolvedQuote, TickerQuote, TickerSymbol};
pub use provider::yahoo::YahooQuotePage;
pub use provider::QuoteProvider;
pub use service::QuoteService;
