//! Quote provider trait and implementations.

pub mod yahoo;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::ResolvedQuote;

/// A source of single-symbol quotes.
///
/// Implementations perform one bounded network fetch per call and never
/// retry; callers decide how failures degrade.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the current price and percent change for one symbol.
    async fn fetch_quote(&self, symbol: &str) -> Result<ResolvedQuote, MarketDataError>;
}
