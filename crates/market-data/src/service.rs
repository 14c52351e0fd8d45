//! Batch quote fetching.

use std::sync::Arc;

use futures::future::join_all;
use log::debug;

use crate::models::{QuoteValue, TickerQuote, TickerSymbol};
use crate::provider::QuoteProvider;

/// Fetches a board of ticker quotes through a [`QuoteProvider`].
///
/// Both entry points return one [`TickerQuote`] per requested symbol, in
/// request order, with failed symbols degraded to unavailable. Prefer
/// [`fetch_all`](Self::fetch_all): the sequential variant exists for small
/// boards and non-concurrent callers and does not scale.
pub struct QuoteService {
    provider: Arc<dyn QuoteProvider>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    /// Concurrent fan-out over all symbols.
    ///
    /// All fetches are issued at once and joined; one slow or failing
    /// symbol never delays or fails another. Result order matches the
    /// input board, not completion order.
    pub async fn fetch_all(&self, board: &[TickerSymbol]) -> Vec<TickerQuote> {
        join_all(board.iter().map(|ticker| self.fetch_one(ticker))).await
    }

    /// One-at-a-time fallback for small boards.
    pub async fn fetch_all_sequential(&self, board: &[TickerSymbol]) -> Vec<TickerQuote> {
        let mut quotes = Vec::with_capacity(board.len());
        for ticker in board {
            quotes.push(self.fetch_one(ticker).await);
        }
        quotes
    }

    async fn fetch_one(&self, ticker: &TickerSymbol) -> TickerQuote {
        match self.provider.fetch_quote(&ticker.symbol).await {
            Ok(quote) => TickerQuote {
                name: ticker.name.clone(),
                value: QuoteValue::Resolved(quote),
            },
            Err(err) => {
                debug!("quote for {} unavailable: {}", ticker.symbol, err);
                TickerQuote::unavailable(&ticker.name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MarketDataError;
    use crate::models::ResolvedQuote;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl QuoteProvider for ScriptedProvider {
        async fn fetch_quote(&self, symbol: &str) -> Result<ResolvedQuote, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match symbol {
                "^GSPC" => Ok(ResolvedQuote {
                    price: dec!(5021.84),
                    change: dec!(-0.48),
                }),
                "^KS11" => Ok(ResolvedQuote {
                    price: dec!(2648.76),
                    change: dec!(0.83),
                }),
                _ => Err(MarketDataError::SectionMissing {
                    symbol: symbol.to_string(),
                }),
            }
        }
    }

    fn board() -> Vec<TickerSymbol> {
        vec![
            TickerSymbol::new("^KS11", "KOSPI"),
            TickerSymbol::new("BROKEN", "Broken"),
            TickerSymbol::new("^GSPC", "S&P500"),
        ]
    }

    #[tokio::test]
    async fn fan_out_preserves_input_order_and_length() {
        let service = QuoteService::new(Arc::new(ScriptedProvider {
            calls: AtomicUsize::new(0),
        }));
        let quotes = service.fetch_all(&board()).await;

        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].name, "KOSPI");
        assert_eq!(quotes[1].name, "Broken");
        assert_eq!(quotes[2].name, "S&P500");
        assert!(quotes[0].value.is_resolved());
        assert_eq!(quotes[1].value, QuoteValue::Unavailable);
        assert!(quotes[2].value.is_resolved());
    }

    #[tokio::test]
    async fn failing_symbol_does_not_fail_the_batch() {
        let provider = Arc::new(ScriptedProvider {
            calls: AtomicUsize::new(0),
        });
        let service = QuoteService::new(provider.clone());
        let quotes = service.fetch_all(&board()).await;

        assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
        assert_eq!(quotes.iter().filter(|q| q.value.is_resolved()).count(), 2);
    }

    #[tokio::test]
    async fn sequential_variant_matches_fan_out() {
        let service = QuoteService::new(Arc::new(ScriptedProvider {
            calls: AtomicUsize::new(0),
        }));
        let concurrent = service.fetch_all(&board()).await;
        let sequential = service.fetch_all_sequential(&board()).await;
        assert_eq!(concurrent, sequential);
    }
}
