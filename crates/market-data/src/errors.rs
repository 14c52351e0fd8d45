//! Error types for quote fetching.

use thiserror::Error;

/// Errors that can occur while fetching a single symbol's quote.
///
/// These never cross the [`crate::QuoteService`] boundary: every variant
/// degrades the affected symbol to [`crate::QuoteValue::Unavailable`].
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A network error occurred while fetching the quote page.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The quote-price section was not found in the page markup.
    #[error("Quote price section not found for {symbol}")]
    SectionMissing {
        /// The symbol whose page lacked the section
        symbol: String,
    },

    /// A price or percent-change span was not found inside the section.
    #[error("Quote field '{field}' not found for {symbol}")]
    FieldMissing {
        /// The symbol whose page lacked the field
        symbol: String,
        /// Which span was missing ("price" or "change")
        field: &'static str,
    },

    /// A located field did not parse as a decimal number.
    #[error("Unparseable quote value '{text}' for {symbol}")]
    Numeric {
        /// The symbol whose value failed to parse
        symbol: String,
        /// The raw text that failed to parse
        text: String,
    },
}
