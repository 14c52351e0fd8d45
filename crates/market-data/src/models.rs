//! Quote data structures.

use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// A board entry: the provider symbol and the label shown to users.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TickerSymbol {
    /// Provider symbol, e.g. "^GSPC" or "KRW=X"
    pub symbol: String,
    /// Display name, e.g. "S&P500"
    pub name: String,
}

impl TickerSymbol {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

/// Successfully parsed quote fields for one symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedQuote {
    /// Last traded price
    pub price: Decimal,
    /// Percent change, rounded to 2 decimal places
    pub change: Decimal,
}

/// A quote value: fully resolved or fully unavailable.
///
/// Partial resolution does not exist - a parse failure on either field
/// makes the whole quote unavailable. The "N/A" sentinel only appears at
/// serialization and display boundaries, never inside the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuoteValue {
    Resolved(ResolvedQuote),
    Unavailable,
}

impl QuoteValue {
    pub fn is_resolved(&self) -> bool {
        matches!(self, QuoteValue::Resolved(_))
    }
}

/// One entry of the rendered market board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickerQuote {
    /// Display name from the requested [`TickerSymbol`]
    pub name: String,
    pub value: QuoteValue,
}

impl TickerQuote {
    pub fn unavailable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: QuoteValue::Unavailable,
        }
    }

    /// Price for display, "N/A" when unavailable.
    pub fn price_display(&self) -> String {
        match &self.value {
            QuoteValue::Resolved(q) => q.price.to_string(),
            QuoteValue::Unavailable => "N/A".to_string(),
        }
    }

    /// Percent change for display, "N/A" when unavailable.
    pub fn change_display(&self) -> String {
        match &self.value {
            QuoteValue::Resolved(q) => q.change.to_string(),
            QuoteValue::Unavailable => "N/A".to_string(),
        }
    }
}

impl Serialize for TickerQuote {
    /// Serializes to `{name, price, change}` with numeric fields when
    /// resolved and the "N/A" sentinel when not.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut out = serializer.serialize_struct("TickerQuote", 3)?;
        out.serialize_field("name", &self.name)?;
        match &self.value {
            QuoteValue::Resolved(q) => {
                out.serialize_field("price", &q.price)?;
                out.serialize_field("change", &q.change)?;
            }
            QuoteValue::Unavailable => {
                out.serialize_field("price", "N/A")?;
                out.serialize_field("change", "N/A")?;
            }
        }
        out.end()
    }
}
