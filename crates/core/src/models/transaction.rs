use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded transaction: the acquisition or disposal of some
/// quantity of a market instrument.
///
/// Records are immutable once written. Valuation only cares about the
/// multiset of `(symbol, quantity)` pairs; the id exists for storage
/// bookkeeping, not for the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Unique identifier
    pub id: Uuid,

    /// Ticker symbol, uppercased (e.g., "AAPL", "TSLA")
    pub symbol: String,

    /// Signed quantity: positive = long position, negative = short/disposal
    pub quantity: Decimal,
}

impl TransactionRecord {
    pub fn new(symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into().to_uppercase(),
            quantity,
        }
    }
}
