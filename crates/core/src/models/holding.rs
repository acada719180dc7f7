use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A live-valued position derived from a user's transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Ticker symbol
    pub symbol: String,

    /// Net quantity across all recorded transactions (always positive here)
    pub quantity: Decimal,

    /// Latest quote, when the symbol priced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    /// `quantity * price`, when the symbol priced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_value: Option<Decimal>,
}
