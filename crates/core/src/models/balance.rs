use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Document field holding the persisted total.
pub const TOTAL_BALANCE_FIELD: &str = "totalBalance";

/// Document field holding the time of the last successful recalculation.
pub const LAST_UPDATED_FIELD: &str = "lastUpdated";

/// The persisted valuation result attached to a user document.
///
/// Overwritten wholesale on each successful recalculation, via a merge
/// write that touches only the two fields in [`BalanceSnapshot::merge_fields`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSnapshot {
    pub total_balance: Decimal,
    pub last_updated: DateTime<Utc>,
}

impl BalanceSnapshot {
    pub fn new(total_balance: Decimal, last_updated: DateTime<Utc>) -> Self {
        Self {
            total_balance,
            last_updated,
        }
    }

    /// The exact set of document fields a snapshot write is allowed to
    /// touch. Everything else on the user document stays as it is.
    pub fn merge_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(TOTAL_BALANCE_FIELD.into(), json!(self.total_balance));
        fields.insert(LAST_UPDATED_FIELD.into(), json!(self.last_updated));
        fields
    }
}

/// Outcome of one balance recalculation: the snapshot that was persisted,
/// plus the symbols that could not be priced and contributed zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalcReport {
    pub snapshot: BalanceSnapshot,
    pub skipped_symbols: Vec<String>,
}

impl RecalcReport {
    /// True when every symbol resolved to a price.
    pub fn fully_priced(&self) -> bool {
        self.skipped_symbols.is_empty()
    }
}
