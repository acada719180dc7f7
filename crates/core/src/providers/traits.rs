use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::CoreError;

/// Trait abstraction for market quote sources.
///
/// Each upstream API (Yahoo Finance, Alpha Vantage) implements this trait.
/// If a source stops working or changes, only that one implementation is
/// replaced; the rest of the codebase is untouched. Implementations must
/// surface unknown symbols and transport problems as `CoreError` values,
/// never panic across this boundary.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Latest available price for a ticker symbol.
    async fn get_quote(&self, symbol: &str) -> Result<Decimal, CoreError>;
}
