use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use super::quote_service::QuoteService;
use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::store::traits::DocumentStore;

/// Derives a user's current positions from their transaction history and
/// values them against live quotes.
pub struct HoldingsService {
    store: Arc<dyn DocumentStore>,
    quotes: Arc<QuoteService>,
}

impl HoldingsService {
    pub fn new(store: Arc<dyn DocumentStore>, quotes: Arc<QuoteService>) -> Self {
        Self { store, quotes }
    }

    /// Net positive positions for one user, sorted by symbol, each carrying
    /// the latest quote when the symbol prices. A symbol that cannot be
    /// priced is still listed, with no price or market value, so one bad
    /// upstream never hides the rest of the portfolio.
    pub async fn list_holdings(&self, user_id: &str) -> Result<Vec<Holding>, CoreError> {
        if user_id.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "user id must not be empty".into(),
            ));
        }

        let records = self
            .store
            .list_transactions(user_id)
            .await
            .map_err(|e| e.into_store_unavailable())?;

        let mut positions: BTreeMap<String, Decimal> = BTreeMap::new();
        for record in &records {
            *positions
                .entry(record.symbol.clone())
                .or_insert(Decimal::ZERO) += record.quantity;
        }

        let mut holdings = Vec::new();
        for (symbol, quantity) in positions {
            // Fully disposed (or short) positions are not holdings
            if quantity <= Decimal::ZERO {
                continue;
            }
            let price = match self.quotes.get_quote(&symbol).await {
                Ok(price) => Some(price),
                Err(e) => {
                    debug!("No live price for holding {symbol}: {e}");
                    None
                }
            };
            holdings.push(Holding {
                market_value: price.map(|p| p * quantity),
                symbol,
                quantity,
                price,
            });
        }

        Ok(holdings)
    }
}
