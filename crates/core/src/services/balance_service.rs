use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{info, warn};
use rust_decimal::Decimal;

use super::quote_service::QuoteService;
use crate::errors::CoreError;
use crate::models::balance::{BalanceSnapshot, RecalcReport};
use crate::store::traits::DocumentStore;

/// Default bound on one recalculation's total wall-clock time.
pub const DEFAULT_RECALC_TIMEOUT: Duration = Duration::from_secs(30);

/// Recomputes a user's total balance from their recorded transactions and
/// live market quotes, then persists the result onto their document.
///
/// Failure policy: a symbol that cannot be priced contributes zero and is
/// reported in the outcome, never aborting the run. Failing to read the
/// store, blowing the overall deadline, or failing the write-back abort the
/// run with a typed error, so callers never mistake a missing or stale
/// total for a fresh one.
pub struct BalanceService {
    store: Arc<dyn DocumentStore>,
    quotes: Arc<QuoteService>,
    timeout: Duration,
}

impl BalanceService {
    pub fn new(store: Arc<dyn DocumentStore>, quotes: Arc<QuoteService>, timeout: Duration) -> Self {
        Self {
            store,
            quotes,
            timeout,
        }
    }

    /// Recalculate and persist one user's total balance.
    ///
    /// Returns the persisted snapshot together with the symbols that could
    /// not be priced. Errors:
    /// - `InvalidArgument`: blank user id; nothing was read or written.
    /// - `StoreUnavailable`: transaction history unreadable, or the
    ///   deadline expired first; nothing was written.
    /// - `PersistFailure`: the total was computed but the merge write
    ///   failed; the stored snapshot is stale.
    pub async fn recalculate(&self, user_id: &str) -> Result<RecalcReport, CoreError> {
        if user_id.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "user id must not be empty".into(),
            ));
        }

        let (total, skipped_symbols) =
            tokio::time::timeout(self.timeout, self.value_transactions(user_id))
                .await
                .map_err(|_| {
                    CoreError::StoreUnavailable(format!(
                        "Recalculation for {user_id} timed out after {} ms",
                        self.timeout.as_millis()
                    ))
                })??;

        let snapshot = BalanceSnapshot::new(total, Utc::now());
        self.store
            .merge_user_fields(user_id, snapshot.merge_fields())
            .await
            .map_err(|e| {
                CoreError::PersistFailure(format!("Failed to save balance for {user_id}: {e}"))
            })?;

        info!(
            "Updated balance for {user_id}: {} ({} symbols skipped)",
            snapshot.total_balance,
            skipped_symbols.len()
        );

        Ok(RecalcReport {
            snapshot,
            skipped_symbols,
        })
    }

    /// Fetch the user's history and value it symbol by symbol.
    async fn value_transactions(
        &self,
        user_id: &str,
    ) -> Result<(Decimal, Vec<String>), CoreError> {
        let records = self
            .store
            .list_transactions(user_id)
            .await
            .map_err(|e| e.into_store_unavailable())?;

        // Net the quantities per symbol up front: each symbol is quoted
        // exactly once, and the BTreeMap keeps resolution order (and the
        // skipped list) deterministic.
        let mut positions: BTreeMap<String, Decimal> = BTreeMap::new();
        for record in &records {
            *positions
                .entry(record.symbol.clone())
                .or_insert(Decimal::ZERO) += record.quantity;
        }

        let mut total = Decimal::ZERO;
        let mut skipped = Vec::new();
        for (symbol, quantity) in positions {
            if quantity.is_zero() {
                continue; // nets to nothing, the price cannot matter
            }
            match self.quotes.get_quote(&symbol).await {
                Ok(price) => total += quantity * price,
                Err(e) => {
                    warn!("Could not price {symbol} for {user_id}, contribution dropped: {e}");
                    skipped.push(symbol);
                }
            }
        }

        Ok((total, skipped))
    }
}
