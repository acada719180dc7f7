use std::sync::Arc;
use std::time::Duration;

use portfolio_tracker_core::providers::registry::QuoteProviderRegistry;
use portfolio_tracker_core::store::file::{FileStore, StoreData};
use portfolio_tracker_core::store::memory::MemoryStore;
use portfolio_tracker_core::store::traits::DocumentStore;
use portfolio_tracker_core::{BalanceService, HoldingsService, QuoteService};

use crate::config::Config;

/// Shared handles behind every request.
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub balance_service: Arc<BalanceService>,
    pub holdings_service: Arc<HoldingsService>,
}

impl AppState {
    /// Wire the services around a store and a quote registry.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        registry: QuoteProviderRegistry,
        recalc_timeout: Duration,
    ) -> Arc<Self> {
        let quotes = Arc::new(QuoteService::new(registry));
        Arc::new(Self {
            balance_service: Arc::new(BalanceService::new(
                store.clone(),
                quotes.clone(),
                recalc_timeout,
            )),
            holdings_service: Arc::new(HoldingsService::new(store.clone(), quotes)),
            store,
        })
    }
}

/// Build the production state from configuration: the encrypted file store
/// when a path is configured, an ephemeral in-memory store otherwise.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let store: Arc<dyn DocumentStore> = match (&config.store_path, &config.store_passphrase) {
        (Some(path), Some(passphrase)) => {
            let seed = match &config.seed_file {
                Some(seed_path) => {
                    let bytes = std::fs::read(seed_path)?;
                    Some(serde_json::from_slice::<StoreData>(&bytes)?)
                }
                None => None,
            };
            Arc::new(FileStore::open(path, passphrase.clone(), seed)?)
        }
        (Some(_), None) => {
            anyhow::bail!("PT_STORE_PASSPHRASE is required when PT_STORE_PATH is set")
        }
        _ => {
            tracing::warn!("No PT_STORE_PATH configured, using an ephemeral in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let registry = QuoteProviderRegistry::with_defaults(config.alpha_vantage_key.as_deref());
    Ok(AppState::new(store, registry, config.recalc_timeout))
}
