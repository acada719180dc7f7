use log::debug;
use rust_decimal::Decimal;

use crate::errors::CoreError;
use crate::providers::registry::QuoteProviderRegistry;

/// Resolves live quotes through the provider registry.
///
/// Providers are tried in registration order; the first one returning a
/// usable price wins. Prices are validated before use: a negative value is
/// treated as that provider failing and the next one is consulted. Every
/// call hits the upstream APIs; results are never cached across calls, so
/// a valuation always reflects the market at the moment it ran.
pub struct QuoteService {
    registry: QuoteProviderRegistry,
}

impl QuoteService {
    pub fn new(registry: QuoteProviderRegistry) -> Self {
        Self { registry }
    }

    /// Latest price for a ticker symbol, with automatic provider fallback.
    pub async fn get_quote(&self, symbol: &str) -> Result<Decimal, CoreError> {
        if self.registry.is_empty() {
            return Err(CoreError::NoProvider);
        }

        let mut last_error = None;
        for provider in self.registry.providers() {
            match provider.get_quote(symbol).await {
                Ok(price) => {
                    if price < Decimal::ZERO {
                        last_error = Some(CoreError::Api {
                            provider: provider.name().to_string(),
                            message: format!("Negative price returned for {symbol}: {price}"),
                        });
                        continue;
                    }
                    return Ok(price);
                }
                Err(e) => {
                    debug!("Quote source {} failed for {symbol}: {e}", provider.name());
                    last_error = Some(e);
                    // Try next provider
                }
            }
        }

        Err(last_error.unwrap_or(CoreError::NoProvider))
    }
}
