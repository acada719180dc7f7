use async_trait::async_trait;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use super::traits::QuoteProvider;
use crate::errors::CoreError;

/// Yahoo Finance quote source.
///
/// - **Free**: no API key required (unofficial public API).
/// - **Coverage**: global equities, ETFs, indices, mutual funds.
///
/// Uses the `yahoo_finance_api` crate wrapping Yahoo's public endpoints.
/// Prices come back in the instrument's native currency (typically USD).
pub struct YahooFinanceProvider {
    connector: yahoo_finance_api::YahooConnector,
}

impl YahooFinanceProvider {
    pub fn new() -> Result<Self, CoreError> {
        let connector = yahoo_finance_api::YahooConnector::new().map_err(|e| CoreError::Api {
            provider: "Yahoo Finance".into(),
            message: format!("Failed to create connector: {e}"),
        })?;
        Ok(Self { connector })
    }
}

#[async_trait]
impl QuoteProvider for YahooFinanceProvider {
    fn name(&self) -> &str {
        "Yahoo Finance"
    }

    async fn get_quote(&self, symbol: &str) -> Result<Decimal, CoreError> {
        let resp = self
            .connector
            .get_latest_quotes(symbol, "1d")
            .await
            .map_err(|e| CoreError::Api {
                provider: "Yahoo Finance".into(),
                message: format!("Failed to fetch latest quote for {symbol}: {e}"),
            })?;

        let quote = resp.last_quote().map_err(|e| CoreError::Api {
            provider: "Yahoo Finance".into(),
            message: format!("No quote data for {symbol}: {e}"),
        })?;

        // Close prices arrive as f64; reject anything Decimal cannot hold
        // (NaN, infinities) instead of letting it into the arithmetic.
        Decimal::from_f64(quote.close).ok_or_else(|| CoreError::Api {
            provider: "Yahoo Finance".into(),
            message: format!("Unrepresentable close price for {symbol}: {}", quote.close),
        })
    }
}
