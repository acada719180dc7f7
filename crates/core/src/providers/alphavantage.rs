use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::traits::QuoteProvider;
use crate::errors::CoreError;

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Alpha Vantage quote source, the fallback behind Yahoo Finance.
///
/// - **Free tier**: 25 requests/day (across ALL endpoints).
/// - **Requires**: an API key.
///
/// Prices arrive as decimal strings and are parsed exactly, with no float
/// round-trip on the way into the arithmetic.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
}

impl AlphaVantageProvider {
    pub fn new(api_key: String) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key,
        }
    }
}

// ── Alpha Vantage API response types ────────────────────────────────

#[derive(Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
}

#[derive(Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price")]
    price: Option<String>,
}

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    fn name(&self) -> &str {
        "Alpha Vantage"
    }

    async fn get_quote(&self, symbol: &str) -> Result<Decimal, CoreError> {
        let resp: GlobalQuoteResponse = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", &symbol.to_uppercase()),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Alpha Vantage".into(),
                message: format!("Failed to parse quote for {symbol}: {e}"),
            })?;

        // An empty "Global Quote" object is how the API reports unknown
        // symbols (and exhausted request quotas).
        let price = resp
            .global_quote
            .and_then(|q| q.price)
            .ok_or_else(|| CoreError::PriceNotAvailable {
                symbol: symbol.to_uppercase(),
            })?;

        price.parse().map_err(|e| CoreError::Api {
            provider: "Alpha Vantage".into(),
            message: format!("Invalid price format for {symbol}: {e}"),
        })
    }
}
