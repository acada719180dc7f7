use super::alphavantage::AlphaVantageProvider;
use super::traits::QuoteProvider;
use super::yahoo_finance::YahooFinanceProvider;

/// Registry of quote sources in fallback order.
///
/// The first registered provider is the primary; when it fails for a
/// symbol, the next one is consulted. New sources can be added without
/// modifying existing code.
pub struct QuoteProviderRegistry {
    providers: Vec<Box<dyn QuoteProvider>>,
}

impl QuoteProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Registry with the default source chain: Yahoo Finance first (no API
    /// key required), Alpha Vantage as fallback when a key is configured.
    pub fn with_defaults(alpha_vantage_key: Option<&str>) -> Self {
        let mut registry = Self::new();

        if let Ok(yahoo) = YahooFinanceProvider::new() {
            registry.register(Box::new(yahoo));
        }

        if let Some(key) = alpha_vantage_key {
            registry.register(Box::new(AlphaVantageProvider::new(key.to_string())));
        }

        registry
    }

    /// Append a provider at the end of the fallback chain.
    pub fn register(&mut self, provider: Box<dyn QuoteProvider>) {
        self.providers.push(provider);
    }

    /// All providers, in fallback order.
    pub fn providers(&self) -> &[Box<dyn QuoteProvider>] {
        &self.providers
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for QuoteProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
