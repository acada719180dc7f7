// ═══════════════════════════════════════════════════════════════════
// Provider Tests — QuoteProviderRegistry ordering and construction
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use portfolio_tracker_core::errors::CoreError;
use portfolio_tracker_core::providers::alphavantage::AlphaVantageProvider;
use portfolio_tracker_core::providers::registry::QuoteProviderRegistry;
use portfolio_tracker_core::providers::traits::QuoteProvider;
use portfolio_tracker_core::providers::yahoo_finance::YahooFinanceProvider;

/// Minimal named provider for ordering assertions.
struct NamedProvider {
    name: String,
}

impl NamedProvider {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl QuoteProvider for NamedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_quote(&self, _symbol: &str) -> Result<Decimal, CoreError> {
        Ok(dec!(100))
    }
}

// ═══════════════════════════════════════════════════════════════════
// Registry
// ═══════════════════════════════════════════════════════════════════

mod registry {
    use super::*;

    #[test]
    fn starts_empty() {
        let registry = QuoteProviderRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.providers().is_empty());
    }

    #[test]
    fn default_is_empty() {
        assert!(QuoteProviderRegistry::default().is_empty());
    }

    #[test]
    fn preserves_registration_order() {
        let mut registry = QuoteProviderRegistry::new();
        registry.register(Box::new(NamedProvider::new("first")));
        registry.register(Box::new(NamedProvider::new("second")));
        registry.register(Box::new(NamedProvider::new("third")));

        let names: Vec<&str> = registry.providers().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn defaults_without_key_exclude_alpha_vantage() {
        let registry = QuoteProviderRegistry::with_defaults(None);
        assert!(registry
            .providers()
            .iter()
            .all(|p| p.name() != "Alpha Vantage"));
    }

    #[test]
    fn defaults_with_key_put_alpha_vantage_last() {
        let registry = QuoteProviderRegistry::with_defaults(Some("demo-key"));
        let names: Vec<&str> = registry.providers().iter().map(|p| p.name()).collect();
        assert_eq!(names.last(), Some(&"Alpha Vantage"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Concrete providers
// ═══════════════════════════════════════════════════════════════════

mod sources {
    use super::*;

    #[test]
    fn alpha_vantage_reports_its_name() {
        let provider = AlphaVantageProvider::new("demo-key".into());
        assert_eq!(provider.name(), "Alpha Vantage");
    }

    #[test]
    fn yahoo_finance_reports_its_name() {
        // Connector construction does not touch the network; it only sets
        // up the HTTP client.
        let provider = YahooFinanceProvider::new().unwrap();
        assert_eq!(provider.name(), "Yahoo Finance");
    }
}
