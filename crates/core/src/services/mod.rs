pub mod balance_service;
pub mod holdings_service;
pub mod quote_service;
