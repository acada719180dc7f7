//! Core library for Portfolio Tracker.
//!
//! Values a user's recorded transactions against live market quotes and
//! persists the resulting balance snapshot onto their document. The
//! library is built around two narrow seams:
//! [`providers::traits::QuoteProvider`] for market data and
//! [`store::traits::DocumentStore`] for persistence, with the services in
//! [`services`] tying them together. Both seams have production
//! implementations here (Yahoo Finance / Alpha Vantage; an encrypted file
//! store) and are trivially replaced with fakes in tests.

pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod store;

pub use errors::CoreError;
pub use models::balance::{BalanceSnapshot, RecalcReport};
pub use models::holding::Holding;
pub use models::transaction::TransactionRecord;
pub use models::user::UserDocument;
pub use services::balance_service::{BalanceService, DEFAULT_RECALC_TIMEOUT};
pub use services::holdings_service::HoldingsService;
pub use services::quote_service::QuoteService;
