use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::CoreError;
use crate::models::transaction::TransactionRecord;
use crate::models::user::UserDocument;

/// Trait abstraction for the document store holding user records and their
/// transaction histories.
///
/// The valuation services only ever talk to this interface, so the backing
/// implementation (encrypted file, in-memory fake) can be swapped without
/// touching any business logic.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All transaction records for one user. A user without a history is
    /// not an error; it is an empty list.
    async fn list_transactions(&self, user_id: &str) -> Result<Vec<TransactionRecord>, CoreError>;

    /// The user's document, if one exists.
    async fn get_user(&self, user_id: &str) -> Result<Option<UserDocument>, CoreError>;

    /// Field-level merge onto the user's document: the named fields are
    /// inserted or overwritten, every other field is left untouched. The
    /// document is created when absent.
    async fn merge_user_fields(
        &self,
        user_id: &str,
        fields: Map<String, Value>,
    ) -> Result<(), CoreError>;

    /// Ids of every user with a document or a transaction history.
    async fn list_user_ids(&self) -> Result<Vec<String>, CoreError>;
}
