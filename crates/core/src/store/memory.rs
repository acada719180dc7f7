use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::traits::DocumentStore;
use crate::errors::CoreError;
use crate::models::transaction::TransactionRecord;
use crate::models::user::UserDocument;

/// In-memory document store.
///
/// Backs tests and the server's ephemeral mode (no store path configured).
/// Nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    users: HashMap<String, UserDocument>,
    transactions: HashMap<String, Vec<TransactionRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user document.
    pub async fn put_user(&self, user_id: impl Into<String>, doc: UserDocument) {
        self.state.write().await.users.insert(user_id.into(), doc);
    }

    /// Append records to a user's transaction history.
    pub async fn put_transactions(
        &self,
        user_id: impl Into<String>,
        records: Vec<TransactionRecord>,
    ) {
        self.state
            .write()
            .await
            .transactions
            .entry(user_id.into())
            .or_default()
            .extend(records);
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_transactions(&self, user_id: &str) -> Result<Vec<TransactionRecord>, CoreError> {
        let state = self.state.read().await;
        Ok(state.transactions.get(user_id).cloned().unwrap_or_default())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<UserDocument>, CoreError> {
        let state = self.state.read().await;
        Ok(state.users.get(user_id).cloned())
    }

    async fn merge_user_fields(
        &self,
        user_id: &str,
        fields: Map<String, Value>,
    ) -> Result<(), CoreError> {
        let mut state = self.state.write().await;
        let merged = state
            .users
            .get(user_id)
            .cloned()
            .unwrap_or_default()
            .merged_with(&fields)?;
        state.users.insert(user_id.to_string(), merged);
        Ok(())
    }

    async fn list_user_ids(&self) -> Result<Vec<String>, CoreError> {
        let state = self.state.read().await;
        let mut ids: Vec<String> = state
            .users
            .keys()
            .chain(state.transactions.keys())
            .cloned()
            .collect();
        ids.sort();
        ids.dedup();
        Ok(ids)
    }
}
