use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::encryption::{self, KdfParams};
use super::format;
use super::traits::DocumentStore;
use crate::errors::CoreError;
use crate::models::transaction::TransactionRecord;
use crate::models::user::UserDocument;

/// Everything the file store persists: user documents plus the per-user
/// transaction histories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub users: HashMap<String, UserDocument>,
    #[serde(default)]
    pub transactions: HashMap<String, Vec<TransactionRecord>>,
}

/// Document store persisted as a single encrypted file.
///
/// The whole store is decrypted into memory at open and rewritten on every
/// mutation, which is appropriate for the small per-user document sets this
/// service handles. On-disk flow:
/// StoreData -> serde_json -> AES-256-GCM(Argon2id(passphrase)) -> PTST container
pub struct FileStore {
    path: PathBuf,
    passphrase: String,
    state: RwLock<StoreData>,
}

impl FileStore {
    /// Open a store file, creating an empty store when the file does not
    /// exist yet. `seed` is applied only in that first-open case; an
    /// existing file always wins over the seed.
    pub fn open(
        path: impl Into<PathBuf>,
        passphrase: impl Into<String>,
        seed: Option<StoreData>,
    ) -> Result<Self, CoreError> {
        let path = path.into();
        let passphrase = passphrase.into();

        let data = if path.exists() {
            let bytes = std::fs::read(&path)?;
            Self::decode(&bytes, &passphrase)?
        } else {
            let data = seed.unwrap_or_default();
            Self::persist(&path, &passphrase, &data)?;
            data
        };

        Ok(Self {
            path,
            passphrase,
            state: RwLock::new(data),
        })
    }

    /// Serialize and encrypt a store to container bytes.
    pub fn encode(data: &StoreData, passphrase: &str) -> Result<Vec<u8>, CoreError> {
        let plaintext = serde_json::to_vec(data)?;

        // Fresh salt and nonce on every save
        let salt = encryption::generate_salt()?;
        let nonce = encryption::generate_nonce()?;
        let kdf_params = KdfParams::default();
        let key = encryption::derive_key(passphrase, &salt, &kdf_params)?;
        let ciphertext = encryption::encrypt(&plaintext, &key, &nonce)?;

        Ok(format::write_container(
            format::CURRENT_VERSION,
            &kdf_params,
            &salt,
            &nonce,
            &ciphertext,
        ))
    }

    /// Decrypt and deserialize a store from raw container bytes.
    pub fn decode(data: &[u8], passphrase: &str) -> Result<StoreData, CoreError> {
        let (header, ciphertext) = format::read_container(data)?;
        let key = encryption::derive_key(passphrase, &header.salt, &header.kdf_params)?;
        let plaintext = encryption::decrypt(ciphertext, &key, &header.nonce)?;

        serde_json::from_slice(&plaintext)
            .map_err(|e| CoreError::Deserialization(format!("Malformed store payload: {e}")))
    }

    fn persist(path: &Path, passphrase: &str, data: &StoreData) -> Result<(), CoreError> {
        let bytes = Self::encode(data, passphrase)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FileStore {
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
        // Hold the write lock across the file write so concurrent merges
        // cannot interleave an in-memory update with a stale disk image.
        let mut state = self.state.write().await;
        let merged = state
            .users
            .get(user_id)
            .cloned()
            .unwrap_or_default()
            .merged_with(&fields)?;
        state.users.insert(user_id.to_string(), merged);
        Self::persist(&self.path, &self.passphrase, &state)?;
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
