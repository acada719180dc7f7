use thiserror::Error;

/// Unified error type for the entire portfolio-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Valuation contract ──────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Persist failure: {0}")]
    PersistFailure(String),

    // ── Quote sources ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No quote provider registered")]
    NoProvider,

    #[error("Price not available for {symbol}")]
    PriceNotAvailable {
        symbol: String,
    },

    // ── Store file ──────────────────────────────────────────────────
    #[error("Invalid store file format: {0}")]
    InvalidFileFormat(String),

    #[error("Unsupported store file version: {0}")]
    UnsupportedVersion(u16),

    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Decryption failed: wrong passphrase or corrupted store file")]
    Decryption,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

impl CoreError {
    /// Collapse a store read failure into `StoreUnavailable`, keeping an
    /// already-classified error intact. Applied at the service boundary so
    /// callers see one infrastructure error regardless of which backing
    /// store produced it.
    pub fn into_store_unavailable(self) -> Self {
        match self {
            CoreError::StoreUnavailable(_) => self,
            other => CoreError::StoreUnavailable(other.to_string()),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so API
        // keys never end up in logs. reqwest errors often carry full URLs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<aes_gcm::Error> for CoreError {
    fn from(_: aes_gcm::Error) -> Self {
        CoreError::Decryption
    }
}
