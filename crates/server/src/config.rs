use std::time::Duration;

use portfolio_tracker_core::DEFAULT_RECALC_TIMEOUT;

/// Runtime configuration, read from `PT_*` environment variables.
/// A local `.env` file is honored in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address to listen on (`PT_LISTEN_ADDR`, default `0.0.0.0:8080`).
    pub listen_addr: String,

    /// Path of the encrypted store file (`PT_STORE_PATH`). Unset means an
    /// ephemeral in-memory store.
    pub store_path: Option<String>,

    /// Passphrase for the store file (`PT_STORE_PASSPHRASE`; required
    /// whenever `PT_STORE_PATH` is set).
    pub store_passphrase: Option<String>,

    /// Plaintext JSON seed applied when the store file is first created
    /// (`PT_SEED_FILE`).
    pub seed_file: Option<String>,

    /// Alpha Vantage API key enabling the fallback quote source
    /// (`PT_ALPHAVANTAGE_KEY`).
    pub alpha_vantage_key: Option<String>,

    /// Wall-clock bound on one recalculation (`PT_RECALC_TIMEOUT_SECS`).
    pub recalc_timeout: Duration,

    /// Interval of the background balance refresh
    /// (`PT_RECALC_INTERVAL_SECS`; unset or 0 disables the loop).
    pub recalc_interval: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        let recalc_timeout = std::env::var("PT_RECALC_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_RECALC_TIMEOUT);

        let recalc_interval = std::env::var("PT_RECALC_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs);

        Self {
            listen_addr: std::env::var("PT_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            store_path: std::env::var("PT_STORE_PATH").ok(),
            store_passphrase: std::env::var("PT_STORE_PASSPHRASE").ok(),
            seed_file: std::env::var("PT_SEED_FILE").ok(),
            alpha_vantage_key: std::env::var("PT_ALPHAVANTAGE_KEY").ok(),
            recalc_timeout,
            recalc_interval,
        }
    }
}
