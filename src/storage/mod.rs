//! Persistence port, its backends, and a fault-tolerant facade over them.

pub mod json_backend;
pub mod memory;

use crate::{
    config::Config,
    domain::{seed, Transaction, TransactionRecord},
    errors::{Result, TrackerError},
};

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;

/// Key under which the dark-mode display preference is stored.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Abstraction over storage media capable of holding transactions and preferences.
pub trait StorageBackend: Send + Sync {
    fn load_transactions(&self) -> Result<Vec<TransactionRecord>>;
    fn save_transactions(&self, txs: &[Transaction]) -> Result<()>;
    fn load_preference(&self, key: &str) -> Result<Option<bool>>;
    fn save_preference(&self, key: &str, value: bool) -> Result<()>;
    fn clear_all(&self) -> Result<()>;
}

/// Facade that never fails: storage problems are logged and the caller keeps
/// working in memory.
///
/// A facade without a backend models a session where no storage medium exists.
pub struct PersistenceAdapter {
    backend: Option<Box<dyn StorageBackend>>,
}

impl PersistenceAdapter {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    /// Opens JSON storage in the configured directory, degrading to an
    /// unavailable facade when the directory cannot be prepared.
    pub fn from_config(config: &Config) -> Self {
        match JsonStorage::from_config(config) {
            Ok(storage) => Self::new(Box::new(storage)),
            Err(err) => {
                tracing::warn!(error = %err, "storage unavailable, continuing in memory");
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Loads stored transactions, substituting the seed data when storage is
    /// unavailable, unreadable, or empty. Records that fail validation are skipped.
    pub fn load_transactions_or_seed(&self) -> Vec<Transaction> {
        let records = match self.backend().and_then(|backend| backend.load_transactions()) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(error = %err, "could not load transactions, using seed data");
                return seed::default_transactions();
            }
        };
        let txs: Vec<Transaction> = records
            .into_iter()
            .filter_map(|record| {
                let id = record.id;
                match Transaction::from_record(record) {
                    Ok(txn) => Some(txn),
                    Err(err) => {
                        tracing::warn!(id, error = %err, "skipping invalid stored transaction");
                        None
                    }
                }
            })
            .collect();
        if txs.is_empty() {
            tracing::info!("no stored transactions, using seed data");
            return seed::default_transactions();
        }
        tracing::debug!(count = txs.len(), "loaded transactions");
        txs
    }

    /// Returns whether the write reached storage.
    pub fn save_transactions(&self, txs: &[Transaction]) -> bool {
        self.report(
            "save transactions",
            self.backend()
                .and_then(|backend| backend.save_transactions(txs)),
        )
    }

    pub fn load_preference(&self, key: &str, default: bool) -> bool {
        match self
            .backend()
            .and_then(|backend| backend.load_preference(key))
        {
            Ok(value) => value.unwrap_or(default),
            Err(err) => {
                tracing::warn!(key, error = %err, "could not load preference, using default");
                default
            }
        }
    }

    /// Reads the display preference stored under the configured key.
    pub fn load_display_preference(&self, config: &Config) -> bool {
        self.load_preference(&config.preference_key, false)
    }

    pub fn save_display_preference(&self, config: &Config, value: bool) -> bool {
        self.save_preference(&config.preference_key, value)
    }

    pub fn save_preference(&self, key: &str, value: bool) -> bool {
        self.report(
            "save preference",
            self.backend()
                .and_then(|backend| backend.save_preference(key, value)),
        )
    }

    pub fn clear_all(&self) -> bool {
        self.report(
            "clear storage",
            self.backend().and_then(|backend| backend.clear_all()),
        )
    }

    fn backend(&self) -> Result<&dyn StorageBackend> {
        self.backend
            .as_deref()
            .ok_or(TrackerError::StorageUnavailable)
    }

    fn report(&self, operation: &str, outcome: Result<()>) -> bool {
        match outcome {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(operation, error = %err, "storage operation failed");
                false
            }
        }
    }
}
