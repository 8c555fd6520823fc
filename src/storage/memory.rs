use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use crate::{
    domain::{Transaction, TransactionRecord},
    errors::{Result, TrackerError},
};

use super::StorageBackend;

#[derive(Debug, Default)]
struct MemoryState {
    records: Vec<TransactionRecord>,
    preferences: BTreeMap<String, bool>,
}

/// Process-local backend. Contents live as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    state: Mutex<MemoryState>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<TransactionRecord>) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                records,
                preferences: BTreeMap::new(),
            }),
        }
    }

    fn state(&self) -> Result<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| TrackerError::StorageError("memory storage lock poisoned".into()))
    }
}

impl StorageBackend for MemoryStorage {
    fn load_transactions(&self) -> Result<Vec<TransactionRecord>> {
        Ok(self.state()?.records.clone())
    }

    fn save_transactions(&self, txs: &[Transaction]) -> Result<()> {
        self.state()?.records = txs.iter().map(Transaction::to_record).collect();
        Ok(())
    }

    fn load_preference(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.state()?.preferences.get(key).copied())
    }

    fn save_preference(&self, key: &str, value: bool) -> Result<()> {
        self.state()?.preferences.insert(key.to_string(), value);
        Ok(())
    }

    fn clear_all(&self) -> Result<()> {
        let mut state = self.state()?;
        state.records.clear();
        state.preferences.clear();
        Ok(())
    }
}
