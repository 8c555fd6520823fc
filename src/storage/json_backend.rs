use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::Value;

use crate::{
    config::Config,
    core::utils::{ensure_dir, PathResolver},
    domain::{Transaction, TransactionRecord},
    errors::Result,
};

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence for transactions and preferences.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    transactions_file: PathBuf,
    preferences_file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = PathResolver::resolve_base(root);
        ensure_dir(&root)?;
        Ok(Self {
            transactions_file: PathResolver::transactions_file_in(&root),
            preferences_file: PathResolver::preferences_file_in(&root),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.data_dir.clone())
    }

    pub fn transactions_path(&self) -> &Path {
        &self.transactions_file
    }

    /// Unparseable preference files read as empty so the next save replaces
    /// them. I/O failures still propagate.
    fn read_preferences(&self) -> Result<BTreeMap<String, bool>> {
        if !self.preferences_file.exists() {
            return Ok(BTreeMap::new());
        }
        let data = fs::read_to_string(&self.preferences_file)?;
        match serde_json::from_str(&data) {
            Ok(preferences) => Ok(preferences),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable preferences file");
                Ok(BTreeMap::new())
            }
        }
    }
}

impl StorageBackend for JsonStorage {
    fn load_transactions(&self) -> Result<Vec<TransactionRecord>> {
        if !self.transactions_file.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.transactions_file)?;
        let raw: Vec<Value> = serde_json::from_str(&data)?;
        let records = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(index, error = %err, "skipping malformed transaction record");
                    None
                }
            })
            .collect();
        Ok(records)
    }

    fn save_transactions(&self, txs: &[Transaction]) -> Result<()> {
        let records: Vec<TransactionRecord> = txs.iter().map(Transaction::to_record).collect();
        save_json(&self.transactions_file, &records)
    }

    fn load_preference(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.read_preferences()?.get(key).copied())
    }

    fn save_preference(&self, key: &str, value: bool) -> Result<()> {
        let mut preferences = self.read_preferences()?;
        preferences.insert(key.to_string(), value);
        save_json(&self.preferences_file, &preferences)
    }

    fn clear_all(&self) -> Result<()> {
        for path in [&self.transactions_file, &self.preferences_file] {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

/// Writes `value` as pretty JSON by staging to a temporary file and renaming it into place.
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
