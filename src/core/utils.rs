use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const DEFAULT_DIR_NAME: &str = ".finance_core";
const HOME_ENV: &str = "FINANCE_CORE_HOME";
const TRANSACTIONS_FILE: &str = "transactions.json";
const PREFERENCES_FILE: &str = "preferences.json";
const CONFIG_FILE: &str = "config.json";

/// Resolves the well-known file locations beneath an application directory.
pub struct PathResolver;

impl PathResolver {
    /// Returns `base` when supplied, otherwise [`app_data_dir`].
    pub fn resolve_base(base: Option<PathBuf>) -> PathBuf {
        base.unwrap_or_else(app_data_dir)
    }

    pub fn transactions_file_in(base: &Path) -> PathBuf {
        base.join(TRANSACTIONS_FILE)
    }

    pub fn preferences_file_in(base: &Path) -> PathBuf {
        base.join(PREFERENCES_FILE)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }
}

/// Returns the application-specific data directory, defaulting to `~/.finance_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}
