use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        format::LocaleFormatter,
        utils::{ensure_dir, PathResolver},
    },
    errors::{Result, TrackerError},
    storage::{json_backend::save_json, DARK_MODE_KEY},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_preference_key")]
    pub preference_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "pt-BR".into(),
            currency: "BRL".into(),
            data_dir: None,
            preference_key: default_preference_key(),
        }
    }
}

impl Config {
    pub fn formatter(&self) -> LocaleFormatter {
        LocaleFormatter::for_locale(&self.locale)
    }
}

fn default_preference_key() -> String {
    DARK_MODE_KEY.to_string()
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(PathResolver::resolve_base(None))
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Reads the stored configuration, or the defaults when none was saved.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| TrackerError::ConfigError(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        save_json(&self.path, config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
