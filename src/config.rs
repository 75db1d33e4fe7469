//! Runtime configuration for a [`Storefront`](crate::lifecycle::Storefront).
//!
//! Defaults work out of the box; `from_env` lets the demo binary be pointed at
//! another data directory without recompiling.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PALENGKE_DATA_DIR` | `data` |
//! | `PALENGKE_STORAGE_KEY` | `inventory` |
//! | `PALENGKE_CHANNEL_CAPACITY` | `32` |

use crate::inventory::DEFAULT_STORAGE_KEY;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DATA_DIR_VAR: &str = "PALENGKE_DATA_DIR";
pub const STORAGE_KEY_VAR: &str = "PALENGKE_STORAGE_KEY";
pub const CHANNEL_CAPACITY_VAR: &str = "PALENGKE_CHANNEL_CAPACITY";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Directory the JSON-file store writes into.
    pub data_dir: PathBuf,
    /// Key the product collection is stored under.
    pub storage_key: String,
    /// Capacity of the ledger request channel.
    pub channel_capacity: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            channel_capacity: 32,
        }
    }
}

impl StorefrontConfig {
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = data_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    /// Defaults overridden by whichever `PALENGKE_*` variables are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(dir) = lookup(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(key) = lookup(STORAGE_KEY_VAR) {
            config.storage_key = key;
        }
        if let Some(raw) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: CHANNEL_CAPACITY_VAR.to_string(),
                        value: raw,
                    })
                }
            };
        }
        Ok(config)
    }
}
