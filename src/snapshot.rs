//! Flat key/value snapshot of a session, persisted as TOML.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const KEY_UNITS_SOLD: &str = "units_sold";
pub const KEY_TOTAL_REVENUE: &str = "total_revenue";
pub const KEY_ACTIVE_ITEM: &str = "active_item";

/// Errors that can occur when reading or writing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write snapshot '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Snapshot is missing key '{0}'")]
    MissingKey(&'static str),

    #[error("Snapshot key '{key}' has invalid value '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// The three session fields, as stored between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub units_sold: u64,
    pub total_revenue: u64,
    pub active_item: String,
}

impl SessionSnapshot {
    pub fn to_pairs(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (KEY_UNITS_SOLD.to_string(), self.units_sold.to_string()),
            (KEY_TOTAL_REVENUE.to_string(), self.total_revenue.to_string()),
            (KEY_ACTIVE_ITEM.to_string(), self.active_item.clone()),
        ])
    }

    pub fn from_pairs(pairs: &BTreeMap<String, String>) -> Result<Self, SnapshotError> {
        Ok(Self {
            units_sold: parse_counter(pairs, KEY_UNITS_SOLD)?,
            total_revenue: parse_counter(pairs, KEY_TOTAL_REVENUE)?,
            active_item: lookup(pairs, KEY_ACTIVE_ITEM)?.to_string(),
        })
    }

    /// Default snapshot location under the platform data directory.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("dessert-clicker").join("session.toml")
    }

    /// Load a snapshot. A missing file yields `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, SnapshotError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| SnapshotError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let pairs: BTreeMap<String, String> =
            toml::from_str(&content).map_err(|e| SnapshotError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::from_pairs(&pairs).map(Some)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SnapshotError> {
        let content = toml::to_string(&self.to_pairs())?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SnapshotError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, content).map_err(|e| SnapshotError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn lookup<'a>(
    pairs: &'a BTreeMap<String, String>,
    key: &'static str,
) -> Result<&'a str, SnapshotError> {
    pairs
        .get(key)
        .map(String::as_str)
        .ok_or(SnapshotError::MissingKey(key))
}

fn parse_counter(pairs: &BTreeMap<String, String>, key: &'static str) -> Result<u64, SnapshotError> {
    let raw = lookup(pairs, key)?;
    raw.trim().parse().map_err(|_| SnapshotError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}
