//! # JSON File Backend
//!
//! The document must be a JSON array. Elements are converted one by one, so
//! a single malformed entry is dropped with a warning instead of discarding
//! the whole collection.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use super::errors::StoreResult;
use super::RecordStore;
use crate::record::Record;

/// Stores the collection as a single JSON array at a fixed path
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`. Nothing is touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next document is staged in before the rename
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordStore for JsonFileStore {
    fn read(&self) -> StoreResult<Vec<Record>> {
        let bytes = fs::read(&self.path)?;
        let elements: Vec<Value> = serde_json::from_slice(&bytes)?;

        let records = elements
            .iter()
            .enumerate()
            .filter_map(|(index, element)| {
                let record = Record::from_stored(element);
                if record.is_none() {
                    warn!(
                        path = %self.path.display(),
                        index,
                        "skipping unreadable stored record"
                    );
                }
                record
            })
            .collect();
        Ok(records)
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_vec_pretty(records)?;
        let staging = self.staging_path();
        fs::write(&staging, data)?;
        fs::rename(&staging, &self.path)?;

        Ok(())
    }
}
