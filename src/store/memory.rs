//! # In-Memory Backend

use std::sync::Mutex;

use super::errors::{StoreError, StoreResult};
use super::RecordStore;
use crate::record::Record;

/// Keeps the collection in process memory. Starts out missing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Option<Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `records`
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(Some(records)),
        }
    }
}

impl RecordStore for MemoryStore {
    fn read(&self) -> StoreResult<Vec<Record>> {
        let guard = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        guard.clone().ok_or(StoreError::Missing)
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        let mut guard = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = Some(records.to_vec());
        Ok(())
    }
}
