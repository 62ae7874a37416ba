//! Collection loading with recovery and seed-on-first-use

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::errors::{StoreError, StoreResult};
use super::RecordStore;
use crate::record::{seed_records, Record, MIN_COLLECTION_SIZE};

/// The record collection as seen by request handlers.
///
/// Every call goes to the backing store; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Collection {
    store: Arc<dyn RecordStore>,
}

impl Collection {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Load the collection, newest first.
    ///
    /// Missing or unreadable data is treated as empty. A collection with
    /// fewer than `MIN_COLLECTION_SIZE` records is replaced by a fresh seed
    /// set, which is persisted before it is returned.
    ///
    /// # Errors
    ///
    /// Only fails when persisting the seed set fails.
    pub fn load(&self) -> StoreResult<Vec<Record>> {
        let records = match self.store.read() {
            Ok(records) => records,
            Err(StoreError::Missing) => {
                debug!("no persisted records yet");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "unreadable record data, treating as empty");
                Vec::new()
            }
        };

        if records.len() >= MIN_COLLECTION_SIZE {
            return Ok(records);
        }

        info!(
            found = records.len(),
            minimum = MIN_COLLECTION_SIZE,
            "seeding record collection"
        );
        self.reseed()
    }

    /// Replace the collection with a fresh seed set regardless of its size
    pub fn reseed(&self) -> StoreResult<Vec<Record>> {
        let seed = seed_records();
        self.store.save(&seed)?;
        Ok(seed)
    }

    /// Persist the whole collection
    pub fn save(&self, records: &[Record]) -> StoreResult<()> {
        self.store.save(records)?;
        debug!(count = records.len(), "records saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, RecordDraft};
    use crate::store::{JsonFileStore, MemoryStore};
    use tempfile::TempDir;

    fn record(title: &str) -> Record {
        Record::new(RecordDraft {
            title: title.to_string(),
            kind: "Book".to_string(),
            genre: "Drama".to_string(),
            year: 1999,
            rating: Some(4),
            status: "Planned".to_string(),
            notes: String::new(),
        })
    }

    #[test]
    fn test_missing_store_is_seeded_and_persisted() {
        let store = Arc::new(MemoryStore::new());
        let collection = Collection::new(store.clone());

        let records = collection.load().unwrap();

        assert_eq!(records.len(), MIN_COLLECTION_SIZE);
        assert_eq!(store.read().unwrap(), records);
    }

    #[test]
    fn test_small_collection_is_replaced() {
        let store = Arc::new(MemoryStore::with_records(vec![record("lonely")]));
        let collection = Collection::new(store);

        let records = collection.load().unwrap();

        assert_eq!(records.len(), MIN_COLLECTION_SIZE);
        assert!(records.iter().all(|r| r.title != "lonely"));
    }

    #[test]
    fn test_full_collection_is_untouched() {
        let mut existing = seed_records();
        existing.insert(0, record("newest"));
        let store = Arc::new(MemoryStore::with_records(existing.clone()));
        let collection = Collection::new(store);

        assert_eq!(collection.load().unwrap(), existing);
    }

    #[test]
    fn test_load_is_stable() {
        let collection = Collection::new(Arc::new(MemoryStore::new()));

        let first = collection.load().unwrap();
        let second = collection.load().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_corrupt_file_is_reseeded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("records.json");
        std::fs::write(&path, "garbage").unwrap();
        let collection = Collection::new(Arc::new(JsonFileStore::new(&path)));

        let records = collection.load().unwrap();

        assert_eq!(records.len(), MIN_COLLECTION_SIZE);
        let reread = JsonFileStore::new(&path).read().unwrap();
        assert_eq!(reread, records);
    }

    #[test]
    fn test_reseed_ignores_existing_size() {
        let mut existing = seed_records();
        existing.push(record("extra"));
        let store = Arc::new(MemoryStore::with_records(existing));
        let collection = Collection::new(store.clone());

        let records = collection.reseed().unwrap();

        assert_eq!(records.len(), MIN_COLLECTION_SIZE);
        assert_eq!(store.read().unwrap().len(), MIN_COLLECTION_SIZE);
    }
}
