//! # Record Store
//!
//! Persistence for the record collection.
//!
//! `RecordStore` is the injectable capability: read the whole collection,
//! or replace it. Backends:
//!
//! - `JsonFileStore`: one pretty-printed JSON array on disk
//! - `MemoryStore`: a process-local vector, for tests and throwaway servers
//!
//! `Collection` sits on top of a store and owns the recovery and seeding
//! rules every request relies on.

mod collection;
mod errors;
mod file;
mod memory;

pub use collection::Collection;
pub use errors::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::record::Record;

/// Backend trait for whole-collection persistence
pub trait RecordStore: Send + Sync + std::fmt::Debug {
    /// Read the persisted collection.
    ///
    /// Returns `StoreError::Missing` when nothing has been saved yet.
    fn read(&self) -> StoreResult<Vec<Record>>;

    /// Replace the persisted collection
    fn save(&self, records: &[Record]) -> StoreResult<()>;
}
