use crate::errors::CuratorResult;
use crate::record::{Record, ScoredRecord};

/// The external record store the curation core reads from and, after
/// confirmed execution, deletes from.
pub trait IRecordStore: Send + Sync {
    /// Fetch one record by ID.
    fn get(&self, id: &str) -> CuratorResult<Option<Record>>;

    /// List records, newest first, up to `limit`.
    fn list(&self, limit: Option<usize>) -> CuratorResult<Vec<Record>>;

    /// Similarity query against the store's vector index.
    fn find_similar(&self, content: &str, limit: usize) -> CuratorResult<Vec<ScoredRecord>>;

    /// Delete a record. Fails with `StoreError::NotFound` if absent.
    fn delete(&self, id: &str) -> CuratorResult<()>;
}
