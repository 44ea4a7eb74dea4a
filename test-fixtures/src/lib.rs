//! Shared test helpers for the Mnemo workspace: record builders, an
//! in-memory record store with canned similarity results, and tracing
//! initialization for integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{Duration, Utc};

use mnemo_core::errors::{CuratorResult, StoreError};
use mnemo_core::record::{Record, RecordType, ScoredRecord};
use mnemo_core::traits::IRecordStore;

/// Initialize tracing for a test binary. Safe to call repeatedly.
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a record with the given ID and content, `days_old` days in the past.
pub fn make_record(id: &str, record_type: RecordType, content: &str, days_old: i64) -> Record {
    Record::new(
        id,
        record_type,
        content,
        Utc::now() - Duration::days(days_old),
    )
}

/// A reasonably healthy insight record for tests that need a neutral input.
pub fn healthy_record(id: &str) -> Record {
    let mut record = make_record(
        id,
        RecordType::Insight,
        "Retry storms against the payments API are caused by the client \
         treating HTTP 429 as a transient network error. Backoff must be \
         honored from the Retry-After header.",
        5,
    );
    record
        .metadata
        .insert("project".into(), serde_json::json!("payments"));
    record
        .metadata
        .insert("author".into(), serde_json::json!("ops"));
    record
        .metadata
        .insert("source".into(), serde_json::json!("incident-review"));
    record
}

/// In-memory `IRecordStore` with canned similarity results per record ID.
///
/// `delete` removes the record for real, so executor tests can observe the
/// store shrinking; `deleted_ids` records every delete call for assertions.
#[derive(Default)]
pub struct MemoryRecordStore {
    records: Mutex<Vec<Record>>,
    /// content-hash → similar records returned by `find_similar`.
    similar: Mutex<HashMap<String, Vec<ScoredRecord>>>,
    deleted: Mutex<Vec<String>>,
    delete_calls: AtomicUsize,
    /// When set, `find_similar` fails, exercising the skip-on-error path.
    pub fail_similarity: bool,
}

impl MemoryRecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    /// Canned response for similarity queries issued with `for_content`.
    pub fn set_similar(&self, for_content: &str, results: Vec<ScoredRecord>) {
        let key = Record::compute_content_hash(for_content);
        self.similar.lock().unwrap().insert(key, results);
    }

    pub fn deleted_ids(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn delete_call_count(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IRecordStore for MemoryRecordStore {
    fn get(&self, id: &str) -> CuratorResult<Option<Record>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    fn list(&self, limit: Option<usize>) -> CuratorResult<Vec<Record>> {
        let records = self.records.lock().unwrap();
        let take = limit.unwrap_or(records.len());
        Ok(records.iter().take(take).cloned().collect())
    }

    fn find_similar(&self, content: &str, limit: usize) -> CuratorResult<Vec<ScoredRecord>> {
        if self.fail_similarity {
            return Err(StoreError::SimilarityUnavailable {
                reason: "similarity index offline".into(),
            }
            .into());
        }
        let key = Record::compute_content_hash(content);
        let results = self
            .similar
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default();
        Ok(results.into_iter().take(limit).collect())
    }

    fn delete(&self, id: &str) -> CuratorResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.lock().unwrap();
        match records.iter().position(|r| r.id == id) {
            Some(pos) => {
                records.remove(pos);
                self.deleted.lock().unwrap().push(id.to_string());
                Ok(())
            }
            None => Err(StoreError::NotFound { id: id.to_string() }.into()),
        }
    }
}
