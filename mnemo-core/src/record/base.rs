use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::types::RecordType;

/// A free-text memory record, owned by the external store.
///
/// The curation core treats records as read-only input; the only mutation
/// path is the Action Executor calling back into the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Stable opaque identifier assigned by the store.
    pub id: String,
    /// Type tag from the closed set.
    pub record_type: RecordType,
    /// Free-text content.
    pub content: String,
    /// Free-form metadata.
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// blake3 hash of content, used for exact-duplicate detection.
    pub content_hash: String,
}

impl Record {
    /// Compute the blake3 hash of a record's content.
    pub fn compute_content_hash(content: &str) -> String {
        blake3::hash(content.as_bytes()).to_hex().to_string()
    }

    /// Build a record, deriving the content hash.
    pub fn new(
        id: impl Into<String>,
        record_type: RecordType,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let content = content.into();
        let content_hash = Self::compute_content_hash(&content);
        Self {
            id: id.into(),
            record_type,
            content,
            metadata: BTreeMap::new(),
            created_at,
            content_hash,
        }
    }

    /// Age of the record in whole days.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days()
    }

    /// A short excerpt for operator-facing summaries.
    pub fn excerpt(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            self.content.clone()
        } else {
            let cut: String = self.content.chars().take(max_chars).collect();
            format!("{cut}…")
        }
    }
}

/// A record paired with its similarity to a query, as returned by
/// `IRecordStore::find_similar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub record: Record,
    /// Cosine similarity in [0, 1].
    pub similarity: f64,
}
