use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::RecordAnalysis;
use super::curation::{CurationItem, CurationItemKind, ItemStatus, TriageAction, TriageMode};

/// One entry in the triage history trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub item_id: u32,
    pub action: TriageAction,
    pub at: DateTime<Utc>,
}

/// Cursor state of the interactive walkthrough.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TriageState {
    pub mode: TriageMode,
    /// Index into the session's item list where the next scan starts.
    pub cursor: usize,
    /// The item currently presented to the operator, if any.
    pub current_item: Option<u32>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Accepted-but-not-yet-executed items, bucketed by kind.
///
/// Invariant: a queued item's ID appears in exactly one bucket.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ActionQueues {
    pub deletions: Vec<u32>,
    pub connections: Vec<u32>,
    pub enhancements: Vec<u32>,
    pub patterns: Vec<u32>,
}

impl ActionQueues {
    /// The bucket matching an item kind.
    pub fn bucket_mut(&mut self, kind: &CurationItemKind) -> &mut Vec<u32> {
        match kind {
            CurationItemKind::Delete { .. } => &mut self.deletions,
            CurationItemKind::Connect { .. } => &mut self.connections,
            CurationItemKind::Enhance { .. } => &mut self.enhancements,
            CurationItemKind::ExtractPattern { .. } => &mut self.patterns,
        }
    }

    /// Named bucket lookup for queue subcommands.
    pub fn bucket_by_name(&self, name: &str) -> Option<&Vec<u32>> {
        match name {
            "deletions" => Some(&self.deletions),
            "connections" => Some(&self.connections),
            "enhancements" => Some(&self.enhancements),
            "patterns" => Some(&self.patterns),
            _ => None,
        }
    }

    pub fn bucket_by_name_mut(&mut self, name: &str) -> Option<&mut Vec<u32>> {
        match name {
            "deletions" => Some(&mut self.deletions),
            "connections" => Some(&mut self.connections),
            "enhancements" => Some(&mut self.enhancements),
            "patterns" => Some(&mut self.patterns),
            _ => None,
        }
    }

    /// Remove an item ID from whichever bucket holds it.
    pub fn remove(&mut self, item_id: u32) -> bool {
        for bucket in [
            &mut self.deletions,
            &mut self.connections,
            &mut self.enhancements,
            &mut self.patterns,
        ] {
            if let Some(pos) = bucket.iter().position(|id| *id == item_id) {
                bucket.remove(pos);
                return true;
            }
        }
        false
    }
}

/// The full persisted state of one curation session.
///
/// Serialized as a single JSON document after every mutation; deleted
/// after a confirmed execution completes with no failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationSession {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    /// The analysis batch this session was built from.
    pub analyses: Vec<RecordAnalysis>,
    /// Records that produced no surviving agent analysis.
    #[serde(default)]
    pub unanalyzable: Vec<String>,
    pub items: Vec<CurationItem>,
    pub triage: TriageState,
    pub queues: ActionQueues,
}

impl CurationSession {
    pub fn new(
        analyses: Vec<RecordAnalysis>,
        unanalyzable: Vec<String>,
        items: Vec<CurationItem>,
    ) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            analyses,
            unanalyzable,
            items,
            triage: TriageState::default(),
            queues: ActionQueues::default(),
        }
    }

    pub fn item(&self, item_id: u32) -> Option<&CurationItem> {
        self.items.iter().find(|i| i.item_id == item_id)
    }

    pub fn item_mut(&mut self, item_id: u32) -> Option<&mut CurationItem> {
        self.items.iter_mut().find(|i| i.item_id == item_id)
    }

    /// Count of items still pending under a mode filter.
    pub fn pending_in_mode(&self, mode: TriageMode) -> usize {
        self.items
            .iter()
            .filter(|i| i.status == ItemStatus::Pending && mode.matches(&i.kind))
            .count()
    }

    /// Count of items per status across the whole session.
    pub fn status_counts(&self) -> (usize, usize, usize, usize) {
        let mut counts = (0, 0, 0, 0);
        for item in &self.items {
            match item.status {
                ItemStatus::Pending => counts.0 += 1,
                ItemStatus::Queued => counts.1 += 1,
                ItemStatus::Skipped => counts.2 += 1,
                ItemStatus::Rejected => counts.3 += 1,
            }
        }
        counts
    }
}
