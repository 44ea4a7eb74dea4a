//! Operator-facing report types returned by the triage manager.

use serde::{Deserialize, Serialize};

use super::curation::{CurationItem, TriageMode};
use super::quality::QualityIssue;

/// Returned by `start`: what the session contains and whether it was
/// freshly built or resumed from persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub resumed: bool,
    pub records_analyzed: usize,
    pub unanalyzable: Vec<String>,
    pub delete_items: usize,
    pub connect_items: usize,
    pub enhance_items: usize,
    pub pattern_items: usize,
}

/// Position within the current mode's walkthrough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageProgress {
    pub mode: TriageMode,
    pub pending_in_mode: usize,
    pub queued: usize,
    pub skipped: usize,
    pub rejected: usize,
}

/// Result of a `next`/`mode` step: the next pending item, or notice that
/// the current mode has no pending items left.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    Item {
        item: CurationItem,
        progress: TriageProgress,
    },
    ModeExhausted {
        mode: TriageMode,
        progress: TriageProgress,
    },
}

/// Full context for the current item, returned by `details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDetails {
    pub item: CurationItem,
    /// Excerpt of the target record's content.
    pub record_excerpt: Option<String>,
    /// Quality issues from the record's analysis.
    pub issues: Vec<QualityIssue>,
    /// Per-agent reasoning lines, `role: reasoning`.
    pub agent_reasoning: Vec<String>,
    pub consensus_confidence: Option<f64>,
    pub quality_score: Option<f64>,
}

/// Queue sizes plus optionally the items in one named queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueStatus {
    pub deletions: usize,
    pub connections: usize,
    pub enhancements: usize,
    pub patterns: usize,
    /// Populated by `queue view <name>`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub viewed_items: Vec<CurationItem>,
}

impl QueueStatus {
    pub fn total_queued(&self) -> usize {
        self.deletions + self.connections + self.enhancements + self.patterns
    }
}

/// Aggregate progress across all modes and queues, returned by `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub session_id: String,
    pub total_items: usize,
    pub pending: usize,
    pub queued: usize,
    pub skipped: usize,
    pub rejected: usize,
    pub pending_per_mode: Vec<(TriageMode, usize)>,
    pub queues: QueueStatus,
}

/// One planned deletion in a dry-run, spelled out because deletions are
/// irreversible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedDeletion {
    pub item_id: u32,
    pub record_id: String,
    pub recommendation: String,
}

/// Dry-run summary returned by `execute(confirm = false)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionPlan {
    pub deletions: Vec<PlannedDeletion>,
    pub connections: usize,
    pub enhancements: usize,
    pub patterns: usize,
}

/// A per-item execution failure; never fatal to the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionFailure {
    pub item_id: u32,
    pub record_id: String,
    pub reason: String,
}

/// Final summary of a confirmed execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Deletions that completed against the store.
    pub deletions: usize,
    /// Connection items acknowledged (execution is an extension point).
    pub connections: usize,
    /// Enhancement items acknowledged.
    pub enhancements: usize,
    /// Pattern items acknowledged.
    pub patterns: usize,
    pub errors: Vec<ExecutionFailure>,
}
