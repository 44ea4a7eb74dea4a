use serde::{Deserialize, Serialize};
use std::fmt;

/// What a curation item proposes to do, with only the fields that case
/// needs. Serialized as a tagged enum so the kind survives persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CurationItemKind {
    /// Remove the record from the store.
    Delete { record_id: String },
    /// Cross-link the record with its related records.
    Connect {
        record_id: String,
        related_ids: Vec<String>,
    },
    /// Enrich the record's content.
    Enhance { record_id: String },
    /// Materialize a recurring theme into a reusable pattern.
    ExtractPattern {
        record_id: String,
        related_ids: Vec<String>,
    },
}

impl CurationItemKind {
    /// The record this item primarily targets.
    pub fn record_id(&self) -> &str {
        match self {
            CurationItemKind::Delete { record_id }
            | CurationItemKind::Connect { record_id, .. }
            | CurationItemKind::Enhance { record_id }
            | CurationItemKind::ExtractPattern { record_id, .. } => record_id,
        }
    }

    /// Short tag used in operator-facing output and queue names.
    pub fn tag(&self) -> &'static str {
        match self {
            CurationItemKind::Delete { .. } => "delete",
            CurationItemKind::Connect { .. } => "connect",
            CurationItemKind::Enhance { .. } => "enhance",
            CurationItemKind::ExtractPattern { .. } => "extract-pattern",
        }
    }
}

/// Lifecycle of a curation item within one session.
///
/// Only `Pending` items accept triage actions; the other three states are
/// terminal until an explicit `unqueue`/`clear` resets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Pending,
    Queued,
    Skipped,
    Rejected,
}

impl ItemStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ItemStatus::Pending)
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Queued => "queued",
            ItemStatus::Skipped => "skipped",
            ItemStatus::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

/// One discrete, independently actionable recommendation.
///
/// Created once per session by the extractor; mutated only by the triage
/// session manager; gone when the session completes or is discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationItem {
    /// Sequential per-extraction-run ID; stable only within the run.
    pub item_id: u32,
    pub kind: CurationItemKind,
    pub status: ItemStatus,
    /// Confidence behind the recommendation, in [0, 1].
    pub confidence: f64,
    /// Operator-facing summary of why this item exists.
    pub recommendation: String,
    /// Findings carried over from the agent analyses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agent_findings: Vec<String>,
}

/// Operator decision applied to the current item during triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageAction {
    /// Queue the item for execution.
    Accept,
    /// Decline the recommendation for this session.
    Reject,
    /// Set the item aside for the rest of this session.
    Skip,
}

/// The item-kind filter driving the interactive walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TriageMode {
    #[default]
    All,
    Delete,
    Connect,
    Enhance,
    ExtractPattern,
}

impl TriageMode {
    /// Whether an item kind is visible under this mode.
    pub fn matches(self, kind: &CurationItemKind) -> bool {
        match self {
            TriageMode::All => true,
            TriageMode::Delete => matches!(kind, CurationItemKind::Delete { .. }),
            TriageMode::Connect => matches!(kind, CurationItemKind::Connect { .. }),
            TriageMode::Enhance => matches!(kind, CurationItemKind::Enhance { .. }),
            TriageMode::ExtractPattern => {
                matches!(kind, CurationItemKind::ExtractPattern { .. })
            }
        }
    }
}

impl fmt::Display for TriageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TriageMode::All => "all",
            TriageMode::Delete => "delete",
            TriageMode::Connect => "connect",
            TriageMode::Enhance => "enhance",
            TriageMode::ExtractPattern => "extract-pattern",
        };
        write!(f, "{s}")
    }
}
