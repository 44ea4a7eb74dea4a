use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants;

/// Severity of a quality issue, ordered from least to most damaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Quality-score deduction this severity carries.
    pub fn deduction(self) -> f64 {
        match self {
            Severity::Low => constants::DEDUCTION_LOW,
            Severity::Medium => constants::DEDUCTION_MEDIUM,
            Severity::High => constants::DEDUCTION_HIGH,
            Severity::Critical => constants::DEDUCTION_CRITICAL,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// What kind of problem or opportunity a quality issue describes.
///
/// `ConnectionOpportunity`, `EnhancementOpportunity`, and `PatternCandidate`
/// are the kinds the curation item extractor turns into actionable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A file-path reference that no longer resolves.
    BrokenReference,
    /// Another record with near-identical content.
    Duplicate,
    /// Content below the minimum useful length.
    ContentTooShort,
    /// TODO/FIXME-style placeholder markers left in content.
    PlaceholderContent,
    /// Debug output accidentally captured into the record.
    DebugArtifact,
    /// Related records worth cross-linking.
    ConnectionOpportunity,
    /// Content that would benefit from enrichment.
    EnhancementOpportunity,
    /// A recurring theme worth extracting into a reusable pattern.
    PatternCandidate,
}

/// One typed issue found during per-record quality analysis.
///
/// Produced fresh on every analysis run; never persisted independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityIssue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub description: String,
    /// Operator-facing remediation hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Other records implicated by this issue (duplicates, link targets).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_record_ids: Vec<String>,
}

impl QualityIssue {
    pub fn new(kind: IssueKind, severity: Severity, description: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            description: description.into(),
            suggestion: None,
            related_record_ids: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_related(mut self, ids: Vec<String>) -> Self {
        self.related_record_ids = ids;
        self
    }
}

/// Output of one quality-analyzer pass over one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Bounded quality score in [0, 100].
    pub quality_score: f64,
    pub issues: Vec<QualityIssue>,
}
