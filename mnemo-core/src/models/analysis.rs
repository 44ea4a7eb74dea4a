use serde::{Deserialize, Serialize};
use std::fmt;

use super::consensus::ConsensusResult;
use super::quality::QualityIssue;

/// The named roster of built-in scoring agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    /// Structural completeness and general usefulness.
    General,
    /// Credential hygiene and secret leakage.
    Security,
    /// Age and staleness signals.
    Freshness,
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentRole::General => "general",
            AgentRole::Security => "security",
            AgentRole::Freshness => "freshness",
        };
        write!(f, "{s}")
    }
}

/// One agent's independent verdict on one record.
///
/// Ephemeral: recomputed on every analysis run, never stored on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentAnalysis {
    pub agent_role: AgentRole,
    /// How certain the agent is of its own verdict, in [0, 1].
    pub confidence_score: f64,
    /// How relevant this record is to the agent's specialty, in [0, 1].
    pub relevance_score: f64,
    /// Qualitative observations.
    pub findings: Vec<String>,
    /// The agent's keep/delete vote. `true` means delete.
    pub delete_recommendation: bool,
    /// One-line justification for the vote.
    pub reasoning: String,
    /// Domain-specific notes beyond the shared finding vocabulary.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specialized_insights: Vec<String>,
}

/// The full multi-agent analysis of one record: quality report, every
/// surviving agent's verdict, and the reconciled consensus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAnalysis {
    pub record_id: String,
    /// Quality score in [0, 100] from the quality analyzer.
    pub quality_score: f64,
    pub issues: Vec<QualityIssue>,
    pub agent_analyses: Vec<AgentAnalysis>,
    pub consensus: ConsensusResult,
    /// Wall-clock time spent analyzing this record.
    pub processing_time_ms: u64,
}
