use serde::{Deserialize, Serialize};

use super::analysis::AgentRole;

/// Reasoning from an agent whose vote lost the consensus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinorityView {
    pub agent_role: AgentRole,
    pub reasoning: String,
}

/// The reconciled verdict for one record, derived deterministically from
/// its set of agent analyses. Never cached independently of its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsensusResult {
    /// The final keep/delete call. `true` means delete.
    pub final_decision: bool,
    /// Aggregate certainty in [0, 1], discounted when agents disagree.
    pub consensus_confidence: f64,
    /// Fraction of agent weight aligned with the final decision, in [0, 1].
    pub agreement_level: f64,
    /// Weighted delete-vote share in [0, 1]; the decision flips at 0.5.
    pub weighted_score: f64,
    /// Whether this record needs manual adjudication.
    pub requires_human_review: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub minority_views: Vec<MinorityView>,
}
