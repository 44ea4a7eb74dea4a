use serde::{Deserialize, Serialize};

/// Thresholds governing the consensus engine's human-review flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusConfig {
    /// Consensus confidence below this flags the record for review. Default: 0.70.
    pub review_confidence_threshold: f64,
    /// Agreement level below this flags the record for review. Default: 0.66.
    pub agreement_threshold: f64,
    /// Lower bound of the borderline quality band. Default: 40.0.
    pub borderline_quality_low: f64,
    /// Upper bound of the borderline quality band. Default: 60.0.
    pub borderline_quality_high: f64,
    /// Minimum agent count the pipeline runs with. Default: 1.
    pub min_agents: usize,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            review_confidence_threshold: 0.70,
            agreement_threshold: 0.66,
            borderline_quality_low: 40.0,
            borderline_quality_high: 60.0,
            min_agents: 1,
        }
    }
}
