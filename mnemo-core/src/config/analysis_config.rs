use serde::{Deserialize, Serialize};

use crate::constants;

/// Batch-analysis knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Records pulled into one batch when the operator gives no limit. Default: 50.
    pub default_record_limit: usize,
    /// Similarity-query fan-out per record. Default: 5.
    pub similar_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_record_limit: constants::DEFAULT_RECORD_LIMIT,
            similar_limit: constants::DEFAULT_SIMILAR_LIMIT,
        }
    }
}
