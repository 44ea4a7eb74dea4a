use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants;

/// Configuration for the per-record quality analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Whether file-path references are resolved against a codebase root.
    /// Default: false.
    pub check_against_codebase: bool,
    /// Root directory for reference resolution. Default: none.
    pub codebase_root: Option<PathBuf>,
    /// Content shorter than this is flagged. Default: 20.
    pub min_content_length: usize,
    /// Similarity above which a neighbor is a duplicate. Default: 0.85.
    pub duplicate_similarity_threshold: f64,
    /// Lower bound of the recurring-theme band. Default: 0.70.
    pub pattern_band_low: f64,
    /// Neighbors inside the band before a pattern candidate is raised. Default: 3.
    pub pattern_min_neighbors: usize,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            check_against_codebase: false,
            codebase_root: None,
            min_content_length: constants::MIN_CONTENT_LENGTH,
            duplicate_similarity_threshold: constants::DUPLICATE_SIMILARITY_THRESHOLD,
            pattern_band_low: constants::PATTERN_BAND_LOW,
            pattern_min_neighbors: constants::PATTERN_MIN_NEIGHBORS,
        }
    }
}
