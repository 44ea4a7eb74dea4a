//! Configuration for the curation pipeline.
//!
//! # Examples
//!
//! ```
//! use mnemo_core::config::CurationConfig;
//!
//! let config = CurationConfig::default();
//! assert!(!config.quality.check_against_codebase);
//! assert!((config.quality.duplicate_similarity_threshold - 0.85).abs() < f64::EPSILON);
//! ```

mod analysis_config;
mod consensus_config;
mod quality_config;

pub use analysis_config::AnalysisConfig;
pub use consensus_config::ConsensusConfig;
pub use quality_config::QualityConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{CuratorError, CuratorResult};

/// Top-level configuration, TOML-loadable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurationConfig {
    pub quality: QualityConfig,
    pub consensus: ConsensusConfig,
    pub analysis: AnalysisConfig,
}

impl CurationConfig {
    /// Parse a TOML document. Missing sections fall back to defaults.
    pub fn from_toml_str(s: &str) -> CuratorResult<Self> {
        toml::from_str(s).map_err(|e| CuratorError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> CuratorResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
