//! # mnemo-agents
//!
//! The agent scoring framework: a roster of independent scoring
//! strategies, the weighted consensus engine that reconciles their votes,
//! and the batch pipeline that runs quality analysis plus all agents over
//! a set of records in parallel.

pub mod consensus;
pub mod pipeline;
pub mod roster;

pub use consensus::ConsensusEngine;
pub use pipeline::{AnalysisPipeline, BatchAnalysis};
pub use roster::{default_roster, FreshnessAgent, GeneralAgent, SecurityAgent};
