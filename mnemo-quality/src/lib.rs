//! # mnemo-quality
//!
//! Per-record quality analysis. Runs independent checks (dangling
//! references, duplicates via similarity query, content hygiene) and folds
//! the resulting issues into a bounded quality score. A failing check is
//! skipped, never fatal: a partial analysis beats aborting the record.

pub mod analyzer;
pub mod checks;
pub mod scoring;

pub use analyzer::QualityAnalyzer;
