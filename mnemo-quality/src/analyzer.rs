//! QualityAnalyzer runs all checks over one record, isolating failures.

use chrono::Utc;
use tracing::warn;

use mnemo_core::config::{AnalysisConfig, QualityConfig};
use mnemo_core::models::QualityReport;
use mnemo_core::record::Record;
use mnemo_core::traits::IRecordStore;

use crate::checks::{content, duplicates, references};
use crate::scoring;

/// Per-record quality analyzer.
///
/// Each sub-check is independent; one that fails (similarity index down,
/// codebase unreadable) is logged and skipped so the record still gets a
/// partial analysis.
pub struct QualityAnalyzer {
    config: QualityConfig,
    similar_limit: usize,
}

impl QualityAnalyzer {
    pub fn new(config: QualityConfig, analysis: &AnalysisConfig) -> Self {
        Self {
            config,
            similar_limit: analysis.similar_limit,
        }
    }

    /// Analyze one record against the store.
    pub fn analyze(&self, record: &Record, store: &dyn IRecordStore) -> QualityReport {
        let mut issues = Vec::new();

        match content::check(record, &self.config) {
            Ok(found) => issues.extend(found),
            Err(e) => warn!(record_id = %record.id, error = %e, "content check skipped"),
        }

        if self.config.check_against_codebase {
            if let Some(root) = &self.config.codebase_root {
                match references::check(record, root) {
                    Ok(found) => issues.extend(found),
                    Err(e) => {
                        warn!(record_id = %record.id, error = %e, "reference check skipped")
                    }
                }
            }
        }

        match duplicates::check(record, store, &self.config, self.similar_limit) {
            Ok(found) => issues.extend(found),
            Err(e) => warn!(record_id = %record.id, error = %e, "duplicate check skipped"),
        }

        let quality_score = scoring::score(record, &issues, Utc::now());
        QualityReport {
            quality_score,
            issues,
        }
    }
}

impl Default for QualityAnalyzer {
    fn default() -> Self {
        Self::new(QualityConfig::default(), &AnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{healthy_record, MemoryRecordStore};

    #[test]
    fn similarity_failure_degrades_to_partial_analysis() {
        let record = healthy_record("r1");
        let mut store = MemoryRecordStore::new(vec![record.clone()]);
        store.fail_similarity = true;

        let report = QualityAnalyzer::default().analyze(&record, &store);
        // Duplicate check skipped, everything else still ran.
        assert!(report.quality_score > 90.0);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn issues_pull_the_score_down() {
        let record = test_fixtures::make_record(
            "r1",
            mnemo_core::record::RecordType::Insight,
            "TODO",
            400,
        );
        let store = MemoryRecordStore::new(vec![record.clone()]);
        let report = QualityAnalyzer::default().analyze(&record, &store);
        assert!(report.quality_score < 100.0);
        assert!(!report.issues.is_empty());
    }
}
