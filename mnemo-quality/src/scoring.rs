//! Severity-based quality scoring.

use chrono::{DateTime, Utc};

use mnemo_core::constants;
use mnemo_core::models::QualityIssue;
use mnemo_core::record::Record;

/// Fold issues into a bounded quality score.
///
/// Starts at 100, deducts per issue by severity, adds small bonuses for
/// rich metadata and recency, clamps to [0, 100].
pub fn score(record: &Record, issues: &[QualityIssue], now: DateTime<Utc>) -> f64 {
    let mut score = 100.0;

    for issue in issues {
        score -= issue.severity.deduction();
    }

    if record.metadata.len() >= constants::RICH_METADATA_KEYS {
        score += constants::METADATA_BONUS;
    }
    if record.age_days(now) < constants::RECENCY_BONUS_DAYS {
        score += constants::RECENCY_BONUS;
    }

    score.clamp(0.0, 100.0)
}
