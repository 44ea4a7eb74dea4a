//! Duplicate and recurring-theme detection via the store's similarity query.

use mnemo_core::config::QualityConfig;
use mnemo_core::errors::CuratorResult;
use mnemo_core::models::{IssueKind, QualityIssue, Severity};
use mnemo_core::record::Record;
use mnemo_core::traits::IRecordStore;

/// Query the store for neighbors and flag duplicates and pattern candidates.
///
/// The record is always excluded from its own duplicate set. Exact content
/// matches (same blake3 hash) are High severity; near matches above the
/// similarity threshold are Medium and also surface a connection
/// opportunity. Three or more neighbors in the band just under the
/// threshold indicate a recurring theme worth extracting.
pub fn check(
    record: &Record,
    store: &dyn IRecordStore,
    config: &QualityConfig,
    similar_limit: usize,
) -> CuratorResult<Vec<QualityIssue>> {
    let neighbors = store.find_similar(&record.content, similar_limit)?;

    let mut duplicate_ids = Vec::new();
    let mut exact_ids = Vec::new();
    let mut band_ids = Vec::new();

    for scored in &neighbors {
        if scored.record.id == record.id {
            continue;
        }
        if scored.record.content_hash == record.content_hash {
            exact_ids.push(scored.record.id.clone());
        } else if scored.similarity >= config.duplicate_similarity_threshold {
            duplicate_ids.push(scored.record.id.clone());
        } else if scored.similarity >= config.pattern_band_low {
            band_ids.push(scored.record.id.clone());
        }
    }

    let mut issues = Vec::new();

    if !exact_ids.is_empty() {
        issues.push(
            QualityIssue::new(
                IssueKind::Duplicate,
                Severity::High,
                format!("identical content stored under {} other record(s)", exact_ids.len()),
            )
            .with_suggestion("keep one copy and delete the rest")
            .with_related(exact_ids),
        );
    }

    if !duplicate_ids.is_empty() {
        issues.push(
            QualityIssue::new(
                IssueKind::Duplicate,
                Severity::Medium,
                format!("{} near-duplicate record(s) found", duplicate_ids.len()),
            )
            .with_suggestion("merge or cross-link the duplicates")
            .with_related(duplicate_ids.clone()),
        );
        issues.push(
            QualityIssue::new(
                IssueKind::ConnectionOpportunity,
                Severity::Low,
                "near-duplicates should at least be cross-linked".to_string(),
            )
            .with_suggestion("connect this record with its near-duplicates")
            .with_related(duplicate_ids),
        );
    }

    if band_ids.len() >= config.pattern_min_neighbors {
        issues.push(
            QualityIssue::new(
                IssueKind::PatternCandidate,
                Severity::Low,
                format!(
                    "{} related records share this theme",
                    band_ids.len()
                ),
            )
            .with_suggestion("extract the recurring theme into a reusable pattern")
            .with_related(band_ids),
        );
    }

    Ok(issues)
}
