//! Curation item extraction from an analysis batch.
//!
//! One delete item per record the consensus voted out, plus one item per
//! extractor-visible issue (connection, enhancement, pattern). No
//! deduplication across kinds: a record can legitimately carry a delete
//! item and an enhancement item at once; they are triaged separately.

use mnemo_core::models::{
    CurationItem, CurationItemKind, IssueKind, ItemStatus, RecordAnalysis, Severity,
};

/// Confidence assigned to issue-derived items, by issue severity.
fn issue_confidence(severity: Severity) -> f64 {
    match severity {
        Severity::Low => 0.5,
        Severity::Medium => 0.65,
        Severity::High => 0.8,
        Severity::Critical => 0.9,
    }
}

/// Walk a batch of analyses and emit the flat item list.
///
/// Item IDs are sequential per extraction run and stable only within it.
pub fn extract_items(analyses: &[RecordAnalysis]) -> Vec<CurationItem> {
    let mut items: Vec<CurationItem> = Vec::new();
    let mut next_id = 1u32;

    for analysis in analyses {
        if analysis.consensus.final_decision {
            let agent_findings: Vec<String> = analysis
                .agent_analyses
                .iter()
                .flat_map(|a| {
                    a.findings
                        .iter()
                        .map(move |f| format!("{}: {f}", a.agent_role))
                })
                .collect();

            items.push(CurationItem {
                item_id: next_id,
                kind: CurationItemKind::Delete {
                    record_id: analysis.record_id.clone(),
                },
                status: ItemStatus::Pending,
                confidence: analysis.consensus.consensus_confidence,
                recommendation: format!(
                    "agents recommend deletion (weighted score {:.2}, quality {:.0})",
                    analysis.consensus.weighted_score, analysis.quality_score
                ),
                agent_findings,
            });
            next_id += 1;
        }

        for issue in &analysis.issues {
            let kind = match issue.kind {
                IssueKind::ConnectionOpportunity => CurationItemKind::Connect {
                    record_id: analysis.record_id.clone(),
                    related_ids: issue.related_record_ids.clone(),
                },
                IssueKind::EnhancementOpportunity => CurationItemKind::Enhance {
                    record_id: analysis.record_id.clone(),
                },
                IssueKind::PatternCandidate => CurationItemKind::ExtractPattern {
                    record_id: analysis.record_id.clone(),
                    related_ids: issue.related_record_ids.clone(),
                },
                _ => continue,
            };

            items.push(CurationItem {
                item_id: next_id,
                kind,
                status: ItemStatus::Pending,
                confidence: issue_confidence(issue.severity),
                recommendation: issue
                    .suggestion
                    .clone()
                    .unwrap_or_else(|| issue.description.clone()),
                agent_findings: Vec::new(),
            });
            next_id += 1;
        }
    }

    items
}
