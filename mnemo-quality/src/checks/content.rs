//! Content hygiene: minimum length, placeholder markers, debug artifacts.

use regex::Regex;
use std::sync::LazyLock;

use mnemo_core::config::QualityConfig;
use mnemo_core::errors::CuratorResult;
use mnemo_core::models::{IssueKind, QualityIssue, Severity};
use mnemo_core::record::Record;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:TODO|FIXME|XXX|TBD|WIP|HACK)\b").unwrap());

static DEBUG_ARTIFACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)^\s*(?:console\.log\(|println!\(|dbg!\(|print\()|(?:\[DEBUG\]|DEBUG:|>>> )"#,
    )
    .unwrap()
});

/// Run all content-hygiene checks over one record.
pub fn check(record: &Record, config: &QualityConfig) -> CuratorResult<Vec<QualityIssue>> {
    let mut issues = Vec::new();
    let content = record.content.trim();

    if content.chars().count() < config.min_content_length {
        issues.push(
            QualityIssue::new(
                IssueKind::ContentTooShort,
                Severity::High,
                format!(
                    "content is {} chars, below the useful minimum of {}",
                    content.chars().count(),
                    config.min_content_length
                ),
            )
            .with_suggestion("expand the record or delete it"),
        );
    }

    if let Some(m) = PLACEHOLDER_RE.find(content) {
        issues.push(
            QualityIssue::new(
                IssueKind::PlaceholderContent,
                Severity::Medium,
                format!("placeholder marker `{}` left in content", m.as_str()),
            )
            .with_suggestion("resolve the placeholder before trusting this record"),
        );
        issues.push(
            QualityIssue::new(
                IssueKind::EnhancementOpportunity,
                Severity::Low,
                "placeholder suggests the record was never finished".to_string(),
            )
            .with_suggestion("fill in the missing detail the placeholder stands for"),
        );
    }

    if DEBUG_ARTIFACT_RE.is_match(content) {
        issues.push(
            QualityIssue::new(
                IssueKind::DebugArtifact,
                Severity::Medium,
                "debug output captured into the record".to_string(),
            )
            .with_suggestion("strip the debug lines, keep the conclusion"),
        );
    }

    // Thin-but-valid records get an enrichment nudge rather than a penalty.
    if content.chars().count() >= config.min_content_length
        && record.metadata.is_empty()
        && !content.contains('\n')
    {
        issues.push(
            QualityIssue::new(
                IssueKind::EnhancementOpportunity,
                Severity::Low,
                "single-line record with no metadata".to_string(),
            )
            .with_suggestion("add context: project, source, or related records"),
        );
    }

    Ok(issues)
}
