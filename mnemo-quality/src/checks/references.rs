//! Dangling file-path reference detection.
//!
//! Only lines that look like they are *citing* a path are checked, so prose
//! that merely describes a glob or naming pattern does not trip the check.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use mnemo_core::errors::CuratorResult;
use mnemo_core::models::{IssueKind, QualityIssue, Severity};
use mnemo_core::record::Record;

/// A token with a directory separator and a known source/doc extension.
static PATH_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[A-Za-z0-9_\-./]+/[A-Za-z0-9_\-.]+\.(?:rs|py|ts|js|go|java|c|h|cpp|md|toml|yaml|yml|json|sql|sh)\b",
    )
    .unwrap()
});

/// Citation context: backticks, or a "file/path/see/in/at" cue word.
static PATH_CONTEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:`[^`]+`|\b(?:file|path|see|in|at|defined)\b)").unwrap());

/// Glob/wildcard tokens describe patterns, not citations.
static GLOB_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*?\[\]{}]").unwrap());

/// Extract the path references worth verifying from a record's content.
pub fn cited_paths(content: &str) -> Vec<String> {
    let mut paths = Vec::new();
    for line in content.lines() {
        if !PATH_CONTEXT_RE.is_match(line) {
            continue;
        }
        for m in PATH_TOKEN_RE.find_iter(line) {
            let token = m.as_str();
            if GLOB_RE.is_match(token) {
                continue;
            }
            if !paths.iter().any(|p| p == token) {
                paths.push(token.to_string());
            }
        }
    }
    paths
}

/// Flag cited paths that no longer resolve under `codebase_root`.
pub fn check(record: &Record, codebase_root: &Path) -> CuratorResult<Vec<QualityIssue>> {
    let mut issues = Vec::new();
    for cited in cited_paths(&record.content) {
        let absolute = codebase_root.join(&cited);
        if !absolute.exists() {
            issues.push(
                QualityIssue::new(
                    IssueKind::BrokenReference,
                    Severity::Medium,
                    format!("cited path no longer exists: {cited}"),
                )
                .with_suggestion(format!(
                    "update or remove the reference to {cited}"
                )),
            );
        }
    }
    Ok(issues)
}
