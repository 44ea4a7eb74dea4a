//! General-purpose agent: structural completeness.

use mnemo_core::errors::CuratorResult;
use mnemo_core::models::{AgentAnalysis, AgentRole};
use mnemo_core::record::Record;
use mnemo_core::traits::ICurationAgent;

/// Scores every record on structural completeness: enough prose to be
/// useful, sentence structure, and metadata context.
pub struct GeneralAgent;

impl GeneralAgent {
    /// Completeness in [0, 1] from cheap structural signals.
    fn completeness(record: &Record) -> f64 {
        let content = record.content.trim();
        let chars = content.chars().count() as f64;

        // Saturates at ~300 chars; below ~30 the record says almost nothing.
        let length_score = (chars / 300.0).min(1.0);
        let sentence_score = if content.contains(". ") || content.lines().count() > 1 {
            1.0
        } else {
            0.4
        };
        let metadata_score = (record.metadata.len() as f64 / 3.0).min(1.0);

        0.5 * length_score + 0.3 * sentence_score + 0.2 * metadata_score
    }
}

impl ICurationAgent for GeneralAgent {
    fn role(&self) -> AgentRole {
        AgentRole::General
    }

    fn relevance_score(&self, _record: &Record) -> f64 {
        // Structural completeness applies to every record equally.
        1.0
    }

    fn analyze(&self, record: &Record) -> CuratorResult<AgentAnalysis> {
        let completeness = Self::completeness(record);
        let delete = completeness < 0.3;

        let mut findings = Vec::new();
        if record.content.trim().chars().count() < 30 {
            findings.push("content is too thin to stand alone".to_string());
        }
        if record.metadata.is_empty() {
            findings.push("no metadata context".to_string());
        }
        if !delete && completeness < 0.6 {
            findings.push("usable but structurally incomplete".to_string());
        }

        let reasoning = if delete {
            format!("structural completeness {completeness:.2} is below the keep floor")
        } else {
            format!("structurally adequate (completeness {completeness:.2})")
        };

        Ok(AgentAnalysis {
            agent_role: AgentRole::General,
            // Confident at either extreme, uncertain around the floor.
            confidence_score: (0.55 + (completeness - 0.3).abs()).min(0.95),
            relevance_score: self.relevance_score(record),
            findings,
            delete_recommendation: delete,
            reasoning,
            specialized_insights: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnemo_core::record::RecordType;
    use test_fixtures::{healthy_record, make_record};

    #[test]
    fn healthy_record_is_kept() {
        let analysis = GeneralAgent.analyze(&healthy_record("r1")).unwrap();
        assert!(!analysis.delete_recommendation);
        assert!(analysis.confidence_score > 0.5);
    }

    #[test]
    fn skeleton_record_is_voted_out() {
        let record = make_record("r1", RecordType::Insight, "x", 1);
        let analysis = GeneralAgent.analyze(&record).unwrap();
        assert!(analysis.delete_recommendation);
        assert!(!analysis.findings.is_empty());
    }

    #[test]
    fn scores_stay_in_bounds() {
        for content in ["", "short", &"long sentence. ".repeat(100)] {
            let record = make_record("r", RecordType::Episode, content, 3);
            let a = GeneralAgent.analyze(&record).unwrap();
            assert!((0.0..=1.0).contains(&a.confidence_score));
            assert!((0.0..=1.0).contains(&a.relevance_score));
        }
    }
}
