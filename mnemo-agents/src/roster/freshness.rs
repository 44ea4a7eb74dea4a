//! Freshness agent: age vs the expected lifetime of each record type.

use chrono::Utc;

use mnemo_core::errors::CuratorResult;
use mnemo_core::models::{AgentAnalysis, AgentRole};
use mnemo_core::record::{Record, RecordType};
use mnemo_core::traits::ICurationAgent;

/// Expected useful lifetime per record type, in days.
///
/// Episodes go stale fastest; decisions stay relevant for years.
fn expected_lifetime_days(record_type: RecordType) -> f64 {
    match record_type {
        RecordType::Episode => 90.0,
        RecordType::Reference => 180.0,
        RecordType::Insight => 365.0,
        RecordType::Procedure => 365.0,
        RecordType::Decision => 730.0,
    }
}

/// Votes out records well past their expected lifetime.
///
/// Staleness is `age / lifetime`: below 1.0 the record is current, past
/// 2.0 it has outlived its type twice over and the agent votes delete.
pub struct FreshnessAgent;

impl FreshnessAgent {
    fn staleness(record: &Record) -> f64 {
        let age = record.age_days(Utc::now()).max(0) as f64;
        age / expected_lifetime_days(record.record_type)
    }
}

impl ICurationAgent for FreshnessAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Freshness
    }

    fn relevance_score(&self, record: &Record) -> f64 {
        // Fresh records give this agent nothing to judge.
        Self::staleness(record).min(1.0)
    }

    fn analyze(&self, record: &Record) -> CuratorResult<AgentAnalysis> {
        let staleness = Self::staleness(record);
        let delete = staleness > 2.0;

        let mut findings = Vec::new();
        if staleness > 1.0 {
            findings.push(format!(
                "record is {:.1}× past the expected lifetime for its type",
                staleness
            ));
        }

        let reasoning = if delete {
            format!(
                "{} record aged far beyond its useful lifetime (staleness {staleness:.1})",
                record.record_type
            )
        } else {
            format!("within expected lifetime (staleness {staleness:.1})")
        };

        Ok(AgentAnalysis {
            agent_role: AgentRole::Freshness,
            // Certainty grows with distance from the 2.0 decision line.
            confidence_score: (0.55 + (staleness - 2.0).abs() * 0.1).clamp(0.0, 0.9),
            relevance_score: self.relevance_score(record),
            findings,
            delete_recommendation: delete,
            reasoning,
            specialized_insights: Vec::new(),
        })
    }
}
