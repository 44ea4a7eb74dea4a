//! AnalysisPipeline: quality checks, agents, and consensus over a batch.
//!
//! Records are independent, so the batch runs in parallel with rayon.
//! Failure isolation is per agent and per record: a failing agent is
//! dropped from that record's consensus; a record with zero surviving
//! agents lands in the `unanalyzable` list instead of the results.

use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, warn};

use mnemo_core::config::CurationConfig;
use mnemo_core::models::{AgentAnalysis, RecordAnalysis};
use mnemo_core::record::Record;
use mnemo_core::traits::{ICurationAgent, IRecordStore};
use mnemo_quality::QualityAnalyzer;

use crate::consensus::ConsensusEngine;

/// Result of one batch pass.
#[derive(Debug)]
pub struct BatchAnalysis {
    pub analyses: Vec<RecordAnalysis>,
    /// IDs of records no agent could analyze; reported, never dropped.
    pub unanalyzable: Vec<String>,
}

/// Owns the analyzer, the agent roster, and the consensus engine.
pub struct AnalysisPipeline {
    analyzer: QualityAnalyzer,
    agents: Vec<Box<dyn ICurationAgent>>,
    consensus: ConsensusEngine,
    min_agents: usize,
}

impl AnalysisPipeline {
    /// Build a pipeline. An empty roster is legal but useless: every
    /// record comes back unanalyzable.
    pub fn new(config: &CurationConfig, agents: Vec<Box<dyn ICurationAgent>>) -> Self {
        Self {
            analyzer: QualityAnalyzer::new(config.quality.clone(), &config.analysis),
            agents,
            consensus: ConsensusEngine::new(config.consensus.clone()),
            min_agents: config.consensus.min_agents.max(1),
        }
    }

    /// Swap the quality configuration, e.g. when `start` options enable
    /// codebase reference checking for one session.
    pub fn set_quality_config(
        &mut self,
        quality: mnemo_core::config::QualityConfig,
        analysis: &mnemo_core::config::AnalysisConfig,
    ) {
        self.analyzer = QualityAnalyzer::new(quality, analysis);
    }

    /// Analyze one record: quality report, per-agent verdicts, consensus.
    ///
    /// Returns `None` when fewer than `min_agents` survived on this record.
    pub fn analyze_record(&self, record: &Record, store: &dyn IRecordStore) -> Option<RecordAnalysis> {
        let started = Instant::now();
        let report = self.analyzer.analyze(record, store);

        let agent_analyses: Vec<AgentAnalysis> = self
            .agents
            .iter()
            .filter_map(|agent| match agent.analyze(record) {
                Ok(analysis) => Some(analysis),
                Err(e) => {
                    warn!(
                        record_id = %record.id,
                        agent = %agent.role(),
                        error = %e,
                        "agent dropped from this record's consensus"
                    );
                    None
                }
            })
            .collect();

        if agent_analyses.len() < self.min_agents {
            return None;
        }

        // At least one agent survived, so combine cannot see empty input.
        let consensus = self
            .consensus
            .combine(&agent_analyses, report.quality_score)
            .ok()?;

        debug!(
            record_id = %record.id,
            quality = report.quality_score,
            decision = consensus.final_decision,
            "record analyzed"
        );

        Some(RecordAnalysis {
            record_id: record.id.clone(),
            quality_score: report.quality_score,
            issues: report.issues,
            agent_analyses,
            consensus,
            processing_time_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Analyze a batch of records in parallel.
    pub fn analyze_batch(&self, records: &[Record], store: &dyn IRecordStore) -> BatchAnalysis {
        let results: Vec<(String, Option<RecordAnalysis>)> = records
            .par_iter()
            .map(|record| (record.id.clone(), self.analyze_record(record, store)))
            .collect();

        let mut analyses = Vec::with_capacity(results.len());
        let mut unanalyzable = Vec::new();
        for (record_id, result) in results {
            match result {
                Some(analysis) => analyses.push(analysis),
                None => unanalyzable.push(record_id),
            }
        }

        BatchAnalysis {
            analyses,
            unanalyzable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnemo_core::errors::{AnalysisError, CuratorResult};
    use mnemo_core::models::AgentRole;
    use mnemo_core::traits::ICurationAgent;
    use test_fixtures::{healthy_record, MemoryRecordStore};

    struct FailingAgent;

    impl ICurationAgent for FailingAgent {
        fn role(&self) -> AgentRole {
            AgentRole::General
        }

        fn relevance_score(&self, _record: &Record) -> f64 {
            1.0
        }

        fn analyze(&self, record: &Record) -> CuratorResult<AgentAnalysis> {
            Err(AnalysisError::AgentFailed {
                agent: "general".into(),
                record_id: record.id.clone(),
                reason: "synthetic failure".into(),
            }
            .into())
        }
    }

    #[test]
    fn batch_with_default_roster_analyzes_everything() {
        let records = vec![healthy_record("r1"), healthy_record("r2")];
        let store = MemoryRecordStore::new(records.clone());
        let pipeline =
            AnalysisPipeline::new(&CurationConfig::default(), crate::roster::default_roster());

        let batch = pipeline.analyze_batch(&records, &store);
        assert_eq!(batch.analyses.len(), 2);
        assert!(batch.unanalyzable.is_empty());
    }

    #[test]
    fn all_agents_failing_marks_record_unanalyzable() {
        let records = vec![healthy_record("r1")];
        let store = MemoryRecordStore::new(records.clone());
        let pipeline =
            AnalysisPipeline::new(&CurationConfig::default(), vec![Box::new(FailingAgent)]);

        let batch = pipeline.analyze_batch(&records, &store);
        assert!(batch.analyses.is_empty());
        assert_eq!(batch.unanalyzable, vec!["r1".to_string()]);
    }

    #[test]
    fn failing_agent_does_not_sink_surviving_agents() {
        let records = vec![healthy_record("r1")];
        let store = MemoryRecordStore::new(records.clone());
        let mut agents = crate::roster::default_roster();
        agents.push(Box::new(FailingAgent));
        let pipeline = AnalysisPipeline::new(&CurationConfig::default(), agents);

        let batch = pipeline.analyze_batch(&records, &store);
        assert_eq!(batch.analyses.len(), 1);
        assert_eq!(batch.analyses[0].agent_analyses.len(), 3);
    }
}
