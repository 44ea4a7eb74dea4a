use crate::errors::CuratorResult;
use crate::models::{AgentAnalysis, AgentRole};
use crate::record::Record;

/// One independent scoring strategy.
///
/// Agents never see each other's output; reconciliation happens in the
/// consensus engine. An agent that fails on a record is dropped from that
/// record's consensus rather than failing the whole analysis.
pub trait ICurationAgent: Send + Sync {
    /// Which roster member this is.
    fn role(&self) -> AgentRole;

    /// Domain-specific relevance of a record to this agent, in [0, 1].
    fn relevance_score(&self, record: &Record) -> f64;

    /// Full analysis: confidence, relevance, findings, and a keep/delete vote.
    fn analyze(&self, record: &Record) -> CuratorResult<AgentAnalysis>;
}
