/// Analysis pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("agent {agent} failed on record {record_id}: {reason}")]
    AgentFailed {
        agent: String,
        record_id: String,
        reason: String,
    },

    #[error("consensus requires at least one agent analysis")]
    EmptyConsensusInput,
}
