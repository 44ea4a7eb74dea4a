pub mod analysis;
pub mod consensus;
pub mod curation;
pub mod quality;
pub mod reports;
pub mod session;

pub use analysis::{AgentAnalysis, AgentRole, RecordAnalysis};
pub use consensus::{ConsensusResult, MinorityView};
pub use curation::{CurationItem, CurationItemKind, ItemStatus, TriageAction, TriageMode};
pub use quality::{IssueKind, QualityIssue, QualityReport, Severity};
pub use reports::{
    ExecutionFailure, ExecutionPlan, ExecutionReport, ItemDetails, PlannedDeletion, QueueStatus,
    SessionSummary, StatusReport, StepOutcome, TriageProgress,
};
pub use session::{ActionQueues, CurationSession, HistoryEntry, TriageState};
