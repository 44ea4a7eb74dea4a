//! ActionExecutor, the confirm-before-mutation boundary.
//!
//! Without confirmation this only summarizes what would happen, spelling
//! out each planned deletion because deletions are irreversible. With
//! confirmation it mutates the store, isolating failures per item.

use tracing::{info, warn};

use mnemo_core::errors::CuratorResult;
use mnemo_core::models::{
    CurationItemKind, CurationSession, ExecutionFailure, ExecutionPlan, ExecutionReport,
    PlannedDeletion,
};
use mnemo_core::traits::IRecordStore;

/// What `execute` produced: a dry-run plan or a completed run.
#[derive(Debug)]
pub enum ExecutionOutcome {
    Plan(ExecutionPlan),
    Completed(ExecutionReport),
}

pub struct ActionExecutor<'a> {
    store: &'a dyn IRecordStore,
}

impl<'a> ActionExecutor<'a> {
    pub fn new(store: &'a dyn IRecordStore) -> Self {
        Self { store }
    }

    fn plan(&self, session: &CurationSession) -> ExecutionPlan {
        let deletions = session
            .queues
            .deletions
            .iter()
            .filter_map(|id| session.item(*id))
            .filter_map(|item| match &item.kind {
                CurationItemKind::Delete { record_id } => Some(PlannedDeletion {
                    item_id: item.item_id,
                    record_id: record_id.clone(),
                    recommendation: item.recommendation.clone(),
                }),
                _ => None,
            })
            .collect();

        ExecutionPlan {
            deletions,
            connections: session.queues.connections.len(),
            enhancements: session.queues.enhancements.len(),
            patterns: session.queues.patterns.len(),
        }
    }

    /// Execute the session's action queues.
    ///
    /// `confirm = false` performs no mutation. A failed deletion never
    /// blocks the rest of the batch; every failure lands in the report.
    /// Connection/enhancement/pattern execution is an extension point:
    /// those queues are acknowledged in the report only.
    pub fn execute(
        &self,
        session: &CurationSession,
        confirm: bool,
    ) -> CuratorResult<ExecutionOutcome> {
        if !confirm {
            return Ok(ExecutionOutcome::Plan(self.plan(session)));
        }

        let plan = self.plan(session);
        let mut deleted = 0usize;
        let mut errors = Vec::new();

        for planned in &plan.deletions {
            match self.store.delete(&planned.record_id) {
                Ok(()) => {
                    info!(record_id = %planned.record_id, "record deleted");
                    deleted += 1;
                }
                Err(e) => {
                    warn!(record_id = %planned.record_id, error = %e, "deletion failed");
                    errors.push(ExecutionFailure {
                        item_id: planned.item_id,
                        record_id: planned.record_id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(ExecutionOutcome::Completed(ExecutionReport {
            deletions: deleted,
            connections: plan.connections,
            enhancements: plan.enhancements,
            patterns: plan.patterns,
            errors,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnemo_core::models::{CurationItem, ItemStatus};
    use test_fixtures::{healthy_record, MemoryRecordStore};

    fn delete_item(item_id: u32, record_id: &str) -> CurationItem {
        CurationItem {
            item_id,
            kind: CurationItemKind::Delete {
                record_id: record_id.to_string(),
            },
            status: ItemStatus::Queued,
            confidence: 0.9,
            recommendation: "remove".to_string(),
            agent_findings: vec![],
        }
    }

    fn session_with_queued_deletions(ids: &[(u32, &str)]) -> CurationSession {
        let items = ids.iter().map(|(id, rid)| delete_item(*id, rid)).collect();
        let mut session = CurationSession::new(vec![], vec![], items);
        session.queues.deletions = ids.iter().map(|(id, _)| *id).collect();
        session
    }

    #[test]
    fn dry_run_never_touches_the_store() {
        let store = MemoryRecordStore::new(vec![healthy_record("r1")]);
        let session = session_with_queued_deletions(&[(1, "r1")]);

        let outcome = ActionExecutor::new(&store).execute(&session, false).unwrap();
        match outcome {
            ExecutionOutcome::Plan(plan) => {
                assert_eq!(plan.deletions.len(), 1);
                assert_eq!(plan.deletions[0].record_id, "r1");
            }
            ExecutionOutcome::Completed(_) => panic!("dry run must not complete"),
        }
        assert_eq!(store.delete_call_count(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn confirmed_run_deletes_each_queued_record_once() {
        let store = MemoryRecordStore::new(vec![healthy_record("r1"), healthy_record("r2")]);
        let session = session_with_queued_deletions(&[(1, "r1"), (2, "r2")]);

        let outcome = ActionExecutor::new(&store).execute(&session, true).unwrap();
        match outcome {
            ExecutionOutcome::Completed(report) => {
                assert_eq!(report.deletions, 2);
                assert!(report.errors.is_empty());
            }
            ExecutionOutcome::Plan(_) => panic!("confirmed run must complete"),
        }
        assert_eq!(store.delete_call_count(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn failed_deletion_does_not_block_the_rest() {
        let store = MemoryRecordStore::new(vec![healthy_record("r2")]);
        let session = session_with_queued_deletions(&[(1, "r-missing"), (2, "r2")]);

        let outcome = ActionExecutor::new(&store).execute(&session, true).unwrap();
        match outcome {
            ExecutionOutcome::Completed(report) => {
                assert_eq!(report.deletions, 1);
                assert_eq!(report.errors.len(), 1);
                assert_eq!(report.errors[0].record_id, "r-missing");
            }
            ExecutionOutcome::Plan(_) => panic!("confirmed run must complete"),
        }
        assert!(store.is_empty());
    }
}
