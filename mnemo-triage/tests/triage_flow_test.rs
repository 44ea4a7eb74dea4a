//! End-to-end triage flows: start/resume, walkthrough, queues, execution.

use std::sync::{Arc, Mutex};

use mnemo_agents::default_roster;
use mnemo_core::config::CurationConfig;
use mnemo_core::errors::{CuratorError, SessionError};
use mnemo_core::models::{StepOutcome, TriageAction, TriageMode};
use mnemo_core::record::{RecordType, ScoredRecord};
use mnemo_core::traits::{IRecordStore, ITriageEventSink, NullEventSink, TriageEvent};
use mnemo_triage::{
    ExecutionOutcome, FileSessionStore, StartOptions, TracingEventSink, TriageManager,
};
use test_fixtures::{healthy_record, init_test_tracing, make_record, MemoryRecordStore};

fn manager_with(
    store: Arc<MemoryRecordStore>,
    dir: &tempfile::TempDir,
    events: Box<dyn ITriageEventSink>,
) -> TriageManager {
    TriageManager::new(
        store,
        Box::new(FileSessionStore::new(dir.path().join("session.json"))),
        events,
        CurationConfig::default(),
        default_roster(),
    )
}

/// Three records engineered to yield one connect, one delete, and one
/// enhance item respectively.
fn seeded_store() -> Arc<MemoryRecordStore> {
    let near_dup = healthy_record("r-dup");
    let thin_old = make_record("r-thin-old", RecordType::Episode, "temp note", 400);
    let enhanceable = make_record(
        "r-enhance",
        RecordType::Insight,
        "Use exponential backoff when the upstream returns 429 errors. \
         The Retry-After header gives the exact wait.",
        5,
    );

    let store = MemoryRecordStore::new(vec![near_dup.clone(), thin_old, enhanceable]);
    store.set_similar(
        &near_dup.content,
        vec![ScoredRecord {
            record: make_record("r-other", RecordType::Insight, "nearly the same lesson", 30),
            similarity: 0.9,
        }],
    );
    Arc::new(store)
}

#[test]
fn start_on_empty_store_yields_no_items() {
    init_test_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(MemoryRecordStore::new(vec![]));
    let mut manager = manager_with(store, &dir, Box::new(TracingEventSink));

    let summary = manager.start(StartOptions::default()).unwrap();
    assert!(!summary.resumed);
    assert_eq!(summary.records_analyzed, 0);
    assert_eq!(
        summary.delete_items + summary.connect_items + summary.enhance_items
            + summary.pattern_items,
        0
    );

    match manager.next(None).unwrap() {
        StepOutcome::ModeExhausted { mode, progress } => {
            assert_eq!(mode, TriageMode::All);
            assert_eq!(progress.pending_in_mode, 0);
        }
        StepOutcome::Item { .. } => panic!("empty session must have no items"),
    }
}

#[test]
fn full_walkthrough_queues_and_executes() {
    init_test_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store();
    let mut manager = manager_with(store.clone(), &dir, Box::new(NullEventSink));

    let summary = manager.start(StartOptions::default()).unwrap();
    assert_eq!(summary.records_analyzed, 3);
    assert!(summary.unanalyzable.is_empty());
    assert_eq!(summary.delete_items, 1);
    assert_eq!(summary.connect_items, 1);
    assert_eq!(summary.enhance_items, 1);

    // Walk: accept the connect item, accept the delete item, skip the rest.
    let first = manager.next(None).unwrap();
    let first_id = match &first {
        StepOutcome::Item { item, .. } => item.item_id,
        _ => panic!("expected an item"),
    };
    assert!(first_id >= 1);
    manager.next(Some(TriageAction::Accept)).unwrap();
    manager.next(Some(TriageAction::Accept)).unwrap();
    let exhausted = manager.next(Some(TriageAction::Skip)).unwrap();
    assert!(matches!(exhausted, StepOutcome::ModeExhausted { .. }));

    let status = manager.status().unwrap();
    assert_eq!(status.total_items, 3);
    assert_eq!(status.queued, 2);
    assert_eq!(status.skipped, 1);
    assert_eq!(status.pending, 0);

    let queues = manager.queue_status().unwrap();
    assert_eq!(queues.deletions, 1);
    assert_eq!(queues.connections, 1);

    let view = manager.queue_view("deletions").unwrap();
    assert_eq!(view.viewed_items.len(), 1);
    assert_eq!(view.viewed_items[0].kind.record_id(), "r-thin-old");
    assert!(manager.queue_view("nonsense").is_err());

    // Dry run plans the deletion but touches nothing.
    match manager.execute(false).unwrap() {
        ExecutionOutcome::Plan(plan) => {
            assert_eq!(plan.deletions.len(), 1);
            assert_eq!(plan.deletions[0].record_id, "r-thin-old");
            assert_eq!(plan.connections, 1);
        }
        ExecutionOutcome::Completed(_) => panic!("dry run must not complete"),
    }
    assert_eq!(store.delete_call_count(), 0);

    // Confirmed run deletes exactly the queued record and discards the session.
    match manager.execute(true).unwrap() {
        ExecutionOutcome::Completed(report) => {
            assert_eq!(report.deletions, 1);
            assert_eq!(report.connections, 1);
            assert!(report.errors.is_empty());
        }
        ExecutionOutcome::Plan(_) => panic!("confirmed run must complete"),
    }
    assert_eq!(store.delete_call_count(), 1);
    assert_eq!(store.deleted_ids(), vec!["r-thin-old".to_string()]);

    let err = manager.next(None).unwrap_err();
    assert!(matches!(
        err,
        CuratorError::Session(SessionError::NoActiveSession)
    ));
}

#[test]
fn mode_filter_walks_only_matching_items() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_with(seeded_store(), &dir, Box::new(NullEventSink));
    manager.start(StartOptions::default()).unwrap();

    match manager.mode(TriageMode::Delete).unwrap() {
        StepOutcome::Item { item, progress } => {
            assert_eq!(item.kind.tag(), "delete");
            assert_eq!(progress.pending_in_mode, 1);
        }
        StepOutcome::ModeExhausted { .. } => panic!("a delete item exists"),
    }

    assert!(matches!(
        manager.mode(TriageMode::ExtractPattern).unwrap(),
        StepOutcome::ModeExhausted { .. }
    ));
}

#[test]
fn details_carries_record_and_agent_context() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_with(seeded_store(), &dir, Box::new(NullEventSink));
    manager.start(StartOptions::default()).unwrap();

    manager.mode(TriageMode::Delete).unwrap();
    let details = manager.details().unwrap();
    assert_eq!(details.item.kind.record_id(), "r-thin-old");
    assert_eq!(details.record_excerpt.as_deref(), Some("temp note"));
    assert!(!details.agent_reasoning.is_empty());
    assert!(details.quality_score.is_some());
}

#[test]
fn queue_clear_resets_two_deletions_to_pending() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(MemoryRecordStore::new(vec![
        make_record("old-1", RecordType::Episode, "temp note", 400),
        make_record("old-2", RecordType::Episode, "scratch", 400),
    ]));
    let mut manager = manager_with(store, &dir, Box::new(NullEventSink));

    let summary = manager.start(StartOptions::default()).unwrap();
    assert_eq!(summary.delete_items, 2);

    manager.next(None).unwrap();
    manager.next(Some(TriageAction::Accept)).unwrap();
    manager.next(Some(TriageAction::Accept)).unwrap();
    assert_eq!(manager.queue_status().unwrap().deletions, 2);

    let queues = manager.queue_clear("deletions").unwrap();
    assert_eq!(queues.deletions, 0);

    let status = manager.status().unwrap();
    assert_eq!(status.pending, 2);
    assert_eq!(status.queued, 0);
}

#[test]
fn unqueue_restores_one_item() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_with(seeded_store(), &dir, Box::new(NullEventSink));
    manager.start(StartOptions::default()).unwrap();

    let item_id = match manager.mode(TriageMode::Delete).unwrap() {
        StepOutcome::Item { item, .. } => item.item_id,
        _ => panic!("a delete item exists"),
    };
    manager.next(Some(TriageAction::Accept)).unwrap();
    assert_eq!(manager.queue_status().unwrap().deletions, 1);

    let queues = manager.unqueue(item_id).unwrap();
    assert_eq!(queues.deletions, 0);
    assert_eq!(manager.status().unwrap().pending, 3);
}

#[test]
fn failed_deletions_keep_the_session_for_retry() {
    init_test_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(MemoryRecordStore::new(vec![
        make_record("old-1", RecordType::Episode, "temp note", 400),
        make_record("old-2", RecordType::Episode, "scratch", 400),
    ]));
    let mut manager = manager_with(store.clone(), &dir, Box::new(NullEventSink));

    manager.start(StartOptions::default()).unwrap();
    manager.next(None).unwrap();
    manager.next(Some(TriageAction::Accept)).unwrap();
    manager.next(Some(TriageAction::Accept)).unwrap();
    assert_eq!(manager.queue_status().unwrap().deletions, 2);

    // The record vanishes out from under the queue before the confirmed run.
    store.delete("old-1").unwrap();

    match manager.execute(true).unwrap() {
        ExecutionOutcome::Completed(report) => {
            assert_eq!(report.deletions, 1);
            assert_eq!(report.errors.len(), 1);
            assert_eq!(report.errors[0].record_id, "old-1");
        }
        ExecutionOutcome::Plan(_) => panic!("confirmed run must complete"),
    }

    // The failed entry survives; the succeeded one is gone.
    let queues = manager.queue_status().unwrap();
    assert_eq!(queues.deletions, 1);
    let view = manager.queue_view("deletions").unwrap();
    assert_eq!(view.viewed_items[0].kind.record_id(), "old-1");

    // A retry still fails, and the session is still there afterwards.
    match manager.execute(true).unwrap() {
        ExecutionOutcome::Completed(report) => {
            assert_eq!(report.deletions, 0);
            assert_eq!(report.errors.len(), 1);
        }
        ExecutionOutcome::Plan(_) => panic!("confirmed run must complete"),
    }
    assert_eq!(manager.queue_status().unwrap().deletions, 1);
}

#[test]
fn start_resumes_persisted_session() {

    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store();

    let first_id = {
        let mut manager = manager_with(store.clone(), &dir, Box::new(NullEventSink));
        let summary = manager.start(StartOptions::default()).unwrap();
        manager.next(None).unwrap();
        manager.next(Some(TriageAction::Accept)).unwrap();
        summary.session_id
    };

    let mut manager = manager_with(store, &dir, Box::new(NullEventSink));
    let resumed = manager.start(StartOptions::default()).unwrap();
    assert!(resumed.resumed);
    assert_eq!(resumed.session_id, first_id);
    // The accepted item survived the restart.
    assert_eq!(manager.queue_status().unwrap().total_queued(), 1);
}

#[test]
fn corrupt_session_file_instructs_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ definitely not a session").unwrap();

    let manager = TriageManager::new(
        Arc::new(MemoryRecordStore::new(vec![])),
        Box::new(FileSessionStore::new(path)),
        Box::new(NullEventSink),
        CurationConfig::default(),
        default_roster(),
    );

    let err = manager.next(None).unwrap_err();
    assert!(matches!(
        err,
        CuratorError::Session(SessionError::Corrupted { .. })
    ));
    assert!(err.to_string().contains("start"));
}

/// Event sink that records everything, proving the state machine emits
/// through the channel rather than printing.
#[derive(Default)]
struct RecordingSink(Mutex<Vec<TriageEvent>>);

impl ITriageEventSink for RecordingSink {
    fn emit(&self, event: TriageEvent) {
        self.0.lock().unwrap().push(event);
    }
}

#[test]
fn triage_operations_emit_structured_events() {
    let dir = tempfile::tempdir().unwrap();
    let sink = Arc::new(RecordingSink::default());

    struct Forward(Arc<RecordingSink>);
    impl ITriageEventSink for Forward {
        fn emit(&self, event: TriageEvent) {
            self.0.emit(event);
        }
    }

    let mut manager = manager_with(seeded_store(), &dir, Box::new(Forward(sink.clone())));
    manager.start(StartOptions::default()).unwrap();
    manager.next(None).unwrap();
    manager.next(Some(TriageAction::Accept)).unwrap();

    let events = sink.0.lock().unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e, TriageEvent::SessionStarted { .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, TriageEvent::ItemPresented { .. })));
    assert!(events.iter().any(|e| matches!(
        e,
        TriageEvent::ActionApplied {
            action: TriageAction::Accept,
            ..
        }
    )));
}
