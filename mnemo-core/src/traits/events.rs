use crate::models::{TriageAction, TriageMode};

/// Structured events emitted by the triage manager.
///
/// The state transitions themselves are pure; all observability goes
/// through this channel so the state machine is testable without
/// capturing stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum TriageEvent {
    SessionStarted { session_id: String, items: usize },
    SessionResumed { session_id: String, pending: usize },
    ItemPresented { item_id: u32 },
    ActionApplied { item_id: u32, action: TriageAction },
    ModeSwitched { mode: TriageMode },
    ModeExhausted { mode: TriageMode },
    QueueCleared { queue: String, reset_items: usize },
    ItemUnqueued { item_id: u32 },
    SessionPersisted { session_id: String },
    SessionDiscarded { session_id: String },
}

/// Sink for triage events.
pub trait ITriageEventSink: Send + Sync {
    fn emit(&self, event: TriageEvent);
}

/// Sink that drops every event. Useful in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventSink;

impl ITriageEventSink for NullEventSink {
    fn emit(&self, _event: TriageEvent) {}
}
