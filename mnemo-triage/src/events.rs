//! Default event sink: structured tracing.

use tracing::info;

use mnemo_core::traits::{ITriageEventSink, TriageEvent};

/// Emits every triage event as a tracing record.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl ITriageEventSink for TracingEventSink {
    fn emit(&self, event: TriageEvent) {
        match event {
            TriageEvent::SessionStarted { session_id, items } => {
                info!(%session_id, items, "triage session started")
            }
            TriageEvent::SessionResumed {
                session_id,
                pending,
            } => info!(%session_id, pending, "triage session resumed"),
            TriageEvent::ItemPresented { item_id } => info!(item_id, "item presented"),
            TriageEvent::ActionApplied { item_id, action } => {
                info!(item_id, ?action, "triage action applied")
            }
            TriageEvent::ModeSwitched { mode } => info!(%mode, "triage mode switched"),
            TriageEvent::ModeExhausted { mode } => info!(%mode, "triage mode exhausted"),
            TriageEvent::QueueCleared { queue, reset_items } => {
                info!(%queue, reset_items, "queue cleared")
            }
            TriageEvent::ItemUnqueued { item_id } => info!(item_id, "item unqueued"),
            TriageEvent::SessionPersisted { session_id } => {
                info!(%session_id, "session persisted")
            }
            TriageEvent::SessionDiscarded { session_id } => {
                info!(%session_id, "session discarded")
            }
        }
    }
}
