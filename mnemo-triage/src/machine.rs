//! Pure state transitions of the triage session.
//!
//! Every function here mutates the in-memory `CurationSession` and nothing
//! else; persistence and event emission live in the manager. Status
//! invariant: a pending item moves to exactly one terminal status
//! (queued/skipped/rejected) and only `unqueue`/`clear` move it back.

use chrono::Utc;

use mnemo_core::errors::{CuratorResult, SessionError};
use mnemo_core::models::{
    CurationSession, HistoryEntry, ItemStatus, StepOutcome, TriageAction, TriageMode,
    TriageProgress,
};

/// Progress snapshot for the session's current mode.
pub fn progress(session: &CurationSession) -> TriageProgress {
    let (_, queued, skipped, rejected) = session.status_counts();
    TriageProgress {
        mode: session.triage.mode,
        pending_in_mode: session.pending_in_mode(session.triage.mode),
        queued,
        skipped,
        rejected,
    }
}

/// Apply an operator action to the current item.
///
/// Rejected when there is no current item or the item is already terminal;
/// a triage action never silently no-ops.
pub fn apply_action(session: &mut CurationSession, action: TriageAction) -> CuratorResult<u32> {
    let item_id = session
        .triage
        .current_item
        .ok_or(SessionError::NoCurrentItem)?;

    let item = session
        .item_mut(item_id)
        .ok_or(SessionError::UnknownItem { item_id })?;
    if item.status.is_terminal() {
        return Err(SessionError::InvalidAction {
            item_id,
            status: item.status.to_string(),
        }
        .into());
    }

    item.status = match action {
        TriageAction::Accept => ItemStatus::Queued,
        TriageAction::Reject => ItemStatus::Rejected,
        TriageAction::Skip => ItemStatus::Skipped,
    };

    if action == TriageAction::Accept {
        let kind = item.kind.clone();
        session.queues.bucket_mut(&kind).push(item_id);
    }

    session.triage.history.push(HistoryEntry {
        item_id,
        action,
        at: Utc::now(),
    });
    session.triage.current_item = None;
    Ok(item_id)
}

/// Scan forward (wrapping once) for the next pending item under the
/// current mode, making it current. Reports the mode exhausted when no
/// pending item remains.
pub fn advance(session: &mut CurationSession) -> StepOutcome {
    let mode = session.triage.mode;
    let len = session.items.len();
    let start = session.triage.cursor.min(len);

    let next = (start..len)
        .chain(0..start)
        .find(|&idx| {
            let item = &session.items[idx];
            item.status == ItemStatus::Pending && mode.matches(&item.kind)
        });

    match next {
        Some(idx) => {
            let item = session.items[idx].clone();
            session.triage.cursor = idx + 1;
            session.triage.current_item = Some(item.item_id);
            StepOutcome::Item {
                item,
                progress: progress(session),
            }
        }
        None => {
            session.triage.current_item = None;
            StepOutcome::ModeExhausted {
                mode,
                progress: progress(session),
            }
        }
    }
}

/// Switch the mode filter. Resets the cursor and re-scans for the first
/// pending item in the new mode.
pub fn switch_mode(session: &mut CurationSession, mode: TriageMode) -> StepOutcome {
    session.triage.mode = mode;
    session.triage.cursor = 0;
    session.triage.current_item = None;
    advance(session)
}

/// Reset one queued item back to pending and drop it from its queue.
pub fn unqueue(session: &mut CurationSession, item_id: u32) -> CuratorResult<()> {
    let item = session
        .item_mut(item_id)
        .ok_or(SessionError::UnknownItem { item_id })?;
    if item.status != ItemStatus::Queued {
        return Err(SessionError::NotQueued { item_id }.into());
    }
    item.status = ItemStatus::Pending;
    session.queues.remove(item_id);
    Ok(())
}

/// Empty a named queue, resetting every item in it to pending.
/// Returns the number of items reset.
pub fn clear_queue(session: &mut CurationSession, name: &str) -> CuratorResult<usize> {
    let bucket = session
        .queues
        .bucket_by_name_mut(name)
        .ok_or_else(|| SessionError::UnknownQueue {
            name: name.to_string(),
        })?;
    let ids = std::mem::take(bucket);

    for item_id in &ids {
        if let Some(item) = session.item_mut(*item_id) {
            item.status = ItemStatus::Pending;
        }
    }
    Ok(ids.len())
}
