/// Triage session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no active curation session, run `start` to begin one")]
    NoActiveSession,

    #[error("session file is corrupted ({reason}), discard it and run `start` again")]
    Corrupted { reason: String },

    #[error("unknown curation item: {item_id}")]
    UnknownItem { item_id: u32 },

    #[error("no item is currently presented, call `next` first")]
    NoCurrentItem,

    #[error("item {item_id} is already {status} and cannot accept a triage action")]
    InvalidAction { item_id: u32, status: String },

    #[error("item {item_id} is not queued")]
    NotQueued { item_id: u32 },

    #[error("unknown queue: {name}")]
    UnknownQueue { name: String },
}
