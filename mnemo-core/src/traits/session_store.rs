use crate::errors::CuratorResult;
use crate::models::CurationSession;

/// Durable storage for the single live curation session.
///
/// There is exactly one session per store location; presence of a persisted
/// session doubles as the resume signal for `start`.
pub trait ISessionStore: Send + Sync {
    /// Load the persisted session, if one exists.
    fn load(&self) -> CuratorResult<Option<CurationSession>>;

    /// Persist the session atomically, replacing any previous state.
    fn save(&self, session: &CurationSession) -> CuratorResult<()>;

    /// Discard the persisted session. Idempotent.
    fn delete(&self) -> CuratorResult<()>;
}
