//! File-backed session store: one JSON document, written atomically.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use mnemo_core::errors::{CuratorResult, SessionError};
use mnemo_core::models::CurationSession;
use mnemo_core::traits::ISessionStore;

/// Persists the session as a single JSON file.
///
/// Writes go to a sibling temp file first and rename over the target, so a
/// crash mid-write never leaves a torn document. File presence doubles as
/// the one-live-session lock for the store location.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone();
        tmp.set_extension("json.tmp");
        tmp
    }
}

impl ISessionStore for FileSessionStore {
    fn load(&self) -> CuratorResult<Option<CurationSession>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let session = serde_json::from_str(&raw).map_err(|e| SessionError::Corrupted {
            reason: e.to_string(),
        })?;
        Ok(Some(session))
    }

    fn save(&self, session: &CurationSession) -> CuratorResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(session)?;
        let tmp = self.temp_path();
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), session_id = %session.session_id, "session persisted");
        Ok(())
    }

    fn delete(&self) -> CuratorResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
