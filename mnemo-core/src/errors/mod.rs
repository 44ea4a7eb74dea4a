//! Error types for the curation system.
//!
//! Each subsystem gets its own thiserror enum; `CuratorError` aggregates
//! them so cross-crate call sites can use one `CuratorResult<T>` alias.

mod analysis_error;
mod session_error;
mod store_error;

pub use analysis_error::AnalysisError;
pub use session_error::SessionError;
pub use store_error::StoreError;

/// Top-level error for all curation operations.
#[derive(Debug, thiserror::Error)]
pub enum CuratorError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// Result alias used across the workspace.
pub type CuratorResult<T> = Result<T, CuratorError>;
