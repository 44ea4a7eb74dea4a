/// Record store collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found: {id}")]
    NotFound { id: String },

    #[error("store query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("similarity query unavailable: {reason}")]
    SimilarityUnavailable { reason: String },
}
