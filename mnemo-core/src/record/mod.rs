pub mod base;
pub mod types;

pub use base::{Record, ScoredRecord};
pub use types::RecordType;
