//! # mnemo-core
//!
//! Foundation crate for the Mnemo memory curation system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod record;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CurationConfig;
pub use errors::{CuratorError, CuratorResult};
pub use record::{Record, RecordType, ScoredRecord};
