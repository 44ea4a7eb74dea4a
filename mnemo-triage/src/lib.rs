//! # mnemo-triage
//!
//! The human-in-the-loop half of the curation pipeline: turns analysis
//! batches into discrete curation items, walks an operator through them
//! with a resumable session state machine, and executes the confirmed
//! action queues against the record store.

pub mod events;
pub mod executor;
pub mod extract;
pub mod machine;
pub mod manager;
pub mod session_store;

pub use events::TracingEventSink;
pub use executor::{ActionExecutor, ExecutionOutcome};
pub use extract::extract_items;
pub use manager::{StartOptions, TriageManager};
pub use session_store::FileSessionStore;
