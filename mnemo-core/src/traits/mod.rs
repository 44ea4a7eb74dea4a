pub mod agent;
pub mod events;
pub mod session_store;
pub mod store;

pub use agent::ICurationAgent;
pub use events::{ITriageEventSink, NullEventSink, TriageEvent};
pub use session_store::ISessionStore;
pub use store::IRecordStore;
