//! The built-in agent roster.
//!
//! Agents are independent and order-insensitive; the pipeline accepts any
//! set of `ICurationAgent` implementations, these three are just the
//! defaults.

mod freshness;
mod general;
mod security;

pub use freshness::FreshnessAgent;
pub use general::GeneralAgent;
pub use security::SecurityAgent;

use mnemo_core::traits::ICurationAgent;

/// The default three-agent roster.
pub fn default_roster() -> Vec<Box<dyn ICurationAgent>> {
    vec![
        Box::new(GeneralAgent),
        Box::new(SecurityAgent),
        Box::new(FreshnessAgent),
    ]
}
