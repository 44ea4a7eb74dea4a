use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of record type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordType {
    /// A distilled observation or lesson.
    Insight,
    /// A recorded decision with its context.
    Decision,
    /// A pointer to external material.
    Reference,
    /// A narrative of something that happened.
    Episode,
    /// A reusable how-to.
    Procedure,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordType::Insight => "insight",
            RecordType::Decision => "decision",
            RecordType::Reference => "reference",
            RecordType::Episode => "episode",
            RecordType::Procedure => "procedure",
        };
        write!(f, "{s}")
    }
}
