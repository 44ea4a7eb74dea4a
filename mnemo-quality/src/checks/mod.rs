pub mod content;
pub mod duplicates;
pub mod references;
