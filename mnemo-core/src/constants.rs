/// Mnemo system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Similarity above which another record counts as a duplicate.
pub const DUPLICATE_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Lower bound of the "recurring theme" similarity band.
pub const PATTERN_BAND_LOW: f64 = 0.70;

/// Neighbors required inside the pattern band before a pattern candidate is raised.
pub const PATTERN_MIN_NEIGHBORS: usize = 3;

/// Content shorter than this is flagged as low quality.
pub const MIN_CONTENT_LENGTH: usize = 20;

/// Quality score deductions per issue severity.
pub const DEDUCTION_CRITICAL: f64 = 30.0;
pub const DEDUCTION_HIGH: f64 = 20.0;
pub const DEDUCTION_MEDIUM: f64 = 10.0;
pub const DEDUCTION_LOW: f64 = 5.0;

/// Bonus for records carrying at least this many metadata keys.
pub const RICH_METADATA_KEYS: usize = 3;
/// Quality bonus for rich metadata.
pub const METADATA_BONUS: f64 = 5.0;
/// Records newer than this many days earn the recency bonus.
pub const RECENCY_BONUS_DAYS: i64 = 30;
/// Quality bonus for recent records.
pub const RECENCY_BONUS: f64 = 5.0;

/// Default number of records pulled into one analysis batch.
pub const DEFAULT_RECORD_LIMIT: usize = 50;
/// Default similarity-query fan-out per record.
pub const DEFAULT_SIMILAR_LIMIT: usize = 5;
