//! Query resolution: single-query matching, the bounded fallback scan, and
//! batch-level deduplication.

pub mod batch;
pub mod candidate;
pub mod fallback;
pub mod matcher;
pub mod summary;

pub use batch::BatchMatcher;
pub use candidate::{select_best, ScoredCandidate};
pub use fallback::FallbackScan;
pub use matcher::Matcher;
pub use summary::BatchSummary;
