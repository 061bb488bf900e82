//! # boxmatch-engine
//!
//! Title resolution for the box-office tracker.
//! Normalizes titles, indexes a catalog snapshot, scores candidates and
//! resolves ranked query batches with first-claim deduplication.
//! Pure computation: no I/O, no shared mutable state.

pub mod index;
pub mod matching;
pub mod normalize;
pub mod scoring;

pub use index::{CandidateIndex, IndexCache, IndexStats, IndexedEntry};
pub use matching::{BatchMatcher, BatchSummary, Matcher};
pub use normalize::{normalize, NormalizedTitle, Transform, Variant};
pub use scoring::{token_set_similarity, Score, Scorer};
