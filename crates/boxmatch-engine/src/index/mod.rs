//! Candidate index over a catalog snapshot.

pub mod cache;
pub mod candidate_index;

pub use cache::IndexCache;
pub use candidate_index::{CandidateIndex, IndexStats, IndexedEntry};
