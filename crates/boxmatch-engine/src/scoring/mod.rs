//! Similarity scoring between a query's canonical forms and one catalog entry.

pub mod scorer;
pub mod similarity;

pub use scorer::{Score, Scorer};
pub use similarity::token_set_similarity;
