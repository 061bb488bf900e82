//! Data model shared by the matcher crates.

pub mod catalog;
pub mod collections;
pub mod query;
pub mod result;

pub use catalog::{CatalogEntry, CatalogId};
pub use collections::{FxHashMap, FxHashSet};
pub use query::QueryTitle;
pub use result::{ConfidenceTier, MatchOutcome, MatchResult, MatchStrategy, MatchWarning};
