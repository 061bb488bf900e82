//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for title variants (at most 4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

/// SmallVec sized for posting lists and per-entry names (usually 1-2).
pub type SmallVec2<T> = SmallVec<[T; 2]>;
