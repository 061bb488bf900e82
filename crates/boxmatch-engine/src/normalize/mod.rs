//! Title normalization: raw title -> small ordered set of canonical forms.

pub mod numerals;
pub mod pipeline;
pub mod types;

pub use pipeline::normalize;
pub use types::{NormalizedTitle, Transform, Variant};
