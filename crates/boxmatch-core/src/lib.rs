//! # boxmatch-core
//!
//! Foundation crate for the box-office title matcher.
//! Defines the data model, errors, config, constants, and tracing setup.
//! The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::MatchConfig;
pub use errors::{ConfigError, ErrorCode, IndexError, MatchError, TitleError};
pub use types::{
    CatalogEntry, CatalogId, ConfidenceTier, MatchOutcome, MatchResult, MatchStrategy,
    MatchWarning, QueryTitle,
};
