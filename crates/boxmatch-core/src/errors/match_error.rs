//! Top-level matcher error.

use super::error_code::ErrorCode;
use super::{ConfigError, IndexError, TitleError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("Title error: {0}")]
    Title(#[from] TitleError),

    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ErrorCode for MatchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Title(e) => e.error_code(),
            Self::Index(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
