//! Title normalization errors.

use serde::Serialize;

use super::error_code::{self, ErrorCode};

/// A title that cannot be reduced to any canonical form.
///
/// Attributable to exactly one query; the batch records it on that
/// query's result and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TitleError {
    #[error("Title is empty")]
    Empty { raw: String },

    #[error("Title has no alphanumeric content: {raw:?}")]
    NoAlphanumeric { raw: String },
}

impl TitleError {
    /// The raw title that failed.
    pub fn raw(&self) -> &str {
        match self {
            Self::Empty { raw } | Self::NoAlphanumeric { raw } => raw,
        }
    }
}

impl ErrorCode for TitleError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_TITLE
    }
}
