//! Candidate index construction errors.

use super::error_code::{self, ErrorCode};
use crate::types::CatalogId;

/// Errors that make a catalog snapshot unusable. Fatal for the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("Duplicate catalog id {id}")]
    DuplicateId { id: CatalogId },

    #[error("Catalog entry {id} has an unusable title: {title:?}")]
    InvalidEntryTitle { id: CatalogId, title: String },
}

impl ErrorCode for IndexError {
    fn error_code(&self) -> &'static str {
        error_code::INDEX_BUILD_ERROR
    }
}
