//! Single-slot index cache keyed by a caller-owned snapshot version.

use std::sync::Arc;

use boxmatch_core::{CatalogEntry, IndexError, MatchConfig};

use super::CandidateIndex;

/// Holds the index of the most recent catalog snapshot.
///
/// The caller owns the identity check: it hands in a version that changes
/// whenever the snapshot changes, and a version mismatch forces a rebuild.
/// The index is shared through `Arc` so concurrent batch runs can read it.
#[derive(Debug, Default)]
pub struct IndexCache {
    slot: Option<(u64, Arc<CandidateIndex>)>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached index for `version`, building it from `catalog` on a miss.
    /// A failed build leaves the cache empty.
    pub fn get_or_build(
        &mut self,
        version: u64,
        catalog: &[CatalogEntry],
        config: &MatchConfig,
    ) -> Result<Arc<CandidateIndex>, IndexError> {
        if let Some((cached, index)) = &self.slot {
            if *cached == version {
                return Ok(Arc::clone(index));
            }
        }

        self.slot = None;
        let index = Arc::new(CandidateIndex::build(catalog, config)?);
        tracing::debug!(version, entries = index.len(), "index cache rebuilt");
        self.slot = Some((version, Arc::clone(&index)));
        Ok(index)
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    pub fn version(&self) -> Option<u64> {
        self.slot.as_ref().map(|(version, _)| *version)
    }
}
