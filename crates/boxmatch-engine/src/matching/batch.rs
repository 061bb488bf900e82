//! Batch resolution with first-claim deduplication.

use boxmatch_core::types::collections::FxHashSet;
use boxmatch_core::{
    CatalogEntry, CatalogId, IndexError, MatchConfig, MatchError, MatchResult, QueryTitle,
};

use super::matcher::Matcher;
use super::summary::BatchSummary;
use crate::index::CandidateIndex;

/// Batch-local claim state threaded through the fold: one result slot per
/// input position and the ids already taken by earlier-ranked queries.
type Claims = (Vec<Option<MatchResult>>, FxHashSet<CatalogId>);

/// Resolves a whole ranked list against one catalog snapshot.
///
/// Queries claim entries in ascending rank (input order among equal ranks);
/// a claimed entry is invisible to every later query in the same batch.
/// Results come back in input order, one per query.
#[derive(Debug, Clone, Default)]
pub struct BatchMatcher {
    config: MatchConfig,
}

impl BatchMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn build_index(&self, catalog: &[CatalogEntry]) -> Result<CandidateIndex, IndexError> {
        CandidateIndex::build(catalog, &self.config)
    }

    /// Build an index over `catalog` and resolve `queries` against it.
    /// Only an index build failure is fatal; per-query failures are results.
    pub fn match_batch(
        &self,
        queries: &[QueryTitle],
        catalog: &[CatalogEntry],
    ) -> Result<Vec<MatchResult>, MatchError> {
        let index = self.build_index(catalog)?;
        Ok(self.match_with_index(queries, &index))
    }

    /// Resolve `queries` against a prebuilt index. The index is only read,
    /// so independent batches may share it across threads.
    pub fn match_with_index(
        &self,
        queries: &[QueryTitle],
        index: &CandidateIndex,
    ) -> Vec<MatchResult> {
        let span = tracing::info_span!(
            "match_batch",
            queries = queries.len(),
            catalog = index.len()
        );
        let _guard = span.enter();

        let matcher = Matcher::new(&self.config);
        let mut claim_order: Vec<usize> = (0..queries.len()).collect();
        claim_order.sort_by_key(|&i| queries[i].rank);

        let init: Claims = (vec![None; queries.len()], FxHashSet::default());
        let (slots, consumed) = claim_order
            .into_iter()
            .fold(init, |(mut slots, mut consumed), i| {
                let result = matcher.match_excluding(&queries[i], index, &consumed);
                if let Some(entry) = &result.entry {
                    consumed.insert(entry.id);
                }
                slots[i] = Some(result);
                (slots, consumed)
            });

        let results: Vec<MatchResult> = slots.into_iter().flatten().collect();
        BatchSummary::from_results(&results).log();
        tracing::debug!(claimed = consumed.len(), "batch claims settled");
        results
    }
}
