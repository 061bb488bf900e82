//! Single-query resolution against a candidate index.

use boxmatch_core::constants::SCORE_EPSILON;
use boxmatch_core::types::collections::FxHashSet;
use boxmatch_core::{CatalogId, MatchConfig, MatchResult, MatchStrategy, MatchWarning, QueryTitle};

use super::candidate::{select_best, ScoredCandidate};
use super::fallback::FallbackScan;
use crate::index::CandidateIndex;
use crate::normalize::{normalize, NormalizedTitle};
use crate::scoring::Scorer;

/// Resolves one query title at a time. Holds no mutable state, so one
/// matcher can serve any number of queries against a shared index.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    config: &'a MatchConfig,
    scorer: Scorer<'a>,
}

impl<'a> Matcher<'a> {
    pub fn new(config: &'a MatchConfig) -> Self {
        Self {
            config,
            scorer: Scorer::new(config),
        }
    }

    /// Resolve `query` against every entry in `index`.
    pub fn match_query(&self, query: &QueryTitle, index: &CandidateIndex) -> MatchResult {
        self.match_excluding(query, index, &FxHashSet::default())
    }

    /// Resolve `query`, treating entries in `consumed` as absent.
    ///
    /// A title that fails normalization yields an `Error` result instead of
    /// an `Err`, so one bad query never aborts a batch.
    pub fn match_excluding(
        &self,
        query: &QueryTitle,
        index: &CandidateIndex,
        consumed: &FxHashSet<CatalogId>,
    ) -> MatchResult {
        let normalized = match normalize(&query.title, self.config) {
            Ok(normalized) => normalized,
            Err(error) => {
                tracing::debug!(rank = query.rank, %error, "query title rejected");
                return MatchResult::failed(query.clone(), error);
            }
        };
        let year = query.year.or(normalized.year_hint());

        if let Some(year) = year {
            let positions = shortlist(
                normalized.keys().map(|key| index.year_positions_for(key, year)),
                index,
                consumed,
            );
            let scored = self.score_positions(&normalized, Some(year), index, &positions);
            // A perfect score with year agreement cannot be beaten or out-tied.
            let decisive = select_best(scored)
                .filter(|c| c.score.year_agrees && c.score.value >= 1.0 - SCORE_EPSILON);
            if decisive.is_some() {
                return self.accept(query, decisive, positions.len());
            }
        }

        let positions = shortlist(
            normalized.keys().map(|key| index.positions_for(key)),
            index,
            consumed,
        );
        if positions.is_empty() {
            return self.fallback(query, &normalized, year, index, consumed);
        }

        let scored = self.score_positions(&normalized, year, index, &positions);
        self.accept(query, select_best(scored), positions.len())
    }

    fn score_positions<'i>(
        &self,
        query: &NormalizedTitle,
        year: Option<u16>,
        index: &'i CandidateIndex,
        positions: &[usize],
    ) -> Vec<ScoredCandidate<'i>> {
        positions
            .iter()
            .map(|&pos| {
                let indexed = index.at(pos);
                ScoredCandidate {
                    indexed,
                    score: self.scorer.score(query, year, indexed),
                }
            })
            .collect()
    }

    fn fallback(
        &self,
        query: &QueryTitle,
        normalized: &NormalizedTitle,
        year: Option<u16>,
        index: &CandidateIndex,
        consumed: &FxHashSet<CatalogId>,
    ) -> MatchResult {
        let scan =
            FallbackScan::run(&self.scorer, self.config, normalized, year, index, consumed);
        let mut result = self.accept(query, scan.best, scan.evaluated);
        result.used_fallback = true;

        if scan.partial {
            tracing::warn!(
                rank = query.rank,
                title = %query.title,
                evaluated = scan.evaluated,
                cap = scan.cap,
                "fallback scan hit its cap; result may improve with a higher cap"
            );
            result.warnings.push(MatchWarning::PartialScan {
                evaluated: scan.evaluated,
                cap: scan.cap,
            });
        }
        result
    }

    /// Apply the acceptance floor to the selected candidate.
    fn accept(
        &self,
        query: &QueryTitle,
        best: Option<ScoredCandidate<'_>>,
        candidates_scored: usize,
    ) -> MatchResult {
        let mut result = match best {
            Some(c) if c.score.value >= self.config.acceptance_floor - SCORE_EPSILON => {
                MatchResult::matched(
                    query.clone(),
                    c.indexed.entry.clone(),
                    c.score.value,
                    c.score.strategy,
                    c.score.tier(self.config),
                )
            }
            Some(c) => MatchResult::unmatched(query.clone(), c.score.value, c.score.strategy),
            None => MatchResult::unmatched(query.clone(), 0.0, MatchStrategy::None),
        };
        result.candidates_scored = candidates_scored;

        tracing::debug!(
            rank = query.rank,
            outcome = ?result.outcome,
            strategy = %result.strategy,
            score = result.score,
            candidate = ?result.entry.as_ref().map(|e| e.id.0),
            candidates_scored,
            "query resolved"
        );
        result
    }
}

/// Union of the position lists, minus consumed entries, sorted and deduplicated.
fn shortlist<'i>(
    lists: impl Iterator<Item = &'i [usize]>,
    index: &CandidateIndex,
    consumed: &FxHashSet<CatalogId>,
) -> Vec<usize> {
    let mut positions: Vec<usize> = lists
        .flatten()
        .copied()
        .filter(|&pos| !consumed.contains(&index.at(pos).id()))
        .collect();
    positions.sort_unstable();
    positions.dedup();
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxmatch_core::{CatalogEntry, ConfidenceTier, MatchOutcome};

    fn index(entries: &[CatalogEntry]) -> CandidateIndex {
        CandidateIndex::build(entries, &MatchConfig::default()).unwrap()
    }

    #[test]
    fn exact_title_and_year() {
        let config = MatchConfig::default();
        let index = index(&[CatalogEntry::new(438631, "Dune", Some(2021))]);
        let query = QueryTitle::new(1, "Dune").with_year(2021);
        let result = Matcher::new(&config).match_query(&query, &index);
        assert_eq!(result.outcome, MatchOutcome::Matched);
        assert_eq!(result.tier, ConfidenceTier::Exact);
        assert_eq!(result.strategy, MatchStrategy::Exact);
        assert!((result.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn year_hint_in_title_is_used() {
        let config = MatchConfig::default();
        let index = index(&[
            CatalogEntry::new(1, "A Star Is Born", Some(1976)),
            CatalogEntry::new(2, "A Star Is Born", Some(2018)),
        ]);
        let query = QueryTitle::new(1, "A Star Is Born (2018)");
        let result = Matcher::new(&config).match_query(&query, &index);
        assert_eq!(result.entry.map(|e| e.id.0), Some(2));
        assert_eq!(result.candidates_scored, 1);
    }

    #[test]
    fn closer_candidate_beats_subtitle_drop() {
        let config = MatchConfig::default();
        let index = index(&[
            CatalogEntry::new(1, "Mission: Impossible", Some(1996)),
            CatalogEntry::new(2, "Mission: Impossible \u{2013} Dead Reckoning", Some(2023)),
        ]);
        let query = QueryTitle::new(1, "Mission: Impossible - Dead Reckoning");
        let result = Matcher::new(&config).match_query(&query, &index);
        assert_eq!(result.entry.map(|e| e.id.0), Some(2));
        assert_eq!(result.strategy, MatchStrategy::Normalized);
    }

    #[test]
    fn consumed_entries_are_invisible() {
        let config = MatchConfig::default();
        let index = index(&[CatalogEntry::new(1, "Heat", Some(1995))]);
        let consumed: FxHashSet<CatalogId> = [CatalogId(1)].into_iter().collect();
        let result =
            Matcher::new(&config).match_excluding(&QueryTitle::new(1, "Heat"), &index, &consumed);
        assert_eq!(result.outcome, MatchOutcome::Unmatched);
        assert!(result.used_fallback);
        assert_eq!(result.candidates_scored, 0);
    }

    #[test]
    fn bad_title_is_an_error_result() {
        let config = MatchConfig::default();
        let index = index(&[CatalogEntry::new(1, "Heat", Some(1995))]);
        let result = Matcher::new(&config).match_query(&QueryTitle::new(1, "--"), &index);
        assert_eq!(result.outcome, MatchOutcome::Error);
        assert!(result.error.is_some());
    }
}
