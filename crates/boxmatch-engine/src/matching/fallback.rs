//! Bounded linear scan used when indexed lookup yields nothing.

use boxmatch_core::constants::SCORE_EPSILON;
use boxmatch_core::types::collections::FxHashSet;
use boxmatch_core::{CatalogId, MatchConfig};

use super::candidate::{select_best, ScoredCandidate};
use crate::index::CandidateIndex;
use crate::normalize::NormalizedTitle;
use crate::scoring::Scorer;

/// Result of one fallback scan.
#[derive(Debug, Clone, Copy)]
pub struct FallbackScan<'a> {
    pub best: Option<ScoredCandidate<'a>>,
    /// Entries actually scored. Never exceeds `cap`.
    pub evaluated: usize,
    pub cap: usize,
    /// Stopped at the cap with unconsumed entries left unvisited.
    pub partial: bool,
}

impl<'a> FallbackScan<'a> {
    /// Walk the snapshot in order, skipping consumed entries, until a score
    /// clears the acceptance floor or `fallback_scan_cap` entries are scored.
    pub fn run(
        scorer: &Scorer<'_>,
        config: &MatchConfig,
        query: &NormalizedTitle,
        year: Option<u16>,
        index: &'a CandidateIndex,
        consumed: &FxHashSet<CatalogId>,
    ) -> Self {
        let mut scan = Self {
            best: None,
            evaluated: 0,
            cap: config.fallback_scan_cap,
            partial: false,
        };

        let available = index
            .entries()
            .iter()
            .filter(|indexed| !consumed.contains(&indexed.id()));

        for indexed in available {
            if scan.evaluated >= scan.cap {
                scan.partial = true;
                break;
            }

            let candidate = ScoredCandidate {
                indexed,
                score: scorer.score(query, year, indexed),
            };
            scan.evaluated += 1;
            scan.best = select_best(scan.best.into_iter().chain(Some(candidate)));

            if candidate.score.value >= config.acceptance_floor - SCORE_EPSILON {
                break;
            }
        }

        scan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxmatch_core::CatalogEntry;

    use crate::normalize::normalize;

    fn catalog(n: u64) -> Vec<CatalogEntry> {
        (1..=n)
            .map(|id| CatalogEntry::new(id, format!("Filler Title {id}"), Some(2000)))
            .collect()
    }

    #[test]
    fn stops_at_cap_and_flags_partial() {
        let config = MatchConfig {
            fallback_scan_cap: 10,
            ..Default::default()
        };
        let index = CandidateIndex::build(&catalog(50), &config).unwrap();
        let query = normalize("Nothing Like It", &config).unwrap();
        let scan = FallbackScan::run(
            &Scorer::new(&config),
            &config,
            &query,
            None,
            &index,
            &FxHashSet::default(),
        );
        assert_eq!(scan.evaluated, 10);
        assert!(scan.partial);
    }

    #[test]
    fn exhausting_the_catalog_is_not_partial() {
        let config = MatchConfig {
            fallback_scan_cap: 10,
            ..Default::default()
        };
        let index = CandidateIndex::build(&catalog(10), &config).unwrap();
        let query = normalize("Nothing Like It", &config).unwrap();
        let scan = FallbackScan::run(
            &Scorer::new(&config),
            &config,
            &query,
            None,
            &index,
            &FxHashSet::default(),
        );
        assert_eq!(scan.evaluated, 10);
        assert!(!scan.partial);
    }

    #[test]
    fn consumed_entries_are_skipped_without_counting() {
        let config = MatchConfig {
            fallback_scan_cap: 5,
            ..Default::default()
        };
        let index = CandidateIndex::build(&catalog(8), &config).unwrap();
        let consumed: FxHashSet<CatalogId> = (1..=3).map(CatalogId).collect();
        let query = normalize("Nothing Like It", &config).unwrap();
        let scorer = Scorer::new(&config);
        let scan = FallbackScan::run(&scorer, &config, &query, None, &index, &consumed);
        assert_eq!(scan.evaluated, 5);
        assert!(!scan.partial);
    }

    #[test]
    fn short_circuits_on_acceptable_score() {
        let config = MatchConfig::default();
        let mut entries = catalog(20);
        entries[2] = CatalogEntry::new(3, "Knight Dark Rises", Some(2012));
        let index = CandidateIndex::build(&entries, &config).unwrap();
        let query = normalize("Dark Knight Rises", &config).unwrap();
        let scan = FallbackScan::run(
            &Scorer::new(&config),
            &config,
            &query,
            None,
            &index,
            &FxHashSet::default(),
        );
        assert_eq!(scan.evaluated, 3);
        assert!(!scan.partial);
        assert_eq!(scan.best.map(|c| c.indexed.id().0), Some(3));
    }
}
