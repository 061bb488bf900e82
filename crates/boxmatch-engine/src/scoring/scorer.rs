//! Rule-based title scoring with year adjustment.

use boxmatch_core::{ConfidenceTier, MatchConfig, MatchStrategy};

use super::similarity::token_set_similarity;
use crate::index::IndexedEntry;
use crate::normalize::NormalizedTitle;

type Rule = fn(&NormalizedTitle, &NormalizedTitle) -> bool;

/// Priority-ordered rules. The first rule satisfied by any candidate name
/// decides the strategy; scores are never blended.
const RULES: [(MatchStrategy, Rule); 5] = [
    (MatchStrategy::Exact, raw_equal),
    (MatchStrategy::Normalized, canonical_equal),
    (MatchStrategy::NumeralCanonical, numerals_equal),
    (MatchStrategy::ArticleInsensitive, bare_equal),
    (MatchStrategy::SubtitleDropped, primary_equals_other),
];

fn raw_equal(q: &NormalizedTitle, n: &NormalizedTitle) -> bool {
    q.raw() == n.raw()
}

fn canonical_equal(q: &NormalizedTitle, n: &NormalizedTitle) -> bool {
    q.canonical() == n.canonical()
}

fn numerals_equal(q: &NormalizedTitle, n: &NormalizedTitle) -> bool {
    q.numeral_form() == n.numeral_form()
}

fn bare_equal(q: &NormalizedTitle, n: &NormalizedTitle) -> bool {
    q.bare_form() == n.bare_form()
}

/// One side's primary title against the other's full title. Two titles
/// that merely share a primary ("X: Part One" vs "X: Part Two") do not match.
fn primary_equals_other(q: &NormalizedTitle, n: &NormalizedTitle) -> bool {
    q.primary_form() == Some(n.bare_form()) || n.primary_form() == Some(q.bare_form())
}

/// Final score of one query against one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Year-adjusted score in [0, 1].
    pub value: f64,
    pub strategy: MatchStrategy,
    /// Both sides carry a year and the years are equal.
    pub year_agrees: bool,
}

impl Score {
    pub fn tier(&self, config: &MatchConfig) -> ConfidenceTier {
        ConfidenceTier::from_score(self.value, config)
    }
}

/// Stateless scorer borrowing the run's configuration.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    config: &'a MatchConfig,
}

impl<'a> Scorer<'a> {
    pub fn new(config: &'a MatchConfig) -> Self {
        Self { config }
    }

    pub fn score(
        &self,
        query: &NormalizedTitle,
        query_year: Option<u16>,
        candidate: &IndexedEntry,
    ) -> Score {
        let (base, strategy) = self.base_score(query, &candidate.names);
        let entry_year = candidate.entry.year;
        Score {
            value: self.adjust_for_year(base, query_year, entry_year),
            strategy,
            year_agrees: matches!((query_year, entry_year), (Some(q), Some(e)) if q == e),
        }
    }

    /// Unadjusted score of the best-priority rule any name satisfies.
    pub fn base_score(
        &self,
        query: &NormalizedTitle,
        names: &[NormalizedTitle],
    ) -> (f64, MatchStrategy) {
        for (strategy, rule) in RULES {
            if names.iter().any(|name| rule(query, name)) {
                return (strategy.base_score().unwrap_or_default(), strategy);
            }
        }

        let ratio = names
            .iter()
            .map(|name| token_set_similarity(query.bare_form(), name.bare_form()))
            .fold(0.0, f64::max);
        if ratio > 0.0 && ratio >= self.config.fuzzy_threshold {
            return (ratio, MatchStrategy::FuzzyTokenSet);
        }

        (0.0, MatchStrategy::None)
    }

    /// Exact year agreement earns the bonus (capped at 1.0); a gap beyond the
    /// tolerance multiplies by the penalty factor. Re-releases are penalized,
    /// never rejected outright.
    pub fn adjust_for_year(
        &self,
        base: f64,
        query_year: Option<u16>,
        entry_year: Option<u16>,
    ) -> f64 {
        if base <= 0.0 {
            return base;
        }
        match (query_year, entry_year) {
            (Some(q), Some(e)) if q == e => (base + self.config.year_match_bonus).min(1.0),
            (Some(q), Some(e)) if q.abs_diff(e) > self.config.year_tolerance => {
                base * self.config.year_penalty_factor
            }
            _ => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use boxmatch_core::CatalogEntry;

    fn entry(title: &str, year: Option<u16>) -> IndexedEntry {
        let config = MatchConfig::default();
        IndexedEntry {
            entry: CatalogEntry::new(1, title, year),
            names: std::iter::once(normalize(title, &config).unwrap()).collect(),
        }
    }

    fn score(query: &str, year: Option<u16>, candidate: &IndexedEntry) -> Score {
        score_with(&MatchConfig::default(), query, year, candidate)
    }

    fn score_with(
        config: &MatchConfig,
        query: &str,
        year: Option<u16>,
        candidate: &IndexedEntry,
    ) -> Score {
        let q = normalize(query, config).unwrap();
        Scorer::new(config).score(&q, year, candidate)
    }

    #[test]
    fn exact_with_year_is_one() {
        let s = score("Dune", Some(2021), &entry("Dune", Some(2021)));
        assert_eq!(s.strategy, MatchStrategy::Exact);
        assert!((s.value - 1.0).abs() < 1e-12);
        assert!(s.year_agrees);
    }

    #[test]
    fn case_difference_is_normalized() {
        let s = score("the dark knight", None, &entry("The Dark Knight", Some(2008)));
        assert_eq!(s.strategy, MatchStrategy::Normalized);
        assert!((s.value - 0.95).abs() < 1e-12);
    }

    #[test]
    fn numeral_equivalence_is_high_not_exact() {
        let config = MatchConfig::default();
        let s = score("Fantastic 4", None, &entry("Fantastic Four", Some(2015)));
        assert_eq!(s.strategy, MatchStrategy::NumeralCanonical);
        assert_eq!(s.tier(&config), ConfidenceTier::High);
    }

    #[test]
    fn leading_article_ignored() {
        let s = score("The Batman", None, &entry("Batman", Some(2022)));
        assert_eq!(s.strategy, MatchStrategy::ArticleInsensitive);
        assert!((s.value - 0.90).abs() < 1e-12);
    }

    #[test]
    fn subtitle_dropped_on_query_side() {
        let s = score(
            "Mission: Impossible \u{2013} Dead Reckoning",
            None,
            &entry("Mission: Impossible", Some(1996)),
        );
        assert_eq!(s.strategy, MatchStrategy::SubtitleDropped);
        assert!((s.value - 0.85).abs() < 1e-12);
    }

    #[test]
    fn sibling_subtitles_do_not_match() {
        let s = score(
            "Mission: Impossible \u{2013} Fallout",
            None,
            &entry("Mission: Impossible \u{2013} Dead Reckoning", None),
        );
        assert_eq!(s.strategy, MatchStrategy::None);
    }

    #[test]
    fn fuzzy_respects_threshold() {
        // {dark, knight, rises} on both sides once the article is dropped
        let s = score("Dark Knight Rises", None, &entry("The Knight Dark Rises", None));
        assert_eq!(s.strategy, MatchStrategy::FuzzyTokenSet);
        assert!((s.value - 1.0).abs() < 1e-12);

        let s = score("Top Gun", None, &entry("Top Gun Maverick", None));
        assert_eq!(s.strategy, MatchStrategy::None);
        assert_eq!(s.value, 0.0);
    }

    #[test]
    fn distant_year_halves_score() {
        let s = score("Top Gun", Some(2022), &entry("Top Gun", Some(1986)));
        assert_eq!(s.strategy, MatchStrategy::Exact);
        assert!((s.value - 0.5).abs() < 1e-12);
        assert!(!s.year_agrees);
    }

    #[test]
    fn adjacent_year_is_neutral() {
        let s = score("Nosferatu", Some(2025), &entry("Nosferatu", Some(2024)));
        assert!((s.value - 1.0).abs() < 1e-12);
        assert!(!s.year_agrees);
    }

    #[test]
    fn softer_penalty_keeps_distant_year_above_floor() {
        let config = MatchConfig {
            year_penalty_factor: 0.9,
            ..Default::default()
        };
        let s = score_with(&config, "Top Gun", Some(2022), &entry("Top Gun", Some(1986)));
        assert_eq!(s.strategy, MatchStrategy::Exact);
        assert!((s.value - 0.9).abs() < 1e-12);
        assert!(s.value >= config.acceptance_floor);
    }

    #[test]
    fn zero_tolerance_penalizes_adjacent_year() {
        let config = MatchConfig {
            year_tolerance: 0,
            ..Default::default()
        };
        let s = score_with(&config, "Nosferatu", Some(2025), &entry("Nosferatu", Some(2024)));
        assert_eq!(s.strategy, MatchStrategy::Exact);
        assert!((s.value - 0.5).abs() < 1e-12);
        assert!(!s.year_agrees);
    }

    #[test]
    fn year_bonus_is_capped() {
        let s = score("the batman", Some(2022), &entry("The Batman", Some(2022)));
        assert!((s.value - 1.0).abs() < 1e-12);
    }
}
