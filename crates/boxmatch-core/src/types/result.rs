//! Match outcome types.

use std::fmt;

use serde::Serialize;

use super::{CatalogEntry, QueryTitle};
use crate::config::MatchConfig;
use crate::constants;
use crate::errors::TitleError;

/// Ordered confidence buckets. `None < Low < Medium < High < Exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ConfidenceTier {
    None,
    Low,
    Medium,
    High,
    Exact,
}

impl ConfidenceTier {
    /// Classify a final score using the configured tier thresholds.
    pub fn from_score(score: f64, config: &MatchConfig) -> Self {
        if score >= config.tier_exact {
            Self::Exact
        } else if score >= config.tier_high {
            Self::High
        } else if score >= config.tier_medium {
            Self::Medium
        } else if score >= config.tier_low {
            Self::Low
        } else {
            Self::None
        }
    }

    /// Tier name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Exact => "exact",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which scoring rule produced a score. Rules are tried in declaration
/// order and the first satisfied one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchStrategy {
    /// Raw titles identical, case included.
    Exact,
    /// Full canonical forms identical.
    Normalized,
    /// Equal once number words and Roman numerals are rewritten as digits.
    NumeralCanonical,
    /// Equal once a leading article is dropped.
    ArticleInsensitive,
    /// One side's primary title equals the other's full title.
    SubtitleDropped,
    /// Word-token Jaccard similarity at or above the fuzzy threshold.
    FuzzyTokenSet,
    None,
}

impl MatchStrategy {
    /// Fixed score of a rule-based strategy. `FuzzyTokenSet` carries its own ratio.
    pub fn base_score(&self) -> Option<f64> {
        match self {
            Self::Exact => Some(constants::SCORE_EXACT),
            Self::Normalized => Some(constants::SCORE_NORMALIZED),
            Self::NumeralCanonical => Some(constants::SCORE_NUMERAL_CANONICAL),
            Self::ArticleInsensitive => Some(constants::SCORE_ARTICLE_INSENSITIVE),
            Self::SubtitleDropped => Some(constants::SCORE_SUBTITLE_DROPPED),
            Self::FuzzyTokenSet => None,
            Self::None => Some(0.0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Normalized => "normalized",
            Self::NumeralCanonical => "numeral_canonical",
            Self::ArticleInsensitive => "article_insensitive",
            Self::SubtitleDropped => "subtitle_dropped",
            Self::FuzzyTokenSet => "fuzzy_token_set",
            Self::None => "none",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchOutcome {
    Matched,
    Unmatched,
    Error,
}

/// Recovered conditions attached to a single result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchWarning {
    /// The fallback scan stopped at its cap with entries left unvisited.
    /// The best score seen so far was used; a higher cap may do better.
    PartialScan { evaluated: usize, cap: usize },
}

/// Resolution of one query against the catalog.
///
/// For `Unmatched` results `score` and `strategy` describe the best
/// rejected candidate (if any) so callers can see near misses; `entry`
/// is always `None` and `tier` is always `ConfidenceTier::None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub query: QueryTitle,
    pub entry: Option<CatalogEntry>,
    pub outcome: MatchOutcome,
    pub tier: ConfidenceTier,
    pub strategy: MatchStrategy,
    pub score: f64,
    /// Number of catalog entries scored for this query.
    pub candidates_scored: usize,
    /// Indexed lookup found nothing and the bounded linear scan ran.
    pub used_fallback: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<MatchWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TitleError>,
}

impl MatchResult {
    pub fn matched(
        query: QueryTitle,
        entry: CatalogEntry,
        score: f64,
        strategy: MatchStrategy,
        tier: ConfidenceTier,
    ) -> Self {
        Self {
            query,
            entry: Some(entry),
            outcome: MatchOutcome::Matched,
            tier,
            strategy,
            score,
            candidates_scored: 0,
            used_fallback: false,
            warnings: Vec::new(),
            error: None,
        }
    }

    pub fn unmatched(query: QueryTitle, best_score: f64, best_strategy: MatchStrategy) -> Self {
        Self {
            query,
            entry: None,
            outcome: MatchOutcome::Unmatched,
            tier: ConfidenceTier::None,
            strategy: best_strategy,
            score: best_score,
            candidates_scored: 0,
            used_fallback: false,
            warnings: Vec::new(),
            error: None,
        }
    }

    pub fn failed(query: QueryTitle, error: TitleError) -> Self {
        Self {
            query,
            entry: None,
            outcome: MatchOutcome::Error,
            tier: ConfidenceTier::None,
            strategy: MatchStrategy::None,
            score: 0.0,
            candidates_scored: 0,
            used_fallback: false,
            warnings: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_matched(&self) -> bool {
        self.outcome == MatchOutcome::Matched
    }

    pub fn has_partial_scan(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, MatchWarning::PartialScan { .. }))
    }
}
