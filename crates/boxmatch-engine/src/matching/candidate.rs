//! Candidate selection and tie-breaking.

use std::cmp::Ordering;

use boxmatch_core::constants::SCORE_EPSILON;

use crate::index::IndexedEntry;
use crate::scoring::Score;

/// A catalog entry paired with its score for the current query.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub indexed: &'a IndexedEntry,
    pub score: Score,
}

impl ScoredCandidate<'_> {
    /// `Greater` means `self` is preferred. Scores within `SCORE_EPSILON` tie;
    /// ties go to exact-year agreement, then an entry the library already
    /// tracks, then the lowest catalog id.
    pub fn preference(&self, other: &Self) -> Ordering {
        let by_score = if (self.score.value - other.score.value).abs() <= SCORE_EPSILON {
            Ordering::Equal
        } else {
            self.score.value.total_cmp(&other.score.value)
        };

        by_score
            .then(self.score.year_agrees.cmp(&other.score.year_agrees))
            .then(
                self.indexed
                    .entry
                    .is_tracked()
                    .cmp(&other.indexed.entry.is_tracked()),
            )
            .then(other.indexed.id().cmp(&self.indexed.id()))
    }
}

/// Most preferred candidate. Earlier candidates win exact ties, so the
/// result depends only on the input order.
pub fn select_best<'a, I>(candidates: I) -> Option<ScoredCandidate<'a>>
where
    I: IntoIterator<Item = ScoredCandidate<'a>>,
{
    candidates.into_iter().reduce(|best, next| {
        if next.preference(&best) == Ordering::Greater {
            next
        } else {
            best
        }
    })
}
