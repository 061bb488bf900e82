//! Batch-level counts for the reporting layer.

use std::collections::BTreeMap;

use boxmatch_core::{ConfidenceTier, MatchOutcome, MatchResult};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub errored: usize,
    /// Results whose fallback scan stopped at the cap.
    pub partial_scans: usize,
    /// Matched results per confidence tier.
    pub by_tier: BTreeMap<ConfidenceTier, usize>,
}

impl BatchSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            summary.total += 1;
            match result.outcome {
                MatchOutcome::Matched => {
                    summary.matched += 1;
                    *summary.by_tier.entry(result.tier).or_default() += 1;
                }
                MatchOutcome::Unmatched => summary.unmatched += 1,
                MatchOutcome::Error => summary.errored += 1,
            }
            if result.has_partial_scan() {
                summary.partial_scans += 1;
            }
            summary
        })
    }

    pub fn tier_count(&self, tier: ConfidenceTier) -> usize {
        self.by_tier.get(&tier).copied().unwrap_or(0)
    }

    pub fn log(&self) {
        tracing::info!(
            matched = self.matched,
            total = self.total,
            unmatched = self.unmatched,
            errored = self.errored,
            partial_scans = self.partial_scans,
            "Matched {}/{}",
            self.matched,
            self.total
        );
    }
}
