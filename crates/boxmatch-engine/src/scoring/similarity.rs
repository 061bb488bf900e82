//! Token-set similarity for fuzzy title comparison.

use boxmatch_core::types::collections::FxHashSet;

/// Word tokens of a canonical string.
pub fn tokens(text: &str) -> FxHashSet<&str> {
    text.split_whitespace().collect()
}

/// Jaccard similarity of the word-token sets of two canonical strings.
///
/// J(A, B) = |A ∩ B| / |A ∪ B|
/// Returns 0.0 if either side has no tokens.
pub fn token_set_similarity(a: &str, b: &str) -> f64 {
    let set_a = tokens(a);
    let set_b = tokens(b);
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    intersection as f64 / union as f64
}
