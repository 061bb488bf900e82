//! Shared constants for the title matcher.

/// Leading articles dropped for the article-insensitive variant.
pub const DEFAULT_ARTICLES: [&str; 3] = ["the", "a", "an"];

/// Minimum token-set Jaccard ratio accepted as a fuzzy match.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.80;

/// Scores below this are never selected.
pub const DEFAULT_ACCEPTANCE_FLOOR: f64 = 0.70;

/// Added when query and entry years agree exactly (capped at 1.0).
pub const DEFAULT_YEAR_MATCH_BONUS: f64 = 0.05;

/// Multiplier applied when the year gap exceeds the tolerance.
pub const DEFAULT_YEAR_PENALTY_FACTOR: f64 = 0.5;

/// Year gaps up to this many years are neither rewarded nor penalized.
pub const DEFAULT_YEAR_TOLERANCE: u16 = 1;

/// Maximum entries scored by the fallback linear scan.
pub const DEFAULT_FALLBACK_SCAN_CAP: usize = 2000;

pub const DEFAULT_TIER_EXACT: f64 = 0.95;
pub const DEFAULT_TIER_HIGH: f64 = 0.85;
pub const DEFAULT_TIER_MEDIUM: f64 = 0.70;
pub const DEFAULT_TIER_LOW: f64 = 0.50;

// ---- Strategy scores ----

pub const SCORE_EXACT: f64 = 1.0;
pub const SCORE_NORMALIZED: f64 = 0.95;
pub const SCORE_NUMERAL_CANONICAL: f64 = 0.92;
pub const SCORE_ARTICLE_INSENSITIVE: f64 = 0.90;
pub const SCORE_SUBTITLE_DROPPED: f64 = 0.85;

/// Scores closer than this are treated as tied.
pub const SCORE_EPSILON: f64 = 1e-9;

/// Largest number canonicalized between digits, words and Roman numerals.
pub const MAX_CANONICAL_NUMERAL: usize = 20;

/// Upper bound on canonical variants per title.
pub const MAX_VARIANTS: usize = 4;

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "BOXMATCH_LOG";
