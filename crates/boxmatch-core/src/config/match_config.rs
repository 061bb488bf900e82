//! Matcher configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Flat, immutable configuration passed by reference into every matcher call.
///
/// Resolution order for [`MatchConfig::load`] (highest priority first):
/// 1. Environment variables (`BOXMATCH_*`)
/// 2. TOML config file
/// 3. Compiled defaults
///
/// The engine itself never reads the environment; callers load once at
/// their edge and re-instantiate between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Leading articles dropped for the article-insensitive variant.
    pub articles: Vec<String>,
    /// Rewrite number words and Roman numerals 1-20 as digits.
    pub convert_numerals: bool,
    /// Produce a primary-title variant by dropping the last subtitle.
    pub split_subtitles: bool,
    /// Minimum token-set ratio for a fuzzy match. Default: 0.80.
    pub fuzzy_threshold: f64,
    /// Scores below this are treated as no match. Default: 0.70.
    pub acceptance_floor: f64,
    /// Bonus for an exact year match. Default: 0.05.
    pub year_match_bonus: f64,
    /// Multiplier for a year gap beyond `year_tolerance`. Default: 0.5.
    pub year_penalty_factor: f64,
    /// Largest year gap left unpenalized. Default: 1.
    pub year_tolerance: u16,
    /// Maximum entries scored by the fallback scan. Default: 2000.
    pub fallback_scan_cap: usize,
    pub tier_exact: f64,
    pub tier_high: f64,
    pub tier_medium: f64,
    pub tier_low: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            articles: constants::DEFAULT_ARTICLES
                .iter()
                .map(|a| a.to_string())
                .collect(),
            convert_numerals: true,
            split_subtitles: true,
            fuzzy_threshold: constants::DEFAULT_FUZZY_THRESHOLD,
            acceptance_floor: constants::DEFAULT_ACCEPTANCE_FLOOR,
            year_match_bonus: constants::DEFAULT_YEAR_MATCH_BONUS,
            year_penalty_factor: constants::DEFAULT_YEAR_PENALTY_FACTOR,
            year_tolerance: constants::DEFAULT_YEAR_TOLERANCE,
            fallback_scan_cap: constants::DEFAULT_FALLBACK_SCAN_CAP,
            tier_exact: constants::DEFAULT_TIER_EXACT,
            tier_high: constants::DEFAULT_TIER_HIGH,
            tier_medium: constants::DEFAULT_TIER_MEDIUM,
            tier_low: constants::DEFAULT_TIER_LOW,
        }
    }
}

impl MatchConfig {
    /// Load configuration: defaults, then `path` if given, then `BOXMATCH_*` env vars.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit_fields = [
            ("fuzzy_threshold", self.fuzzy_threshold),
            ("acceptance_floor", self.acceptance_floor),
            ("year_match_bonus", self.year_match_bonus),
            ("year_penalty_factor", self.year_penalty_factor),
            ("tier_exact", self.tier_exact),
            ("tier_high", self.tier_high),
            ("tier_medium", self.tier_medium),
            ("tier_low", self.tier_low),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }

        if !(self.tier_exact >= self.tier_high
            && self.tier_high >= self.tier_medium
            && self.tier_medium >= self.tier_low)
        {
            return Err(ConfigError::ValidationFailed {
                field: "tier_*".to_string(),
                message: "tier thresholds must be non-increasing from exact to low".to_string(),
            });
        }

        if self.fallback_scan_cap == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "fallback_scan_cap".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if let Some(bad) = self
            .articles
            .iter()
            .find(|a| a.trim().is_empty() || a.split_whitespace().count() != 1)
        {
            return Err(ConfigError::ValidationFailed {
                field: "articles".to_string(),
                message: format!("article {bad:?} must be a single non-empty word"),
            });
        }

        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `BOXMATCH_FUZZY_THRESHOLD`, `BOXMATCH_FALLBACK_SCAN_CAP`, etc.
    fn apply_env_overrides(config: &mut Self) -> Result<(), ConfigError> {
        if let Some(v) = env_value::<f64>("BOXMATCH_FUZZY_THRESHOLD")? {
            config.fuzzy_threshold = v;
        }
        if let Some(v) = env_value::<f64>("BOXMATCH_ACCEPTANCE_FLOOR")? {
            config.acceptance_floor = v;
        }
        if let Some(v) = env_value::<f64>("BOXMATCH_YEAR_PENALTY_FACTOR")? {
            config.year_penalty_factor = v;
        }
        if let Some(v) = env_value::<usize>("BOXMATCH_FALLBACK_SCAN_CAP")? {
            config.fallback_scan_cap = v;
        }
        Ok(())
    }
}

/// Read and parse one env var. Unset is `None`; unparseable is an error.
fn env_value<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: key.to_string(),
                message: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
