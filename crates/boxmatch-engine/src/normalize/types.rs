//! Canonical title forms.

use boxmatch_core::constants::MAX_VARIANTS;
use boxmatch_core::types::collections::SmallVec4;
use serde::Serialize;

/// Which pipeline step produced a variant, least destructive first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Transform {
    /// Lowercased, diacritics, trailing year and punctuation stripped.
    Full,
    /// Number words and Roman numerals rewritten as digits.
    Numerals,
    /// Leading article dropped.
    ArticleStripped,
    /// Primary title only; the last subtitle is dropped.
    SubtitleDropped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub canonical: String,
    pub transform: Transform,
}

/// Ordered canonical variants of one title, most destructive last.
///
/// The first variant is always the `Full` form. Later variants are only
/// present when they differ from every earlier one, so a plain title such
/// as "Dune" carries a single variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedTitle {
    raw: String,
    variants: SmallVec4<Variant>,
    year_hint: Option<u16>,
}

impl NormalizedTitle {
    pub(crate) fn new(raw: &str, full: String, year_hint: Option<u16>) -> Self {
        let mut variants = SmallVec4::new();
        variants.push(Variant {
            canonical: full,
            transform: Transform::Full,
        });
        Self {
            raw: raw.to_string(),
            variants,
            year_hint,
        }
    }

    /// Append a variant unless an identical canonical string is already present.
    pub(crate) fn push_variant(&mut self, canonical: String, transform: Transform) {
        if canonical.is_empty()
            || self.variants.len() >= MAX_VARIANTS
            || self.variants.iter().any(|v| v.canonical == canonical)
        {
            return;
        }
        self.variants.push(Variant {
            canonical,
            transform,
        });
    }

    /// The trimmed input title, case preserved.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The `Full` canonical form.
    pub fn canonical(&self) -> &str {
        &self.variants[0].canonical
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Year captured from a trailing "(YYYY)" in the raw title.
    pub fn year_hint(&self) -> Option<u16> {
        self.year_hint
    }

    pub fn form(&self, transform: Transform) -> Option<&str> {
        self.variants
            .iter()
            .find(|v| v.transform == transform)
            .map(|v| v.canonical.as_str())
    }

    /// Numeral-canonical form, or the full form when numerals changed nothing.
    pub fn numeral_form(&self) -> &str {
        self.form(Transform::Numerals)
            .unwrap_or_else(|| self.canonical())
    }

    /// Numeral-canonical form without a leading article.
    pub fn bare_form(&self) -> &str {
        self.form(Transform::ArticleStripped)
            .unwrap_or_else(|| self.numeral_form())
    }

    /// Primary title with the subtitle dropped, when the title has one.
    pub fn primary_form(&self) -> Option<&str> {
        self.form(Transform::SubtitleDropped)
    }

    /// Every canonical string, in variant order. These are the lookup keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.canonical.as_str())
    }
}
