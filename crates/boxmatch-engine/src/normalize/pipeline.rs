//! The normalization pipeline.
//!
//! 1. Trim, fold diacritics, lowercase.
//! 2. Strip a trailing "(YYYY)" and keep it as a year hint.
//! 3. Strip punctuation; subtitle separators become spaces, everything else
//!    is deleted in place ("spider-man" -> "spiderman").
//! 4. Numeral canonicalization (when enabled).
//! 5. Article-insensitive variant.
//! 6. Primary-title variant: release qualifiers such as "(Re-release)" or
//!    "[IMAX]" are dropped, then the text before the last subtitle separator.

use std::sync::LazyLock;

use boxmatch_core::{MatchConfig, TitleError};
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::numerals::canonicalize_numerals;
use super::types::{NormalizedTitle, Transform};

/// Trailing parenthetical year, e.g. "Dune (2021)".
static TRAILING_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(([0-9]{4})\)\s*$").unwrap());

/// Parenthetical or bracketed release qualifier, e.g. "(50th Anniversary)".
static QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:\([^)]*\)|\[[^\]]*\])").unwrap());

/// Normalize a raw title into its canonical variants.
///
/// Returns between one and four variants. A title that no step changes,
/// such as "Dune", keeps only its `Full` form.
///
/// Pure and deterministic for a given `(title, config)`.
pub fn normalize(title: &str, config: &MatchConfig) -> Result<NormalizedTitle, TitleError> {
    let raw = title.trim();
    if raw.is_empty() {
        return Err(TitleError::Empty {
            raw: title.to_string(),
        });
    }

    let folded = fold(raw);
    let (body, year_hint) = strip_trailing_year(&folded);

    let full = clean(body);
    if full.is_empty() {
        return Err(TitleError::NoAlphanumeric {
            raw: raw.to_string(),
        });
    }

    let mut normalized = NormalizedTitle::new(raw, full.clone(), year_hint);

    let numerals = numeral_step(full, config);
    normalized.push_variant(numerals.clone(), Transform::Numerals);
    normalized.push_variant(
        strip_article(&numerals, &config.articles).to_string(),
        Transform::ArticleStripped,
    );

    if config.split_subtitles {
        if let Some(primary) = primary_source(body) {
            let primary = numeral_step(clean(&primary), config);
            normalized.push_variant(
                strip_article(&primary, &config.articles).to_string(),
                Transform::SubtitleDropped,
            );
        }
    }

    Ok(normalized)
}

fn numeral_step(text: String, config: &MatchConfig) -> String {
    if config.convert_numerals {
        canonicalize_numerals(&text)
    } else {
        text
    }
}

/// NFKD-decompose, drop combining marks, lowercase.
fn fold(text: &str) -> String {
    text.nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Remove a trailing "(YYYY)". A title that is nothing but a year keeps it.
fn strip_trailing_year(text: &str) -> (&str, Option<u16>) {
    let Some(caps) = TRAILING_YEAR.captures(text) else {
        return (text, None);
    };
    let (Some(whole), Some(year)) = (caps.get(0), caps.get(1)) else {
        return (text, None);
    };
    let body = &text[..whole.start()];
    if !body.chars().any(char::is_alphanumeric) {
        return (text, None);
    }
    (body, year.as_str().parse().ok())
}

/// A subtitle separator: a colon not between digits ("3:10" is a title),
/// an en or em dash, a pipe, or a hyphen with whitespace on both sides.
fn is_separator(prev: Option<char>, ch: char, next: Option<char>) -> bool {
    match ch {
        ':' => {
            let digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
            !(digit(prev) && digit(next))
        }
        '\u{2013}' | '\u{2014}' | '|' => true,
        '-' => prev.is_some_and(char::is_whitespace) && next.is_some_and(char::is_whitespace),
        _ => false,
    }
}

/// Keep alphanumerics, turn whitespace and separators into single spaces,
/// delete all other punctuation.
fn clean(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else if ch.is_whitespace() {
            pending_space = true;
        } else {
            let prev = i.checked_sub(1).map(|j| chars[j]);
            if is_separator(prev, ch, chars.get(i + 1).copied()) {
                pending_space = true;
            }
        }
    }
    out
}

/// Text before the last separator that has real content on both sides.
fn primary_title(text: &str) -> Option<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    for (k, &(pos, ch)) in chars.iter().enumerate() {
        let prev = k.checked_sub(1).map(|j| chars[j].1);
        let next = chars.get(k + 1).map(|c| c.1);
        if is_separator(prev, ch, next) {
            spans.push((pos, pos + ch.len_utf8()));
        }
    }

    spans.into_iter().rev().find_map(|(start, end)| {
        let head = &text[..start];
        let tail = &text[end..];
        let has_content = |s: &str| s.chars().any(char::is_alphanumeric);
        (has_content(head) && has_content(tail)).then_some(head)
    })
}

/// The body with release qualifiers removed, cut at its last subtitle
/// separator. `None` when neither changes anything.
fn primary_source(body: &str) -> Option<String> {
    let unqualified = QUALIFIER.replace_all(body, "");
    if let Some(head) = primary_title(&unqualified) {
        return Some(head.to_string());
    }
    let rest = unqualified.trim();
    (rest != body.trim() && rest.chars().any(char::is_alphanumeric)).then(|| rest.to_string())
}

/// Drop one leading article. A title that is only an article keeps it.
fn strip_article<'a>(text: &'a str, articles: &[String]) -> &'a str {
    match text.split_once(' ') {
        Some((first, rest))
            if articles
                .iter()
                .any(|a| a.chars().flat_map(char::to_lowercase).eq(first.chars())) =>
        {
            rest
        }
        _ => text,
    }
}
