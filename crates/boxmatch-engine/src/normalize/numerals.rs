//! Number word and Roman numeral canonicalization.
//!
//! Tokens 1-20 written as words ("four") or Roman numerals ("iv") are
//! rewritten as digits so "Part 4", "Part Four" and "Part IV" agree.

use boxmatch_core::constants::MAX_CANONICAL_NUMERAL;

const WORDS: [&str; MAX_CANONICAL_NUMERAL] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    "twenty",
];

const ROMAN: [&str; MAX_CANONICAL_NUMERAL] = [
    "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii", "xiii", "xiv", "xv",
    "xvi", "xvii", "xviii", "xix", "xx",
];

/// Numeric value of a lowercase word or Roman numeral token.
///
/// A lone "i" reads as the pronoun everywhere except as the trailing token
/// of a multi-word title ("Rocky I").
pub fn numeral_value(token: &str, trailing: bool, token_count: usize) -> Option<usize> {
    if let Some(pos) = WORDS.iter().position(|w| *w == token) {
        return Some(pos + 1);
    }
    if token == "i" && !(trailing && token_count > 1) {
        return None;
    }
    ROMAN.iter().position(|r| *r == token).map(|pos| pos + 1)
}

/// Rewrite every numeral token of a canonical (single-spaced) string as digits.
pub fn canonicalize_numerals(text: &str) -> String {
    let tokens: Vec<&str> = text.split(' ').collect();
    let count = tokens.len();
    let rewritten: Vec<String> = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| match numeral_value(token, i + 1 == count, count) {
            Some(value) => value.to_string(),
            None => (*token).to_string(),
        })
        .collect();
    rewritten.join(" ")
}
