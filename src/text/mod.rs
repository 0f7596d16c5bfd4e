//! Case- and diacritic-insensitive text normalization.
//!
//! Both sides of a match (the question and the entity fields) go through the
//! same [`normalize`] function, so comparison is symmetric.

use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize text into lowercase tokens.
///
/// Decomposes to NFD and drops combining marks (so "márge" and "marge"
/// tokenize identically), lowercases, and splits on non-alphanumeric
/// boundaries. Empty tokens are dropped; an empty input yields no tokens.
pub fn normalize(text: &str) -> Vec<String> {
    let folded: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();

    folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .collect()
}

/// Collect the distinct normalized tokens of several text fields.
pub fn token_set<'a, I>(fields: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = HashSet::new();
    for field in fields {
        tokens.extend(normalize(field));
    }
    tokens
}
