//! Word tokenization.
//!
//! Words are maximal runs of word characters (`\w+`): Unicode letters,
//! digits, marks, and the underscore. The `regex` crate's `\w` is
//! Unicode-aware by default, so non-Latin scripts tokenize the same way
//! Latin text does.

use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Iterate over the word tokens of `text`, in order, casing preserved.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}

/// Number of word tokens in `text`.
pub fn word_count(text: &str) -> usize {
    words(text).count()
}
