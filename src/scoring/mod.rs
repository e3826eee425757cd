//! Sentence scoring algorithms.
//!
//! Two variants share the frequency core:
//! - [`StandardScorer`] — plain frequency sum, every sentence eligible.
//! - [`StrongScorer`] — frequency sum weighted by token count and
//!   normalized by character length, short sentences ineligible.

pub mod standard;
pub mod strong;

pub use standard::StandardScorer;
pub use strong::StrongScorer;

use crate::nlp::FrequencyTable;

/// A scoring algorithm that assigns an importance score to one sentence.
///
/// Returns `None` when the sentence is ineligible for selection (the strong
/// variant drops very short sentences entirely). Implementations must be
/// pure: same sentence and table, same result.
pub trait SentenceScorer: std::fmt::Debug + Send + Sync {
    fn score(&self, sentence: &str, freq: &FrequencyTable) -> Option<f64>;
}

/// Sum of table frequencies for the sentence's tokens, looked up lowercase.
///
/// Shared by both scorers: tokenization preserves the sentence's casing,
/// the lookup does not.
pub(crate) fn frequency_sum(sentence: &str, freq: &FrequencyTable) -> u64 {
    crate::nlp::tokenizer::words(sentence)
        .map(|w| u64::from(freq.get(&w.to_lowercase())))
        .sum()
}
