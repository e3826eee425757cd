//! Strong ("aggressive" mode) scorer.

use super::{frequency_sum, SentenceScorer};
use crate::nlp::tokenizer::word_count;
use crate::nlp::FrequencyTable;

/// Minimum tokens a sentence needs to be eligible in strong mode.
pub const DEFAULT_MIN_TOKEN_COUNT: usize = 3;

/// Length-weighted, character-normalized scoring.
///
/// `score = freq_sum * token_count / max(char_count, 1)`
///
/// The token-count factor rewards information-dense sentences; dividing by
/// character count favors a high words-per-character ratio, i.e. punchy,
/// low-filler sentences. Sentences with fewer than
/// [`min_token_count`](Self::with_min_token_count) tokens are ineligible and
/// can never be selected. Character count is Unicode scalar values, floored
/// at 1 so a zero-length sentence cannot divide by zero.
#[derive(Debug, Clone, Copy)]
pub struct StrongScorer {
    min_token_count: usize,
}

impl Default for StrongScorer {
    fn default() -> Self {
        Self {
            min_token_count: DEFAULT_MIN_TOKEN_COUNT,
        }
    }
}

impl StrongScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the eligibility threshold.
    pub fn with_min_token_count(mut self, min_token_count: usize) -> Self {
        self.min_token_count = min_token_count;
        self
    }
}

impl SentenceScorer for StrongScorer {
    fn score(&self, sentence: &str, freq: &FrequencyTable) -> Option<f64> {
        let tokens = word_count(sentence);
        if tokens < self.min_token_count {
            return None;
        }
        let chars = sentence.chars().count().max(1);
        let sum = frequency_sum(sentence, freq) as f64;
        Some(sum * tokens as f64 / chars as f64)
    }
}
