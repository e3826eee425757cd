//! Standard ("normal" mode) scorer.

use super::{frequency_sum, SentenceScorer};
use crate::nlp::FrequencyTable;

/// Plain frequency-sum scoring.
///
/// A sentence's score is the sum of the document-wide frequencies of its
/// tokens. No length normalization, so longer sentences are naturally
/// favored — acceptable for normal compression, which targets a fixed
/// count of representative sentences rather than strict conciseness.
/// Every sentence is eligible, including empty ones (score 0).
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl SentenceScorer for StandardScorer {
    fn score(&self, sentence: &str, freq: &FrequencyTable) -> Option<f64> {
        Some(frequency_sum(sentence, freq) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::FrequencyAnalyzer;

    #[test]
    fn test_score_is_frequency_sum() {
        let freq = FrequencyAnalyzer::new().analyze("cat cat dog");
        // "cat dog" -> 2 + 1
        assert_eq!(StandardScorer.score("cat dog", &freq), Some(3.0));
        // "cat cat dog" -> 2 + 2 + 1
        assert_eq!(StandardScorer.score("cat cat dog", &freq), Some(5.0));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let freq = FrequencyAnalyzer::new().analyze("cat cat");
        assert_eq!(StandardScorer.score("CAT Cat", &freq), Some(4.0));
    }

    #[test]
    fn test_unknown_words_score_zero() {
        let freq = FrequencyAnalyzer::new().analyze("cat");
        assert_eq!(StandardScorer.score("zebra llama", &freq), Some(0.0));
    }

    #[test]
    fn test_empty_sentence_is_eligible() {
        let freq = FrequencyAnalyzer::new().analyze("cat");
        assert_eq!(StandardScorer.score("", &freq), Some(0.0));
    }

    #[test]
    fn test_longer_sentences_score_higher() {
        let freq = FrequencyAnalyzer::new().analyze("word word word word");
        let short = StandardScorer.score("word", &freq).unwrap();
        let long = StandardScorer.score("word word word", &freq).unwrap();
        assert!(long > short);
    }
}
