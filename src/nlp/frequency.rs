//! Word-frequency analysis.
//!
//! The frequency table is the importance signal for both scoring modes:
//! a word that occurs often across the document is treated as topically
//! central, and sentences containing it score higher. The table is built
//! once per summarization call over the whole cleaned text, never per
//! sentence.

use rustc_hash::FxHashMap;

use super::stopwords::StopwordFilter;
use super::tokenizer::words;

/// Occurrence counts for the lowercase word tokens of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u32>,
}

impl FrequencyTable {
    /// Count for `word`, 0 if absent. Callers must pass a lowercase token.
    pub fn get(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted word occurrences.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }
}

/// Builds a [`FrequencyTable`] from cleaned text.
///
/// The default analyzer counts every word. An optional stopword filter can
/// exclude function words from the table, which keeps them from inflating
/// sentence scores; note that with a filter active the table no longer
/// counts *all* occurrences, only non-stopword ones.
#[derive(Debug, Clone, Default)]
pub struct FrequencyAnalyzer {
    stopwords: StopwordFilter,
}

impl FrequencyAnalyzer {
    /// Analyzer that counts every word (no stopword filtering).
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer that skips words matched by `stopwords`.
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Tokenize the whole text, lowercase, and count.
    ///
    /// The text is lowercased before tokenization so the table keys match
    /// the lowercase lookups the scorers perform.
    pub fn analyze(&self, text: &str) -> FrequencyTable {
        let lowered = text.to_lowercase();
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for word in words(&lowered) {
            if self.stopwords.is_stopword(word) {
                continue;
            }
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
        FrequencyTable { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_are_case_insensitive() {
        let table = FrequencyAnalyzer::new().analyze("Cat cat CAT.");
        assert_eq!(table.get("cat"), 3);
        assert_eq!(table.get("Cat"), 0); // lookups are lowercase-keyed
    }

    #[test]
    fn test_total_equals_occurrences() {
        let table = FrequencyAnalyzer::new().analyze("a b a c a b");
        assert_eq!(table.get("a"), 3);
        assert_eq!(table.get("b"), 2);
        assert_eq!(table.get("c"), 1);
        assert_eq!(table.total(), 6);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_empty_text() {
        let table = FrequencyAnalyzer::new().analyze("");
        assert!(table.is_empty());
        assert_eq!(table.get("anything"), 0);
    }

    #[test]
    fn test_punctuation_is_not_counted() {
        let table = FrequencyAnalyzer::new().analyze("wow!!! wow... (wow)");
        assert_eq!(table.get("wow"), 3);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unicode_words_counted() {
        let table = FrequencyAnalyzer::new().analyze("Текст и ещё текст");
        assert_eq!(table.get("текст"), 2);
        assert_eq!(table.get("ещё"), 1);
    }

    #[test]
    fn test_stopwords_excluded_when_filtered() {
        let filter = StopwordFilter::from_list(&["the", "is"]);
        let table = FrequencyAnalyzer::with_stopwords(filter).analyze("The cat is the best");
        assert_eq!(table.get("the"), 0);
        assert_eq!(table.get("is"), 0);
        assert_eq!(table.get("cat"), 1);
        assert_eq!(table.get("best"), 1);
    }
}
