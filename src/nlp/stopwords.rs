//! Optional stopword filtering for the frequency analyzer.
//!
//! Backed by the `stop-words` crate. Filtering is *off* by default: the
//! reference scoring counts every word, and the filter exists for callers
//! who want function words kept out of the importance signal.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of words excluded from frequency counting.
///
/// Words are stored lowercase; [`is_stopword`](Self::is_stopword) expects
/// the already-lowercased tokens the analyzer produces.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// An empty filter — nothing is treated as a stopword.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A filter loaded with the standard list for `language`.
    ///
    /// Accepts ISO codes or English names (`"en"`, `"russian"`, ...);
    /// unknown languages fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };
        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// A filter built from a custom word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add extra words to the filter.
    pub fn add_words(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Whether `word` (lowercase) is filtered out.
    pub fn is_stopword(&self, word: &str) -> bool {
        !self.stopwords.is_empty() && self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
