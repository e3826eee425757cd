//! The summarization engine.
//!
//! Wires the text mechanics and scoring stages into one pass:
//! strip markup → split sentences → build frequency table → score →
//! select top-k → join. The engine is pure and total over UTF-8 input —
//! degenerate inputs produce empty or pass-through output, never an error.

pub mod selector;

pub use selector::TopKSelector;

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::nlp::{split_sentences, strip_tags, FrequencyAnalyzer, StopwordFilter};
use crate::scoring::{SentenceScorer, StandardScorer, StrongScorer};
use crate::types::{Mode, ScoredSentence};

/// Enter a tracing span for an engine stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

/// Summarize with the normal (frequency-sum) algorithm.
///
/// Selects the `sentence_count` highest-scoring sentences; the reference
/// default is 3.
pub fn summarize_normal(text: &str, sentence_count: usize) -> String {
    Summarizer::new(Mode::Normal)
        .with_sentence_count(sentence_count)
        .summarize(text)
}

/// Summarize with the strong (length-weighted) algorithm.
///
/// Selects the `sentence_count` highest-scoring eligible sentences; the
/// reference default is 1. A single-sentence input is returned unchanged
/// (after markup stripping).
pub fn summarize_strong(text: &str, sentence_count: usize) -> String {
    Summarizer::new(Mode::Strong)
        .with_sentence_count(sentence_count)
        .summarize(text)
}

/// Configurable extractive summarizer.
///
/// Construct with [`Summarizer::new`] and adjust with the `with_*` builders.
/// Each call to [`summarize`](Self::summarize) is independent: the frequency
/// table is built from scratch per input and no state is carried across
/// calls, so a `Summarizer` can be shared freely between threads.
#[derive(Debug)]
pub struct Summarizer {
    mode: Mode,
    sentence_count: usize,
    analyzer: FrequencyAnalyzer,
    scorer: Box<dyn SentenceScorer>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(Mode::Normal)
    }
}

impl Summarizer {
    /// A summarizer for `mode` with that mode's default sentence count
    /// (3 for normal, 1 for strong).
    pub fn new(mode: Mode) -> Self {
        let scorer: Box<dyn SentenceScorer> = match mode {
            Mode::Normal => Box::new(StandardScorer),
            Mode::Strong => Box::new(StrongScorer::new()),
        };
        Self {
            mode,
            sentence_count: mode.default_sentence_count(),
            analyzer: FrequencyAnalyzer::new(),
            scorer,
        }
    }

    /// Override how many sentences the summary keeps. Zero yields an empty
    /// summary.
    pub fn with_sentence_count(mut self, sentence_count: usize) -> Self {
        self.sentence_count = sentence_count;
        self
    }

    /// Exclude stopwords from the frequency table.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.analyzer = FrequencyAnalyzer::with_stopwords(stopwords);
        self
    }

    /// Replace the scoring algorithm. The mode's degenerate-input behavior
    /// (the strong-mode single-sentence pass-through) is kept.
    pub fn with_scorer(mut self, scorer: Box<dyn SentenceScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Produce the summary for `text`.
    ///
    /// The selected sentences are joined with a single space in rank order
    /// (descending score), not document order. Equal scores keep document
    /// order: the sort is stable over the document-ordered sentence list.
    pub fn summarize(&self, text: &str) -> String {
        trace_stage!("clean");
        let cleaned = strip_tags(text);

        trace_stage!("split");
        let sentences = split_sentences(&cleaned);

        // An already-atomic input has nothing to rank in strong mode;
        // scoring it would either echo it back or drop it to nothing.
        if self.mode == Mode::Strong && sentences.len() <= 1 {
            return cleaned.into_owned();
        }

        let scored = self.score_sentences(&cleaned, sentences);

        trace_stage!("select");
        let selected = TopKSelector::new(self.sentence_count).select(scored);

        selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Score every eligible sentence of `text`, in document order.
    ///
    /// Repeated sentences appear once, at their first position; the
    /// frequency table still counts every occurrence of their words.
    ///
    /// Exposes the engine's intermediate view for callers that want the
    /// scores rather than the joined summary.
    pub fn rank(&self, text: &str) -> Vec<ScoredSentence> {
        let cleaned = strip_tags(text);
        let sentences = split_sentences(&cleaned);
        self.score_sentences(&cleaned, sentences)
    }

    fn score_sentences(&self, cleaned: &str, sentences: Vec<String>) -> Vec<ScoredSentence> {
        // Scores are keyed by sentence text: a sentence that repeats in the
        // document is scored once and can fill at most one summary slot.
        // First occurrence wins the position.
        let mut seen = FxHashSet::default();
        let sentences: Vec<String> = sentences
            .into_iter()
            .filter(|s| seen.insert(s.clone()))
            .collect();

        trace_stage!("frequency");
        let freq = self.analyzer.analyze(cleaned);

        trace_stage!("score");
        let scores: Vec<Option<f64>> = sentences
            .par_iter()
            .map(|s| self.scorer.score(s, &freq))
            .collect();

        sentences
            .into_iter()
            .zip(scores)
            .filter_map(|(text, score)| score.map(|score| ScoredSentence { text, score }))
            .collect()
    }
}
