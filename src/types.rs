//! Core public types shared across the crate.

use serde::{Deserialize, Serialize};

/// Compression mode — which scoring algorithm the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Plain frequency-sum scoring, multi-sentence output.
    Normal,
    /// Length-weighted scoring, aggressive single-sentence output.
    Strong,
}

impl Mode {
    /// Parse a mode name leniently. Unknown values fall back to `Normal`.
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "strong" | "strong_compression" | "aggressive" => Mode::Strong,
            _ => Mode::Normal,
        }
    }

    /// The number of sentences selected when the caller does not override it.
    pub fn default_sentence_count(&self) -> usize {
        match self {
            Mode::Normal => 3,
            Mode::Strong => 1,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Normal
    }
}

impl std::str::FromStr for Mode {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Mode::parse(value))
    }
}

/// A sentence paired with the importance score the engine assigned to it.
///
/// The text keeps its original casing and terminal punctuation; only the
/// scoring pass works on a lowercase view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// The sentence, verbatim from the cleaned input.
    pub text: String,
    /// Importance score. Semantics depend on the mode that produced it.
    pub score: f64,
}

impl ScoredSentence {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}
