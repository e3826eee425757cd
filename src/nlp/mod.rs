//! Text mechanics: cleaning, sentence splitting, tokenization,
//! frequency analysis, and stopword filtering.

pub mod cleaner;
pub mod frequency;
pub mod splitter;
pub mod stopwords;
pub mod tokenizer;

pub use cleaner::strip_tags;
pub use frequency::{FrequencyAnalyzer, FrequencyTable};
pub use splitter::split_sentences;
pub use stopwords::StopwordFilter;
