//! Frequency-based extractive text summarization.
//!
//! `textpress` shortens a document by keeping its most important sentences
//! verbatim. Importance is a word-frequency heuristic: words that occur often
//! across the document are treated as topically central, and sentences are
//! ranked by the frequencies of the words they contain.
//!
//! Two compression modes share the same frequency core:
//!
//! - **Normal** — plain frequency sum per sentence, top 3 by default.
//!   Longer sentences are naturally favored.
//! - **Strong** — frequency sum weighted by token count and normalized by
//!   character length, top 1 by default. Rewards dense, low-filler sentences
//!   and drops very short ones entirely.
//!
//! The engine is pure and total: any UTF-8 string in, a (possibly empty)
//! UTF-8 string out, no errors, no shared state. Surrounding concerns —
//! resolving inline text vs. uploaded documents, remembering which mode a
//! user picked — live in the [`input`] and [`session`] boundary modules and
//! never leak into the engine.
//!
//! # Quick start
//!
//! ```
//! use textpress::{summarize_normal, summarize_strong};
//!
//! let text = "Rust is fast. Rust is safe. Speed and safety matter. Hi.";
//! let short = summarize_normal(text, 2);
//! assert!(!short.is_empty());
//!
//! let shorter = summarize_strong(text, 1);
//! assert!(!shorter.is_empty());
//! ```

pub mod input;
pub mod nlp;
pub mod scoring;
pub mod session;
pub mod summarizer;
pub mod types;

pub use input::{resolve, MessagePayload, ResolvedInput};
pub use session::{InMemorySessionStore, SessionStore};
pub use summarizer::{summarize_normal, summarize_strong, Summarizer};
pub use types::{Mode, ScoredSentence};
