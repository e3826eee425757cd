//! Sentence segmentation.
//!
//! A sentence boundary is a terminator (`.`, `!`, `?`) immediately followed
//! by whitespace. The whitespace run is consumed; the terminator stays with
//! its sentence. Abbreviations, decimal points, and quoted punctuation are
//! not special-cased.

/// Sentence-terminating punctuation.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split cleaned text into sentences in document order.
///
/// Input with no boundary yields a single sentence (the whole string), so
/// the result is never empty; empty input yields `vec![""]`. A trailing
/// whitespace run after the last terminator is consumed without producing
/// an empty trailing sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);
        if TERMINATORS.contains(&ch) && chars.peek().is_some_and(|c| c.is_whitespace()) {
            sentences.push(std::mem::take(&mut current));
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
        }
    }

    if !current.is_empty() || sentences.is_empty() {
        sentences.push(current);
    }
    sentences
}
