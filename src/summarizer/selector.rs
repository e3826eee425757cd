//! Top-k sentence selection.

use std::cmp::Ordering;

use crate::types::ScoredSentence;

/// Selects the `k` highest-scoring sentences, in rank order.
///
/// The sort is stable over the document-ordered input, so equal scores keep
/// their document order — the crate's documented tiebreak. Fewer than `k`
/// eligible sentences returns all of them; `k = 0` returns none. Never an
/// error.
#[derive(Debug, Clone, Copy)]
pub struct TopKSelector {
    k: usize,
}

impl TopKSelector {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Rank `scored` by descending score and keep the first `k`.
    pub fn select(&self, mut scored: Vec<ScoredSentence>) -> Vec<ScoredSentence> {
        // Scores are finite by construction; treat any non-comparable pair
        // as equal rather than panicking.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(self.k);
        scored
    }
}
