//! Term-frequency vectors and cosine similarity.

use std::collections::HashMap;

use crate::tokenize::tokenize;

/// Term-frequency vector of a tokenized text.
///
/// Counts are integers, so dot products and norms are exact and the
/// similarity does not depend on map iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermVector {
    counts: HashMap<String, u64>,
    norm_sq: u64,
}

impl TermVector {
    /// Builds the vector for `text` using [`tokenize`].
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    /// Builds the vector from already-tokenized input.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for t in tokens {
            *counts.entry(t.into()).or_insert(0) += 1;
        }
        let norm_sq = counts.values().map(|&c| c * c).sum();
        Self { counts, norm_sq }
    }

    /// Returns `true` if no usable tokens were found.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Frequency of `term`, `0` if absent.
    pub fn count(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Cosine similarity with `other`, in `[0, 1]`.
    pub fn cosine(&self, other: &TermVector) -> f64 {
        if self.norm_sq == 0 || other.norm_sq == 0 {
            return 0.0;
        }
        // Iterate the smaller map.
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        let dot: u64 = small
            .counts
            .iter()
            .map(|(term, &c)| c * large.count(term))
            .sum();
        if dot == 0 {
            return 0.0;
        }
        let denom = (self.norm_sq as f64 * other.norm_sq as f64).sqrt();
        (dot as f64 / denom).clamp(0.0, 1.0)
    }
}
