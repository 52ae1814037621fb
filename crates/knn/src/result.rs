//! Output types for price suggestion queries.

use serde::Serialize;

use crate::sample::CarSample;

/// Confidence reported with every produced suggestion.
pub const SUGGESTION_CONFIDENCE: f64 = 0.85;

/// A comparable record selected as a neighbor, with its distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    #[serde(flatten)]
    sample: CarSample,
    distance: f64,
    /// Position in the caller's dataset.
    #[serde(skip)]
    index: usize,
}

impl Neighbor {
    pub(crate) fn new(index: usize, sample: CarSample, distance: f64) -> Self {
        Self {
            sample,
            distance,
            index,
        }
    }

    /// The comparable record.
    pub fn sample(&self) -> &CarSample {
        &self.sample
    }

    /// Distance to the query (>= 0).
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Index of the record in the dataset passed to the query.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Result of a price suggestion query.
///
/// Either a suggestion with its neighbors (closest first) and confidence
/// [`SUGGESTION_CONFIDENCE`], or [`empty`](Self::empty) when the query or
/// dataset cannot support one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnnResult {
    suggested_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_price: Option<f64>,
    neighbors: Vec<Neighbor>,
    confidence: f64,
}

impl KnnResult {
    /// The "insufficient data" result: no price, no neighbors, confidence 0.
    pub fn empty() -> Self {
        Self {
            suggested_price: None,
            base_price: None,
            neighbors: Vec::new(),
            confidence: 0.0,
        }
    }

    pub(crate) fn suggestion(price: f64, base_price: f64, neighbors: Vec<Neighbor>) -> Self {
        Self {
            suggested_price: Some(price),
            base_price: Some(base_price),
            neighbors,
            confidence: SUGGESTION_CONFIDENCE,
        }
    }

    /// Market-adjusted, clamped, rounded price.
    pub fn suggested_price(&self) -> Option<f64> {
        self.suggested_price
    }

    /// Inverse-distance weighted neighbor price before market adjustment.
    pub fn base_price(&self) -> Option<f64> {
        self.base_price
    }

    /// Neighbors used, sorted by ascending distance.
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    /// Confidence in `[0, 1]`.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Returns `true` if a price was suggested.
    pub fn has_suggestion(&self) -> bool {
        self.suggested_price.is_some()
    }
}
