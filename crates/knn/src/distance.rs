//! Mixed categorical/numeric/ordinal/text distance between listings.

use carval_market::Condition;

use crate::config::DistanceWeights;
use crate::sample::{CarSample, Profile, QueryInput};

/// Year span used when the dataset provides none.
const FALLBACK_YEAR_SPAN: f64 = 20.0;

/// Normalizer for year differences: `max(1, max_year - min_year)` over the
/// usable records, or 20 when there are none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearRange {
    span: f64,
}

impl YearRange {
    /// Computes the span over the records of `samples` with a usable price.
    ///
    /// Unpriced records are skipped here, so a raw dataset can be passed.
    pub fn from_samples<'a>(samples: impl IntoIterator<Item = &'a CarSample>) -> Self {
        let bounds = samples
            .into_iter()
            .filter(|s| s.has_usable_price())
            .fold(None, |acc: Option<(i32, i32)>, s| match acc {
                None => Some((s.year, s.year)),
                Some((lo, hi)) => Some((lo.min(s.year), hi.max(s.year))),
            });
        let span = match bounds {
            Some((lo, hi)) => (f64::from(hi) - f64::from(lo)).max(1.0),
            None => FALLBACK_YEAR_SPAN,
        };
        Self { span }
    }

    /// Returns the span in years (always >= 1).
    pub fn span(&self) -> f64 {
        self.span
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            span: FALLBACK_YEAR_SPAN,
        }
    }
}

/// Distance from `query` to `candidate`.
///
/// Terms whose field is absent on either side contribute nothing. The
/// candidate's price is ignored.
pub fn distance(
    query: &QueryInput,
    candidate: &CarSample,
    year_range: YearRange,
    weights: &DistanceWeights,
) -> f64 {
    profile_distance(
        &Profile::from_query(query),
        &Profile::from_sample(candidate),
        year_range,
        weights,
    )
}

/// Sums the weighted terms:
///
/// ```text
/// make        w · [a ≠ b]
/// model       w · [a ≠ b]
/// fuel        w · [a ≠ b]
/// year        w · |Δyear| / span
/// condition   w · |Δordinal| / 5
/// description w · (1 − cosine)
/// ```
pub(crate) fn profile_distance(
    q: &Profile,
    c: &Profile,
    year_range: YearRange,
    weights: &DistanceWeights,
) -> f64 {
    let mut d = 0.0;

    d += mismatch(q.make.as_deref(), c.make.as_deref(), weights.make);
    d += mismatch(q.model.as_deref(), c.model.as_deref(), weights.model);
    d += mismatch(q.fuel.as_deref(), c.fuel.as_deref(), weights.fuel);

    if let (Some(yq), Some(yc)) = (q.year, c.year) {
        let dy = (f64::from(yq) - f64::from(yc)).abs();
        d += weights.year * dy / year_range.span();
    }

    let dc = f64::from(q.condition.abs_diff(c.condition));
    d += weights.condition * dc / f64::from(Condition::MAX_ORDINAL);

    if let (Some(dq), Some(dcand)) = (&q.description, &c.description) {
        d += weights.description * (1.0 - dq.cosine(dcand));
    }

    d
}

#[inline]
fn mismatch(a: Option<&str>, b: Option<&str>, weight: f64) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) if a != b => weight,
        _ => 0.0,
    }
}
