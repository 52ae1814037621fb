//! Inverse-distance weighted price aggregation.

/// Inverse-distance weighted mean of `(distance, price)` pairs.
///
/// Each weight is `1 / (epsilon + distance)`, so exact matches dominate
/// without producing infinite weights. Returns `None` when the summed weight
/// is zero or non-finite (empty input).
pub(crate) fn inverse_distance_mean(
    pairs: impl IntoIterator<Item = (f64, f64)>,
    epsilon: f64,
) -> Option<f64> {
    let mut weighted = 0.0;
    let mut total = 0.0;
    for (d, price) in pairs {
        let w = 1.0 / (epsilon + d);
        weighted += w * price;
        total += w;
    }
    if total > 0.0 && total.is_finite() {
        Some(weighted / total)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_empty_is_none() {
        assert_eq!(inverse_distance_mean(std::iter::empty(), 1e-6), None);
    }

    #[test]
    fn test_single_exact_match() {
        let got = inverse_distance_mean([(0.0, 3_100_000.0)], 1e-6).unwrap();
        assert_abs_diff_eq!(got, 3_100_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hand_computed() {
        // weights 1/1 and 1/3 -> (100 + 200/3) / (4/3) = 125
        let got = inverse_distance_mean([(1.0, 100.0), (3.0, 200.0)], 1e-12).unwrap();
        assert_abs_diff_eq!(got, 125.0, epsilon = 1e-9);
    }

    #[test]
    fn test_equal_distances_is_plain_mean() {
        let got = inverse_distance_mean([(0.5, 10.0), (0.5, 20.0), (0.5, 30.0)], 1e-6).unwrap();
        assert_abs_diff_eq!(got, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_exact_match_dominates() {
        let got = inverse_distance_mean([(0.0, 1_000.0), (1.0, 9_000.0)], 1e-6).unwrap();
        assert!((got - 1_000.0).abs() < 0.01, "got {got}");
    }
}
