//! Error types for the carval-knn crate.

use carval_market::MarketError;

/// Error type for configuration problems in the carval-knn crate.
///
/// Missing query fields or an unusable dataset are not errors; they yield
/// [`KnnResult::empty`](crate::KnnResult::empty).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when the rounding step is non-finite or non-positive.
    #[error("round step must be finite and positive, got {step}")]
    InvalidRoundStep {
        /// The invalid step.
        step: f64,
    },

    /// Returned when no multiple of the rounding step lies in the price band.
    #[error("round step {step} has no multiple in the price band [{min}, {max}]")]
    RoundStepExceedsBand {
        /// The rounding step.
        step: f64,
        /// Lower bound of the band.
        min: f64,
        /// Upper bound of the band.
        max: f64,
    },

    /// Returned when epsilon is non-finite or non-positive.
    #[error("epsilon must be finite and positive, got {epsilon}")]
    InvalidEpsilon {
        /// The invalid epsilon value.
        epsilon: f64,
    },

    /// Returned when a distance weight is non-finite or negative.
    #[error("{name} weight must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Name of the distance term.
        name: &'static str,
        /// The invalid weight.
        value: f64,
    },

    /// Wraps an invalid market-adjustment model.
    #[error("invalid market model: {0}")]
    Market(#[from] MarketError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_round_step() {
        let e = KnnError::InvalidRoundStep { step: 0.0 };
        assert_eq!(e.to_string(), "round step must be finite and positive, got 0");
    }

    #[test]
    fn error_round_step_exceeds_band() {
        let e = KnnError::RoundStepExceedsBand {
            step: 5_000_000.0,
            min: 2_700_000.0,
            max: 4_700_000.0,
        };
        assert_eq!(
            e.to_string(),
            "round step 5000000 has no multiple in the price band [2700000, 4700000]"
        );
    }

    #[test]
    fn error_invalid_epsilon() {
        let e = KnnError::InvalidEpsilon { epsilon: -0.5 };
        assert_eq!(
            e.to_string(),
            "epsilon must be finite and positive, got -0.5"
        );
    }

    #[test]
    fn error_invalid_weight() {
        let e = KnnError::InvalidWeight {
            name: "year",
            value: -2.0,
        };
        assert_eq!(
            e.to_string(),
            "year weight must be finite and non-negative, got -2"
        );
    }

    #[test]
    fn error_market_wraps_source() {
        let e: KnnError = MarketError::EmptyAgeBrackets.into();
        assert_eq!(
            e.to_string(),
            "invalid market model: at least one age bracket is required"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<KnnError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<KnnError>();
    }
}
