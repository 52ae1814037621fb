//! Error types for the carval-market crate.

/// Error type for market model validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarketError {
    /// Returned when no age brackets are configured.
    #[error("at least one age bracket is required")]
    EmptyAgeBrackets,

    /// Returned when bracket upper bounds are not strictly increasing.
    #[error("age bracket {index} has max_age {max_age}, not greater than the previous bracket")]
    UnorderedAgeBrackets {
        /// Index of the offending bracket.
        index: usize,
        /// Its upper bound.
        max_age: u32,
    },

    /// Returned when the last bracket is bounded or an earlier one is open-ended.
    #[error("exactly the last age bracket must be open-ended (max_age = None)")]
    OpenBracketNotLast,

    /// Returned when a multiplier is non-finite or non-positive.
    #[error("{what} multiplier must be finite and positive, got {value}")]
    InvalidMultiplier {
        /// Which multiplier was invalid.
        what: String,
        /// The invalid value.
        value: f64,
    },

    /// Returned when the price band is empty, inverted or non-finite.
    #[error("price band must satisfy 0 < min <= max, got [{min}, {max}]")]
    InvalidPriceBand {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}
