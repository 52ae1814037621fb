//! Configuration for price suggestion queries.

use carval_market::MarketModel;

use crate::error::KnnError;

/// Per-term weights of the distance metric.
///
/// Defaults: make 1.2, model 1.8, fuel 0.7, year 2.0, condition 1.0,
/// description 0.8.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceWeights {
    /// Penalty for a make mismatch.
    pub make: f64,
    /// Penalty for a model mismatch.
    pub model: f64,
    /// Penalty for a fuel-type mismatch.
    pub fuel: f64,
    /// Scale of the range-normalized year difference.
    pub year: f64,
    /// Scale of the normalized condition difference.
    pub condition: f64,
    /// Scale of the description dissimilarity.
    pub description: f64,
}

impl Default for DistanceWeights {
    fn default() -> Self {
        Self {
            make: 1.2,
            model: 1.8,
            fuel: 0.7,
            year: 2.0,
            condition: 1.0,
            description: 0.8,
        }
    }
}

impl DistanceWeights {
    /// Validates that every weight is finite and non-negative.
    pub fn validate(&self) -> Result<(), KnnError> {
        for (name, value) in [
            ("make", self.make),
            ("model", self.model),
            ("fuel", self.fuel),
            ("year", self.year),
            ("condition", self.condition),
            ("description", self.description),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(KnnError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Configuration for a price suggestion query.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use carval_knn::{DistanceWeights, KnnConfig};
///
/// let config = KnnConfig::new(7)
///     .with_round_step(1_000.0)
///     .with_weights(DistanceWeights { description: 0.0, ..Default::default() });
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KnnConfig {
    /// Requested number of neighbors, clamped to `[1, valid records]`.
    k: usize,
    /// Granularity of the final suggested price.
    round_step: f64,
    /// Added to every distance before inverting it into a weight.
    epsilon: f64,
    weights: DistanceWeights,
    market: MarketModel,
}

impl KnnConfig {
    /// Creates a new configuration with the given k.
    ///
    /// Defaults: `round_step = 50_000`, `epsilon = 1e-6`, default weights and
    /// market model.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            round_step: 50_000.0,
            epsilon: 1e-6,
            weights: DistanceWeights::default(),
            market: MarketModel::default(),
        }
    }

    /// Sets the number of neighbors.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Sets the rounding step of the suggested price.
    pub fn with_round_step(mut self, step: f64) -> Self {
        self.round_step = step;
        self
    }

    /// Sets the inverse-distance epsilon.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the distance weights.
    pub fn with_weights(mut self, weights: DistanceWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the market-adjustment model.
    pub fn with_market(mut self, market: MarketModel) -> Self {
        self.market = market;
        self
    }

    /// Returns the requested number of neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the rounding step.
    pub fn round_step(&self) -> f64 {
        self.round_step
    }

    /// Returns the inverse-distance epsilon.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the distance weights.
    pub fn weights(&self) -> &DistanceWeights {
        &self.weights
    }

    /// Returns the market-adjustment model.
    pub fn market(&self) -> &MarketModel {
        &self.market
    }

    /// Validates this configuration.
    ///
    /// `k` is never rejected; it is clamped at query time.
    pub fn validate(&self) -> Result<(), KnnError> {
        if !self.round_step.is_finite() || self.round_step <= 0.0 {
            return Err(KnnError::InvalidRoundStep {
                step: self.round_step,
            });
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(KnnError::InvalidEpsilon {
                epsilon: self.epsilon,
            });
        }
        self.weights.validate()?;
        self.market.validate()?;
        let band = self.market.price_band();
        if !band.admits_step(self.round_step) {
            return Err(KnnError::RoundStepExceedsBand {
                step: self.round_step,
                min: band.min(),
                max: band.max(),
            });
        }
        Ok(())
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carval_market::{MarketError, PriceBand};

    #[test]
    fn test_defaults() {
        let cfg = KnnConfig::default();
        assert_eq!(cfg.k(), 5);
        assert_eq!(cfg.round_step(), 50_000.0);
        assert!((cfg.epsilon() - 1e-6).abs() < f64::EPSILON);
        assert_eq!(cfg.weights(), &DistanceWeights::default());
        assert_eq!(cfg.market(), &MarketModel::default());
    }

    #[test]
    fn test_default_weights() {
        let w = DistanceWeights::default();
        assert_eq!(w.make, 1.2);
        assert_eq!(w.model, 1.8);
        assert_eq!(w.fuel, 0.7);
        assert_eq!(w.year, 2.0);
        assert_eq!(w.condition, 1.0);
        assert_eq!(w.description, 0.8);
    }

    #[test]
    fn test_builder_chaining() {
        let cfg = KnnConfig::new(3)
            .with_round_step(1_000.0)
            .with_epsilon(1e-3)
            .with_market(MarketModel::default().with_reference_year(2024));
        assert_eq!(cfg.k(), 3);
        assert_eq!(cfg.round_step(), 1_000.0);
        assert_eq!(cfg.epsilon(), 1e-3);
        assert_eq!(cfg.market().reference_year(), 2024);
    }

    #[test]
    fn test_zero_k_is_valid() {
        assert!(KnnConfig::new(0).validate().is_ok());
    }

    #[test]
    fn test_validate_round_step() {
        for step in [0.0, -1_000.0, f64::NAN, f64::INFINITY] {
            let result = KnnConfig::default().with_round_step(step).validate();
            assert!(
                matches!(result, Err(KnnError::InvalidRoundStep { .. })),
                "step {step} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_round_step_fits_band() {
        let market = MarketModel::default().with_price_band(PriceBand::new(10.0, 20.0));
        let cfg = KnnConfig::default().with_market(market).with_round_step(100.0);
        assert!(matches!(
            cfg.validate(),
            Err(KnnError::RoundStepExceedsBand { step, min, max })
                if step == 100.0 && min == 10.0 && max == 20.0
        ));
        assert!(cfg.with_round_step(20.0).validate().is_ok());
    }

    #[test]
    fn test_validate_epsilon() {
        let result = KnnConfig::default().with_epsilon(0.0).validate();
        assert!(matches!(
            result,
            Err(KnnError::InvalidEpsilon { epsilon }) if epsilon == 0.0
        ));
    }

    #[test]
    fn test_validate_weights() {
        let weights = DistanceWeights {
            fuel: -0.1,
            ..Default::default()
        };
        let result = KnnConfig::default().with_weights(weights).validate();
        assert!(matches!(
            result,
            Err(KnnError::InvalidWeight { name: "fuel", .. })
        ));

        // zero disables a term
        let weights = DistanceWeights {
            description: 0.0,
            ..Default::default()
        };
        assert!(KnnConfig::default().with_weights(weights).validate().is_ok());
    }

    #[test]
    fn test_validate_market() {
        let market = MarketModel::default().with_price_band(PriceBand::new(2.0, 1.0));
        let result = KnnConfig::default().with_market(market).validate();
        assert!(matches!(
            result,
            Err(KnnError::Market(MarketError::InvalidPriceBand { .. }))
        ));
    }

    #[test]
    fn test_validate_error_priority() {
        // round step is checked before epsilon
        let result = KnnConfig::default()
            .with_round_step(0.0)
            .with_epsilon(0.0)
            .validate();
        assert!(matches!(result, Err(KnnError::InvalidRoundStep { .. })));
    }
}
