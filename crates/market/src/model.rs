//! Market-adjustment model: age brackets, condition multipliers, price band.

use chrono::{Datelike, Local};

use crate::condition::Condition;
use crate::error::MarketError;

/// Age multiplier applied to cars up to `max_age` years old.
///
/// `max_age = None` is the open-ended last bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBracket {
    /// Inclusive upper bound on car age in years.
    pub max_age: Option<u32>,
    /// Multiplier for this bracket.
    pub multiplier: f64,
}

impl AgeBracket {
    /// Bracket covering ages up to and including `max_age`.
    pub fn up_to(max_age: u32, multiplier: f64) -> Self {
        Self {
            max_age: Some(max_age),
            multiplier,
        }
    }

    /// Open-ended bracket covering every remaining age.
    pub fn older(multiplier: f64) -> Self {
        Self {
            max_age: None,
            multiplier,
        }
    }

    fn contains(&self, age: u32) -> bool {
        self.max_age.is_none_or(|max| age <= max)
    }
}

/// Plausible sale-price band in the market's currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    min: f64,
    max: f64,
}

impl PriceBand {
    /// Creates a band. Checked by [`validate`](Self::validate).
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if `price` lies inside the band.
    pub fn contains(&self, price: f64) -> bool {
        (self.min..=self.max).contains(&price)
    }

    /// Clamps `price` into the band.
    pub fn clamp(&self, price: f64) -> f64 {
        price.clamp(self.min, self.max)
    }

    /// Returns `true` if some multiple of `step` lies inside the band.
    pub fn admits_step(&self, step: f64) -> bool {
        (self.min / step).ceil() * step <= self.max
    }

    /// Rounds `price` to the nearest multiple of `step`, staying in the band.
    ///
    /// If the nearest multiple falls outside, the closest in-band multiple is
    /// used instead. `step` must satisfy [`admits_step`](Self::admits_step).
    pub fn round_to_step(&self, price: f64, step: f64) -> f64 {
        debug_assert!(step.is_finite() && step > 0.0 && self.admits_step(step));
        let rounded = (price / step).round() * step;
        if rounded > self.max {
            (self.max / step).floor() * step
        } else if rounded < self.min {
            (self.min / step).ceil() * step
        } else {
            rounded
        }
    }

    /// Validates `0 < min <= max` with finite bounds.
    pub fn validate(&self) -> Result<(), MarketError> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min > 0.0
            && self.min <= self.max;
        if ok {
            Ok(())
        } else {
            Err(MarketError::InvalidPriceBand {
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for PriceBand {
    fn default() -> Self {
        Self::new(2_700_000.0, 4_700_000.0)
    }
}

/// Breakdown of one market adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    car_age: u32,
    age_multiplier: f64,
    condition_multiplier: f64,
    unclamped: f64,
    price: f64,
}

impl Adjustment {
    /// Car age in whole years used for bracket lookup.
    pub fn car_age(&self) -> u32 {
        self.car_age
    }

    /// Multiplier of the matching age bracket.
    pub fn age_multiplier(&self) -> f64 {
        self.age_multiplier
    }

    /// Condition multiplier (1.0 when the condition was unknown).
    pub fn condition_multiplier(&self) -> f64 {
        self.condition_multiplier
    }

    /// `base × age_multiplier × condition_multiplier` before the band floor.
    pub fn unclamped(&self) -> f64 {
        self.unclamped
    }

    /// Final clamped and rounded price.
    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Market-specific constants for turning a base price into a suggestion.
///
/// # Example
///
/// ```
/// use carval_market::{AgeBracket, Condition, MarketModel, PriceBand};
///
/// let model = MarketModel::default()
///     .with_reference_year(2025)
///     .with_price_band(PriceBand::new(10_000.0, 90_000.0))
///     .with_age_brackets(vec![AgeBracket::up_to(5, 1.0), AgeBracket::older(0.8)])
///     .with_condition_multiplier(Condition::Poor, 0.5)
///     .with_currency_unit("EUR");
///
/// assert!(model.validate().is_ok());
/// assert_eq!(model.adjust(20_000.0, 2010, Some(Condition::Good), 500.0).price(), 16_000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MarketModel {
    age_brackets: Vec<AgeBracket>,
    /// Indexed by [`Condition::ordinal`].
    condition_multipliers: [f64; 6],
    price_band: PriceBand,
    currency_unit: Option<String>,
    /// `None` resolves to the current local year at adjustment time.
    reference_year: Option<i32>,
}

impl Default for MarketModel {
    fn default() -> Self {
        Self {
            age_brackets: vec![
                AgeBracket::up_to(0, 4.5),
                AgeBracket::up_to(3, 3.8),
                AgeBracket::up_to(7, 3.2),
                AgeBracket::older(2.5),
            ],
            condition_multipliers: [0.7, 0.85, 1.0, 1.1, 1.15, 1.2],
            price_band: PriceBand::default(),
            currency_unit: None,
            reference_year: None,
        }
    }
}

impl MarketModel {
    /// Replaces the age brackets. They are matched in order.
    pub fn with_age_brackets(mut self, brackets: Vec<AgeBracket>) -> Self {
        self.age_brackets = brackets;
        self
    }

    /// Sets the multiplier for one condition.
    pub fn with_condition_multiplier(mut self, condition: Condition, multiplier: f64) -> Self {
        self.condition_multipliers[condition.ordinal() as usize] = multiplier;
        self
    }

    /// Sets the plausible price band.
    pub fn with_price_band(mut self, band: PriceBand) -> Self {
        self.price_band = band;
        self
    }

    /// Sets the currency label reported alongside prices.
    pub fn with_currency_unit(mut self, unit: impl Into<String>) -> Self {
        self.currency_unit = Some(unit.into());
        self
    }

    /// Pins the year car age is measured from.
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// Returns the age brackets.
    pub fn age_brackets(&self) -> &[AgeBracket] {
        &self.age_brackets
    }

    /// Returns the multiplier for `condition`.
    pub fn condition_multiplier(&self, condition: Condition) -> f64 {
        self.condition_multipliers[condition.ordinal() as usize]
    }

    /// Returns the price band.
    pub fn price_band(&self) -> PriceBand {
        self.price_band
    }

    /// Returns the currency label, if any.
    pub fn currency_unit(&self) -> Option<&str> {
        self.currency_unit.as_deref()
    }

    /// Returns the year car age is measured from, falling back to the
    /// current local year.
    pub fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }

    /// Multiplier of the first bracket containing `age`.
    pub fn age_multiplier(&self, age: u32) -> f64 {
        self.age_brackets
            .iter()
            .find(|b| b.contains(age))
            .or(self.age_brackets.last())
            .map_or(1.0, |b| b.multiplier)
    }

    /// Rescales `base_price` for a car built in `query_year`.
    ///
    /// `step` must be finite and positive.
    pub fn adjust(
        &self,
        base_price: f64,
        query_year: i32,
        condition: Option<Condition>,
        step: f64,
    ) -> Adjustment {
        let car_age = u32::try_from(self.reference_year().saturating_sub(query_year)).unwrap_or(0);
        let age_multiplier = self.age_multiplier(car_age);
        let condition_multiplier = condition.map_or(1.0, |c| self.condition_multiplier(c));
        let unclamped = base_price * age_multiplier * condition_multiplier;

        let band = self.price_band;
        let floored = unclamped.max(band.min());
        let price = band.round_to_step(band.clamp(floored), step);

        Adjustment {
            car_age,
            age_multiplier,
            condition_multiplier,
            unclamped,
            price,
        }
    }

    /// Validates brackets, multipliers and the price band.
    pub fn validate(&self) -> Result<(), MarketError> {
        if self.age_brackets.is_empty() {
            return Err(MarketError::EmptyAgeBrackets);
        }
        let last = self.age_brackets.len() - 1;
        let mut prev: Option<u32> = None;
        for (index, bracket) in self.age_brackets.iter().enumerate() {
            check_multiplier(format!("age bracket {index}"), bracket.multiplier)?;
            match bracket.max_age {
                None if index != last => return Err(MarketError::OpenBracketNotLast),
                None => {}
                Some(_) if index == last => return Err(MarketError::OpenBracketNotLast),
                Some(max_age) => {
                    if prev.is_some_and(|p| max_age <= p) {
                        return Err(MarketError::UnorderedAgeBrackets { index, max_age });
                    }
                    prev = Some(max_age);
                }
            }
        }
        for c in Condition::ALL {
            check_multiplier(format!("condition {c}"), self.condition_multiplier(c))?;
        }
        self.price_band.validate()
    }
}

fn check_multiplier(what: String, value: f64) -> Result<(), MarketError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MarketError::InvalidMultiplier { what, value })
    }
}
