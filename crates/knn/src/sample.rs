//! Comparable records, queries, and their normalized form.

use serde::{Deserialize, Serialize};

use carval_market::Condition;
use carval_text::TermVector;

/// A comparable listing with a known price.
///
/// Fields mirror the listing store: `condition` is kept as free text and
/// interpreted through [`Condition::parse`] only when scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarSample {
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
}

impl CarSample {
    /// Creates a record with the required fields.
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32, price: f64) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            condition: None,
            fuel_type: None,
            description: None,
            price,
        }
    }

    /// Sets the condition name.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Sets the fuel type.
    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = Some(fuel_type.into());
        self
    }

    /// Sets the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `true` if the price is finite and positive.
    pub fn has_usable_price(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

/// A model year given as a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    Number(f64),
    Text(String),
}

impl YearInput {
    /// Parses to an integer year, truncating fractions.
    ///
    /// Returns `None` for non-finite numbers, unparsable strings, or values
    /// outside the `i32` range.
    pub fn resolve(&self) -> Option<i32> {
        let value = match self {
            YearInput::Number(n) => *n,
            YearInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        if !value.is_finite() {
            return None;
        }
        let truncated = value.trunc();
        if truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
            return None;
        }
        Some(truncated as i32)
    }
}

impl From<i32> for YearInput {
    fn from(year: i32) -> Self {
        YearInput::Number(f64::from(year))
    }
}

impl From<f64> for YearInput {
    fn from(year: f64) -> Self {
        YearInput::Number(year)
    }
}

impl From<&str> for YearInput {
    fn from(year: &str) -> Self {
        YearInput::Text(year.to_string())
    }
}

impl From<String> for YearInput {
    fn from(year: String) -> Self {
        YearInput::Text(year)
    }
}

/// The car being priced. Every field is optional.
///
/// A suggestion requires make, model, and a year that
/// [`resolves`](YearInput::resolve).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInput {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<YearInput>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl QueryInput {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the make.
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    /// Sets the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the year.
    pub fn with_year(mut self, year: impl Into<YearInput>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Sets the condition name.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Sets the fuel type.
    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = Some(fuel_type.into());
        self
    }

    /// Sets the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the year as an integer, if resolvable.
    pub fn resolved_year(&self) -> Option<i32> {
        self.year.as_ref().and_then(YearInput::resolve)
    }

    /// Returns the parsed condition, if recognized.
    pub fn parsed_condition(&self) -> Option<Condition> {
        self.condition.as_deref().and_then(Condition::parse)
    }

    /// Returns `true` if make, model and year are all usable.
    pub fn is_complete(&self) -> bool {
        present(self.make.as_deref()).is_some()
            && present(self.model.as_deref()).is_some()
            && self.resolved_year().is_some()
    }
}

impl From<&CarSample> for QueryInput {
    fn from(sample: &CarSample) -> Self {
        Self {
            make: Some(sample.make.clone()),
            model: Some(sample.model.clone()),
            year: Some(YearInput::from(sample.year)),
            condition: sample.condition.clone(),
            fuel_type: sample.fuel_type.clone(),
            description: sample.description.clone(),
        }
    }
}

/// Trimmed string, `None` if empty.
fn present(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn folded(s: Option<&str>) -> Option<String> {
    present(s).map(str::to_lowercase)
}

/// Scoring view of a record or query: case-folded categories, resolved year,
/// condition ordinal, tokenized description.
#[derive(Debug, Clone)]
pub(crate) struct Profile {
    pub(crate) make: Option<String>,
    pub(crate) model: Option<String>,
    pub(crate) fuel: Option<String>,
    pub(crate) year: Option<i32>,
    pub(crate) condition: u8,
    pub(crate) description: Option<TermVector>,
}

impl Profile {
    pub(crate) fn from_sample(s: &CarSample) -> Self {
        Self {
            make: folded(Some(&s.make)),
            model: folded(Some(&s.model)),
            fuel: folded(s.fuel_type.as_deref()),
            year: Some(s.year),
            condition: Condition::ordinal_or_default(s.condition.as_deref()),
            description: present(s.description.as_deref()).map(TermVector::from_text),
        }
    }

    pub(crate) fn from_query(q: &QueryInput) -> Self {
        Self {
            make: folded(q.make.as_deref()),
            model: folded(q.model.as_deref()),
            fuel: folded(q.fuel_type.as_deref()),
            year: q.resolved_year(),
            condition: Condition::ordinal_or_default(q.condition.as_deref()),
            description: present(q.description.as_deref()).map(TermVector::from_text),
        }
    }
}
