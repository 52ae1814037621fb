use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level carval configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarvalConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Neighbor search settings.
    #[serde(default)]
    pub suggest: SuggestToml,

    /// Distance term weights.
    #[serde(default)]
    pub weights: WeightsToml,

    /// Market-adjustment settings.
    #[serde(default)]
    pub market: MarketToml,
}

impl CarvalConfig {
    /// Reads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub dataset: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuggestToml {
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_round_step")]
    pub round_step: f64,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl Default for SuggestToml {
    fn default() -> Self {
        Self {
            k: default_k(),
            round_step: default_round_step(),
            epsilon: default_epsilon(),
        }
    }
}

fn default_k() -> usize {
    5
}
fn default_round_step() -> f64 {
    1_000.0
}
fn default_epsilon() -> f64 {
    1e-6
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightsToml {
    #[serde(default = "default_make_weight")]
    pub make: f64,
    #[serde(default = "default_model_weight")]
    pub model: f64,
    #[serde(default = "default_fuel_weight")]
    pub fuel: f64,
    #[serde(default = "default_year_weight")]
    pub year: f64,
    #[serde(default = "default_condition_weight")]
    pub condition: f64,
    #[serde(default = "default_description_weight")]
    pub description: f64,
}

impl Default for WeightsToml {
    fn default() -> Self {
        Self {
            make: default_make_weight(),
            model: default_model_weight(),
            fuel: default_fuel_weight(),
            year: default_year_weight(),
            condition: default_condition_weight(),
            description: default_description_weight(),
        }
    }
}

fn default_make_weight() -> f64 {
    1.2
}
fn default_model_weight() -> f64 {
    1.8
}
fn default_fuel_weight() -> f64 {
    0.7
}
fn default_year_weight() -> f64 {
    2.0
}
fn default_condition_weight() -> f64 {
    1.0
}
fn default_description_weight() -> f64 {
    0.8
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketToml {
    #[serde(default)]
    pub reference_year: Option<i32>,
    #[serde(default)]
    pub currency_unit: Option<String>,
    #[serde(default = "default_price_band")]
    pub price_band: [f64; 2],
    #[serde(default = "default_age_brackets")]
    pub age_brackets: Vec<AgeBracketToml>,
    /// Overrides keyed by condition name; unlisted conditions keep defaults.
    #[serde(default)]
    pub condition_multipliers: BTreeMap<String, f64>,
}

impl Default for MarketToml {
    fn default() -> Self {
        Self {
            reference_year: None,
            currency_unit: None,
            price_band: default_price_band(),
            age_brackets: default_age_brackets(),
            condition_multipliers: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgeBracketToml {
    /// Inclusive upper bound; omit for the final open-ended bracket.
    #[serde(default)]
    pub max_age: Option<u32>,
    pub multiplier: f64,
}

fn default_price_band() -> [f64; 2] {
    [2_700_000.0, 4_700_000.0]
}
fn default_age_brackets() -> Vec<AgeBracketToml> {
    [(Some(0), 4.5), (Some(3), 3.8), (Some(7), 3.2), (None, 2.5)]
        .into_iter()
        .map(|(max_age, multiplier)| AgeBracketToml {
            max_age,
            multiplier,
        })
        .collect()
}
