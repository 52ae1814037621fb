//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use carval_knn::{DistanceWeights, KnnConfig};
use carval_market::{AgeBracket, Condition, MarketModel, PriceBand};

/// Parses a condition name into the corresponding enum variant.
pub fn parse_condition(s: &str) -> Result<Condition> {
    match Condition::parse(s) {
        Some(c) => Ok(c),
        None => bail!("unknown condition: {s:?}"),
    }
}

/// Builds [`DistanceWeights`] from the TOML weights table.
pub fn build_weights(w: &WeightsToml) -> DistanceWeights {
    DistanceWeights {
        make: w.make,
        model: w.model,
        fuel: w.fuel,
        year: w.year,
        condition: w.condition,
        description: w.description,
    }
}

/// Builds a validated [`MarketModel`] from the TOML market table.
pub fn build_market_model(m: &MarketToml) -> Result<MarketModel> {
    let brackets = m
        .age_brackets
        .iter()
        .map(|b| AgeBracket {
            max_age: b.max_age,
            multiplier: b.multiplier,
        })
        .collect();
    let [min, max] = m.price_band;
    let mut model = MarketModel::default()
        .with_age_brackets(brackets)
        .with_price_band(PriceBand::new(min, max));
    for (name, &multiplier) in &m.condition_multipliers {
        let condition = parse_condition(name)
            .with_context(|| format!("in [market.condition_multipliers] key {name:?}"))?;
        model = model.with_condition_multiplier(condition, multiplier);
    }
    if let Some(unit) = &m.currency_unit {
        model = model.with_currency_unit(unit);
    }
    if let Some(year) = m.reference_year {
        model = model.with_reference_year(year);
    }
    model.validate().context("invalid [market] config")?;
    Ok(model)
}

/// Builds a validated [`KnnConfig`] from the full TOML configuration.
pub fn build_knn_config(config: &CarvalConfig) -> Result<KnnConfig> {
    let cfg = KnnConfig::new(config.suggest.k)
        .with_round_step(config.suggest.round_step)
        .with_epsilon(config.suggest.epsilon)
        .with_weights(build_weights(&config.weights))
        .with_market(build_market_model(&config.market)?);
    cfg.validate().context("invalid [suggest] or [weights] config")?;
    Ok(cfg)
}
