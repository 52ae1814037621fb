//! Price suggestion entry point.

use tracing::debug;

use crate::aggregate::inverse_distance_mean;
use crate::config::KnnConfig;
use crate::distance::{YearRange, profile_distance};
use crate::error::KnnError;
use crate::result::{KnnResult, Neighbor};
use crate::sample::{CarSample, Profile, QueryInput};
use crate::select::select_k_nearest;

/// Suggests a price for `query` from the comparable `dataset`.
///
/// Pipeline:
///
/// 1. validate `config`
/// 2. gate on make, model and a resolvable year in the query
/// 3. keep records with a finite positive price
/// 4. score every kept record ([`distance`](crate::distance()))
/// 5. stable-sort by distance, keep `k` clamped to `[1, kept]`
/// 6. inverse-distance weighted mean of neighbor prices
/// 7. market adjustment, band clamp and rounding
///
/// Neither argument is modified; identical inputs give bit-identical
/// results.
///
/// # Errors
///
/// Returns [`KnnError`] only for an invalid configuration. Insufficient data
/// yields `Ok(KnnResult::empty())`.
#[tracing::instrument(skip_all, fields(n_dataset = dataset.len(), k = config.k()))]
pub fn suggest_price(
    query: &QueryInput,
    dataset: &[CarSample],
    config: &KnnConfig,
) -> Result<KnnResult, KnnError> {
    config.validate()?;

    let Some(query_year) = query.resolved_year() else {
        debug!("query has no resolvable year");
        return Ok(KnnResult::empty());
    };
    if !query.is_complete() {
        debug!("query is missing make or model");
        return Ok(KnnResult::empty());
    }

    let valid: Vec<usize> = dataset
        .iter()
        .enumerate()
        .filter(|(_, s)| s.has_usable_price())
        .map(|(i, _)| i)
        .collect();
    if valid.is_empty() {
        debug!("no records with a usable price");
        return Ok(KnnResult::empty());
    }

    let year_range = YearRange::from_samples(dataset);
    let target = Profile::from_query(query);
    let weights = config.weights();
    let distances: Vec<f64> = valid
        .iter()
        .map(|&i| {
            profile_distance(
                &target,
                &Profile::from_sample(&dataset[i]),
                year_range,
                weights,
            )
        })
        .collect();

    let k_eff = config.k().clamp(1, valid.len());
    let mut nearest = Vec::with_capacity(valid.len());
    select_k_nearest(&distances, k_eff, &mut nearest);

    let neighbors: Vec<Neighbor> = nearest
        .iter()
        .map(|&(local, d)| {
            let index = valid[local];
            Neighbor::new(index, dataset[index].clone(), d)
        })
        .collect();

    let Some(base_price) = inverse_distance_mean(
        neighbors.iter().map(|n| (n.distance(), n.sample().price)),
        config.epsilon(),
    ) else {
        debug!("neighbor weights sum to zero");
        return Ok(KnnResult::empty());
    };

    let adjustment = config.market().adjust(
        base_price,
        query_year,
        query.parsed_condition(),
        config.round_step(),
    );
    debug!(
        n_valid = valid.len(),
        k_eff,
        year_span = year_range.span(),
        base_price,
        car_age = adjustment.car_age(),
        age_multiplier = adjustment.age_multiplier(),
        condition_multiplier = adjustment.condition_multiplier(),
        price = adjustment.price(),
        "price suggested"
    );

    Ok(KnnResult::suggestion(
        adjustment.price(),
        base_price,
        neighbors,
    ))
}
