//! Suggest command: price one car against a comparable dataset.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use carval_io::{read_dataset, read_query, result_to_json, write_result};
use carval_knn::{QueryInput, suggest_price};

use crate::cli::SuggestArgs;
use crate::config::CarvalConfig;
use crate::convert;

/// Run the suggestion pipeline.
pub fn run(args: SuggestArgs) -> Result<()> {
    let _cmd = info_span!("suggest").entered();

    // 1. Load config and apply CLI overrides
    let config = CarvalConfig::load(args.config.as_deref())?;
    let mut knn_cfg = convert::build_knn_config(&config)?;
    if let Some(k) = args.k {
        knn_cfg = knn_cfg.with_k(k);
    }
    if let Some(step) = args.round_step {
        knn_cfg = knn_cfg.with_round_step(step);
    }
    if let Some(year) = args.reference_year {
        let market = knn_cfg.market().clone().with_reference_year(year);
        knn_cfg = knn_cfg.with_market(market);
    }
    knn_cfg.validate().context("invalid command-line override")?;

    // 2. Read dataset
    let dataset_path = args
        .dataset
        .as_ref()
        .or(config.io.dataset.as_ref())
        .ok_or_else(|| {
            anyhow::anyhow!("no dataset path: set [io].dataset in config or use --dataset")
        })?;
    let dataset = read_dataset(dataset_path)
        .with_context(|| format!("failed to read dataset: {}", dataset_path.display()))?;

    // 3. Build query: file first, then flags
    let query = build_query(&args)?;

    // 4. Suggest
    let result = suggest_price(&query, &dataset, &knn_cfg)?;
    match result.suggested_price() {
        Some(price) => info!(
            price,
            currency = knn_cfg.market().currency_unit().unwrap_or(""),
            n_neighbors = result.neighbors().len(),
            confidence = result.confidence(),
            "suggestion ready"
        ),
        None => warn!("insufficient data: query needs make, model and year, and the dataset needs priced records"),
    }

    // 5. Output
    match args.output.as_ref().or(config.io.output.as_ref()) {
        Some(path) => write_result(path, &result)
            .with_context(|| format!("failed to write result: {}", path.display()))?,
        None => println!("{}", result_to_json(&result)?),
    }

    Ok(())
}

/// Merges the optional query file with individual flags.
fn build_query(args: &SuggestArgs) -> Result<QueryInput> {
    let mut query = match &args.query {
        Some(path) => read_query(path)
            .with_context(|| format!("failed to read query: {}", path.display()))?,
        None => QueryInput::new(),
    };
    if let Some(make) = &args.make {
        query = query.with_make(make);
    }
    if let Some(model) = &args.model {
        query = query.with_model(model);
    }
    if let Some(year) = &args.year {
        query = query.with_year(year.as_str());
    }
    if let Some(condition) = &args.condition {
        query = query.with_condition(condition);
    }
    if let Some(fuel) = &args.fuel_type {
        query = query.with_fuel_type(fuel);
    }
    if let Some(description) = &args.description {
        query = query.with_description(description);
    }
    Ok(query)
}
