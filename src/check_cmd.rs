//! Check command: summarize a comparable dataset.

use anyhow::{Context, Result};
use tracing::info_span;

use carval_io::{inspect_dataset, read_dataset, validate_dataset};

use crate::cli::CheckArgs;
use crate::config::CarvalConfig;

/// Print what the engine will see in the dataset.
pub fn run(args: CheckArgs) -> Result<()> {
    let _cmd = info_span!("check").entered();

    let config = CarvalConfig::load(args.config.as_deref())?;
    let dataset_path = args
        .dataset
        .as_ref()
        .or(config.io.dataset.as_ref())
        .ok_or_else(|| {
            anyhow::anyhow!("no dataset path: set [io].dataset in config or use --dataset")
        })?;
    let dataset = read_dataset(dataset_path)
        .with_context(|| format!("failed to read dataset: {}", dataset_path.display()))?;

    let summary = inspect_dataset(&dataset);
    println!("records:            {}", summary.n_records());
    println!("usable:             {}", summary.n_usable());
    match summary.year_bounds() {
        Some((lo, hi)) => println!("years:              {lo}-{hi}"),
        None => println!("years:              none"),
    }
    println!("unusable prices:    {:?}", summary.unusable());
    println!("unknown conditions: {:?}", summary.unknown_conditions());
    println!("blank make/model:   {:?}", summary.blank_categories());

    if args.strict {
        validate_dataset(&dataset).context("dataset failed strict validation")?;
    }
    Ok(())
}
