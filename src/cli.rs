use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Price suggestions for used-car listings from comparable sales.
#[derive(Parser)]
#[command(
    name = "carval",
    version,
    about = "Comparable-listing price suggestions for used cars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Suggest a price for one car.
    Suggest(SuggestArgs),
    /// Report what the engine will see in a dataset.
    Check(CheckArgs),
}

/// Arguments for the `suggest` subcommand.
#[derive(clap::Args)]
pub struct SuggestArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Comparable listings (JSON array). Overrides `[io].dataset`.
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Query object (JSON). Individual flags override its fields.
    #[arg(short, long)]
    pub query: Option<PathBuf>,

    /// Make of the car being priced.
    #[arg(long)]
    pub make: Option<String>,

    /// Model of the car being priced.
    #[arg(long)]
    pub model: Option<String>,

    /// Model year (number or numeric string).
    #[arg(long)]
    pub year: Option<String>,

    /// Condition: poor, fair, good, excellent, like_new, new.
    #[arg(long)]
    pub condition: Option<String>,

    /// Fuel type.
    #[arg(long = "fuel-type", visible_alias = "fuel")]
    pub fuel_type: Option<String>,

    /// Free-text description.
    #[arg(long)]
    pub description: Option<String>,

    /// Number of neighbors. Overrides `[suggest].k`.
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Rounding step. Overrides `[suggest].round_step`.
    #[arg(long = "round-step")]
    pub round_step: Option<f64>,

    /// Year car age is measured from. Overrides `[market].reference_year`.
    #[arg(long = "reference-year")]
    pub reference_year: Option<i32>,

    /// Write the JSON result here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Comparable listings (JSON array). Overrides `[io].dataset`.
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Fail if any record would be ignored or misread.
    #[arg(long)]
    pub strict: bool,
}
