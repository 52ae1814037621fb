//! Condition scale and market-adjustment model.
//!
//! The raw neighbor-weighted average of comparable prices is rescaled into a
//! plausible sale-price band for the target market:
//!
//! ```text
//! age        = max(0, reference_year - query_year)
//! adjusted   = max(base × age_multiplier(age) × condition_multiplier, band.min)
//! price      = round_to_step(clamp(adjusted, band), step)
//! ```
//!
//! All constants live in [`MarketModel`]; [`MarketModel::default`] carries
//! the stock brackets, multipliers and `[2 700 000, 4 700 000]` band.
//!
//! # Quick start
//!
//! ```
//! use carval_market::{Condition, MarketModel};
//!
//! let model = MarketModel::default().with_reference_year(2025);
//! let adj = model.adjust(800_000.0, 2022, Some(Condition::Good), 1_000.0);
//! // age 3 -> 3.8, good -> 1.0
//! assert_eq!(adj.price(), 3_040_000.0);
//! ```

pub mod condition;
pub mod error;
pub mod model;

pub use condition::Condition;
pub use error::MarketError;
pub use model::{AgeBracket, Adjustment, MarketModel, PriceBand};
