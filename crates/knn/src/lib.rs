//! Weighted k-nearest-neighbor price suggestions for car listings.
//!
//! A query car is compared against caller-supplied comparable listings with
//! a mixed distance metric:
//!
//! | Term | Contribution | Default weight |
//! |------|--------------|----------------|
//! | Make | `w` on case-insensitive mismatch | 1.2 |
//! | Model | `w` on mismatch | 1.8 |
//! | Fuel type | `w` on mismatch | 0.7 |
//! | Year | `w · |Δyear| / year span` | 2.0 |
//! | Condition | `w · |Δordinal| / 5` | 1.0 |
//! | Description | `w · (1 − cosine)` | 0.8 |
//!
//! Terms whose field is missing on either side contribute nothing. The k
//! closest records are averaged with weights `1 / (ε + d)` and the result is
//! rescaled by the [`carval_market`] model.
//!
//! # Quick start
//!
//! ```
//! use carval_knn::{CarSample, KnnConfig, QueryInput, suggest_price};
//! use carval_market::MarketModel;
//!
//! let dataset = vec![
//!     CarSample::new("Toyota", "Corolla", 2021, 3_000_000.0).with_condition("good"),
//!     CarSample::new("Toyota", "Corolla", 2022, 3_300_000.0).with_condition("excellent"),
//!     CarSample::new("Honda", "Civic", 2022, 3_100_000.0),
//! ];
//! let query = QueryInput::new()
//!     .with_make("Toyota")
//!     .with_model("Corolla")
//!     .with_year("2022")
//!     .with_condition("good");
//! let config = KnnConfig::new(2)
//!     .with_round_step(1_000.0)
//!     .with_market(MarketModel::default().with_reference_year(2025));
//!
//! let result = suggest_price(&query, &dataset, &config).unwrap();
//! assert_eq!(result.neighbors().len(), 2);
//! assert_eq!(result.confidence(), 0.85);
//! let price = result.suggested_price().unwrap();
//! assert!((2_700_000.0..=4_700_000.0).contains(&price));
//! ```
//!
//! # Architecture
//!
//! ```text
//! suggest_price()
//!   ├─ config.validate()
//!   ├─ query gating / usable-price filter
//!   ├─ profile_distance()        (distance.rs)
//!   ├─ select_k_nearest()        (select.rs)
//!   ├─ inverse_distance_mean()   (aggregate.rs)
//!   └─ MarketModel::adjust()     (carval-market)
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod result;
pub mod sample;
pub mod suggest;

pub(crate) mod aggregate;
pub(crate) mod select;

pub use config::{DistanceWeights, KnnConfig};
pub use distance::{YearRange, distance};
pub use error::KnnError;
pub use result::{KnnResult, Neighbor, SUGGESTION_CONFIDENCE};
pub use sample::{CarSample, QueryInput, YearInput};
pub use suggest::suggest_price;
