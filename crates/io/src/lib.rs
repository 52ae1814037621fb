//! # carval-io
//!
//! Load comparable listings and queries from JSON files, inspect datasets
//! for records the suggestion engine will ignore, and write results back out
//! as JSON. This is the caller side of [`carval_knn::suggest_price`]: the
//! engine itself never touches the filesystem.

mod error;
mod inspect;
mod reader;
mod validate;
mod writer;

pub use error::IoError;
pub use inspect::{DatasetSummary, inspect_dataset};
pub use reader::{read_dataset, read_query};
pub use validate::validate_dataset;
pub use writer::{result_to_json, write_result};
