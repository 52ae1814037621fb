//! JSON readers for datasets and queries.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use carval_knn::{CarSample, QueryInput};

use crate::error::IoError;

/// Reads a JSON array of comparable listings.
///
/// Records are returned as stored; unusable prices are left for the engine
/// to skip (see [`inspect_dataset`](crate::inspect_dataset)).
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Io`] on read failure and [`IoError::Json`] if the contents are
/// not an array of listings.
pub fn read_dataset(path: &Path) -> Result<Vec<CarSample>, IoError> {
    let dataset: Vec<CarSample> = read_json(path)?;
    info!(path = %path.display(), n_records = dataset.len(), "dataset loaded");
    Ok(dataset)
}

/// Reads a single query object.
///
/// # Errors
///
/// Same as [`read_dataset`].
pub fn read_query(path: &Path) -> Result<QueryInput, IoError> {
    let query: QueryInput = read_json(path)?;
    debug!(path = %path.display(), ?query, "query loaded");
    Ok(query)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|e| IoError::Json {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
