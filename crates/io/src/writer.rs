//! JSON output for suggestion results.

use std::path::Path;

use tracing::info;

use carval_knn::KnnResult;

use crate::error::IoError;

/// Serializes a result to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] if serialization fails.
pub fn result_to_json(result: &KnnResult) -> Result<String, IoError> {
    serde_json::to_string_pretty(result).map_err(|e| IoError::Serialization {
        reason: e.to_string(),
    })
}

/// Writes a result to `path` as pretty-printed JSON, replacing any existing
/// file.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] or [`IoError::Io`].
pub fn write_result(path: &Path, result: &KnnResult) -> Result<(), IoError> {
    let json = result_to_json(result)?;
    std::fs::write(path, json).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "result written");
    Ok(())
}
