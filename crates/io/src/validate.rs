//! Accumulated dataset validation.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], and [`validate_dataset`] for the
//! strict `check` mode.

use carval_knn::CarSample;

use crate::error::IoError;
use crate::inspect::inspect_dataset;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Rejects datasets containing records the engine would ignore or misread.
///
/// Flags an empty dataset, non-positive or non-finite prices, blank make or
/// model, and unrecognized condition names.
///
/// # Errors
///
/// Returns [`IoError::Validation`] listing every problem found.
pub fn validate_dataset(dataset: &[CarSample]) -> Result<(), IoError> {
    let mut c = ValidationCollector::new();
    if dataset.is_empty() {
        c.push("dataset is empty");
    }
    let summary = inspect_dataset(dataset);
    for &i in summary.unusable() {
        c.push(format!(
            "record {i}: price must be finite and positive, got {}",
            dataset[i].price
        ));
    }
    for &i in summary.blank_categories() {
        c.push(format!("record {i}: make and model must not be blank"));
    }
    for &i in summary.unknown_conditions() {
        c.push(format!(
            "record {i}: unknown condition {:?}",
            dataset[i].condition.as_deref().unwrap_or_default()
        ));
    }
    c.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_empty_is_ok() {
        assert!(ValidationCollector::new().finish().is_ok());
    }

    #[test]
    fn test_collector_joins_messages() {
        let mut c = ValidationCollector::new();
        c.push("first");
        c.push(String::from("second"));
        match c.finish() {
            Err(IoError::Validation { count, details }) => {
                assert_eq!(count, 2);
                assert_eq!(details, "first; second");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_dataset() {
        let data = [CarSample::new("Kia", "Rio", 2020, 2_000_000.0).with_condition("Fair")];
        assert!(validate_dataset(&data).is_ok());
    }

    #[test]
    fn test_empty_dataset() {
        let err = validate_dataset(&[]).unwrap_err();
        assert_eq!(err.to_string(), "1 validation error(s): dataset is empty");
    }

    #[test]
    fn test_every_problem_reported() {
        let data = [
            CarSample::new("Kia", "", 2020, -1.0).with_condition("mint"),
            CarSample::new("Kia", "Rio", 2020, 2_000_000.0),
        ];
        match validate_dataset(&data) {
            Err(IoError::Validation { count, details }) => {
                assert_eq!(count, 3);
                assert!(details.contains("record 0: price must be finite and positive, got -1"));
                assert!(details.contains("record 0: make and model must not be blank"));
                assert!(details.contains("record 0: unknown condition \"mint\""));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
