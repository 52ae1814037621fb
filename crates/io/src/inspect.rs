//! Dataset summaries for the `check` command.

use carval_knn::CarSample;
use carval_market::Condition;

/// What the suggestion engine will see in a dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSummary {
    n_records: usize,
    n_usable: usize,
    year_bounds: Option<(i32, i32)>,
    unusable: Vec<usize>,
    unknown_conditions: Vec<usize>,
    blank_categories: Vec<usize>,
}

impl DatasetSummary {
    /// Total number of records.
    pub fn n_records(&self) -> usize {
        self.n_records
    }

    /// Records with a finite positive price.
    pub fn n_usable(&self) -> usize {
        self.n_usable
    }

    /// Oldest and newest year among usable records.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        self.year_bounds
    }

    /// Indices of records skipped for their price.
    pub fn unusable(&self) -> &[usize] {
        &self.unusable
    }

    /// Indices of records whose condition text is set but not recognized.
    pub fn unknown_conditions(&self) -> &[usize] {
        &self.unknown_conditions
    }

    /// Indices of records with a blank make or model.
    pub fn blank_categories(&self) -> &[usize] {
        &self.blank_categories
    }
}

/// Summarizes `dataset` without modifying it.
pub fn inspect_dataset(dataset: &[CarSample]) -> DatasetSummary {
    let mut summary = DatasetSummary {
        n_records: dataset.len(),
        ..Default::default()
    };
    for (i, s) in dataset.iter().enumerate() {
        if s.has_usable_price() {
            summary.n_usable += 1;
            summary.year_bounds = Some(match summary.year_bounds {
                None => (s.year, s.year),
                Some((lo, hi)) => (lo.min(s.year), hi.max(s.year)),
            });
        } else {
            summary.unusable.push(i);
        }
        let condition = s.condition.as_deref();
        if condition.is_some_and(|c| Condition::parse(c).is_none()) {
            summary.unknown_conditions.push(i);
        }
        if s.make.trim().is_empty() || s.model.trim().is_empty() {
            summary.blank_categories.push(i);
        }
    }
    summary
}
