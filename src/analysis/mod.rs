//! Statistical analysis and chart rendering over the passenger dataset.
//!
//! [`Analyzer`] holds a shared handle to the loaded [`Dataset`] and exposes
//! pure, read-only operations: formatted statistical summaries ([`stats`])
//! and PNG chart renderings ([`charts`]). Every operation is deterministic
//! for a fixed dataset and holds no state between calls.

use std::sync::Arc;

use crate::dataset::Dataset;
use crate::error::{PurserError, Result};

pub mod charts;
pub mod stats;

/// Read-only analysis facade over the shared dataset.
#[derive(Debug, Clone)]
pub struct Analyzer {
    dataset: Arc<Dataset>,
}

impl Analyzer {
    /// Create an analyzer over a shared dataset handle.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Analyzer { dataset }
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Non-null ages, in record order.
    pub(crate) fn ages(&self) -> Vec<f64> {
        self.dataset
            .records()
            .iter()
            .filter_map(|r| r.age)
            .collect()
    }

    /// All fares, in record order.
    pub(crate) fn fares(&self) -> Vec<f64> {
        self.dataset.records().iter().map(|r| r.fare).collect()
    }

    /// Overall survival rate as a percentage of all records.
    pub(crate) fn survival_rate(&self) -> Result<f64> {
        let records = self.dataset.records();
        if records.is_empty() {
            return Err(PurserError::data_integrity(
                "cannot compute survival rate over an empty dataset",
            ));
        }
        let survived = records.iter().filter(|r| r.survived()).count();
        Ok(survived as f64 / records.len() as f64 * 100.0)
    }
}
