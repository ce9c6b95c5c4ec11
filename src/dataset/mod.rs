//! Dataset loading and metadata.
//!
//! The passenger manifest is loaded once at startup from `data/titanic.csv`
//! (next to the crate manifest, falling back to the current working
//! directory) and shared read-only for the lifetime of the process. No
//! record is ever mutated after load.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{PurserError, Result};

pub mod record;

pub use record::Passenger;

/// Ordered column names of the manifest, as they appear in the CSV header.
pub const COLUMNS: [&str; 12] = [
    "PassengerId",
    "Survived",
    "Pclass",
    "Name",
    "Sex",
    "Age",
    "SibSp",
    "Parch",
    "Ticket",
    "Fare",
    "Cabin",
    "Embarked",
];

/// Relative location of the dataset file.
const DATA_FILE: &str = "data/titanic.csv";

/// The immutable, in-memory passenger dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Passenger>,
}

/// Dataset-level metadata: shape, columns, per-column types and null counts.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// `[rows, columns]`.
    pub shape: [usize; 2],
    pub columns: Vec<String>,
    pub dtypes: HashMap<String, String>,
    pub missing_values: HashMap<String, u64>,
}

impl Dataset {
    /// Load the dataset from the default location.
    ///
    /// Tries `data/titanic.csv` relative to the crate manifest directory
    /// first, then relative to the current working directory. Fails with
    /// [`PurserError::DatasetNotFound`] if neither resolves.
    pub fn load() -> Result<Self> {
        let primary = Path::new(env!("CARGO_MANIFEST_DIR")).join(DATA_FILE);
        if primary.is_file() {
            return Self::load_from(&primary);
        }

        let fallback = PathBuf::from(DATA_FILE);
        if fallback.is_file() {
            return Self::load_from(&fallback);
        }

        Err(PurserError::dataset_not_found(format!(
            "{} (also tried {})",
            primary.display(),
            fallback.display()
        )))
    }

    /// Load the dataset from an explicit CSV file path.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PurserError::dataset_not_found(path.display().to_string()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: Passenger = row?;
            records.push(record);
        }

        info!("loaded {} passenger records from {}", records.len(), path.display());
        Ok(Dataset { records })
    }

    /// Build a dataset from in-memory records.
    pub fn from_records(records: Vec<Passenger>) -> Self {
        Dataset { records }
    }

    /// All passenger records.
    pub fn records(&self) -> &[Passenger] {
        &self.records
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dataset metadata for display: shape, column names, per-column types
    /// and missing-value counts.
    pub fn info(&self) -> DatasetInfo {
        let columns: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();

        let dtypes: HashMap<String, String> = COLUMNS
            .iter()
            .map(|&c| {
                let dtype = match c {
                    "PassengerId" | "Survived" | "Pclass" | "SibSp" | "Parch" => "integer",
                    "Age" | "Fare" => "float",
                    _ => "string",
                };
                (c.to_string(), dtype.to_string())
            })
            .collect();

        let missing_values: HashMap<String, u64> = COLUMNS
            .iter()
            .map(|&c| {
                let count = match c {
                    "Age" => self.records.iter().filter(|r| r.age.is_none()).count(),
                    "Cabin" => self.records.iter().filter(|r| r.cabin.is_none()).count(),
                    "Embarked" => self.records.iter().filter(|r| r.embarked.is_none()).count(),
                    _ => 0,
                };
                (c.to_string(), count as u64)
            })
            .collect();

        DatasetInfo {
            shape: [self.records.len(), COLUMNS.len()],
            columns,
            dtypes,
            missing_values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger(id: u32, age: Option<f64>, embarked: Option<&str>) -> Passenger {
        Passenger {
            passenger_id: id,
            survived: 0,
            pclass: 3,
            name: format!("Passenger {id}"),
            sex: "male".to_string(),
            age,
            sibsp: 0,
            parch: 0,
            ticket: format!("T{id}"),
            fare: 7.25,
            cabin: None,
            embarked: embarked.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_info_missing_counts() {
        let dataset = Dataset::from_records(vec![
            passenger(1, Some(22.0), Some("S")),
            passenger(2, None, Some("C")),
            passenger(3, None, None),
        ]);

        let info = dataset.info();
        assert_eq!(info.shape, [3, 12]);
        assert_eq!(info.columns.len(), 12);
        assert_eq!(info.missing_values["Age"], 2);
        assert_eq!(info.missing_values["Embarked"], 1);
        assert_eq!(info.missing_values["Cabin"], 3);
        assert_eq!(info.missing_values["Fare"], 0);
        assert_eq!(info.dtypes["Age"], "float");
        assert_eq!(info.dtypes["Sex"], "string");
    }

    #[test]
    fn test_from_records_len() {
        let dataset = Dataset::from_records(vec![passenger(1, None, None)]);
        assert_eq!(dataset.len(), 1);
        assert!(!dataset.is_empty());
    }
}
