//! Error types for the Purser library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`PurserError`] enum.
//!
//! # Examples
//!
//! ```
//! use purser::error::{PurserError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PurserError::data_integrity("Age column is entirely null"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Purser operations.
#[derive(Error, Debug)]
pub enum PurserError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dataset file could not be resolved at the primary or fallback location.
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    /// CSV parsing errors while loading the dataset.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A statistical operation encountered data it cannot summarize
    /// (missing column, entirely-null column, too few values).
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// Chart rendering errors.
    #[error("Render error: {0}")]
    Render(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with PurserError.
pub type Result<T> = std::result::Result<T, PurserError>;

impl PurserError {
    /// Create a new dataset-not-found error.
    pub fn dataset_not_found<S: Into<String>>(msg: S) -> Self {
        PurserError::DatasetNotFound(msg.into())
    }

    /// Create a new data integrity error.
    pub fn data_integrity<S: Into<String>>(msg: S) -> Self {
        PurserError::DataIntegrity(msg.into())
    }

    /// Create a new render error.
    pub fn render<S: Into<String>>(msg: S) -> Self {
        PurserError::Render(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PurserError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PurserError::data_integrity("Age column is entirely null");
        assert_eq!(
            error.to_string(),
            "Data integrity error: Age column is entirely null"
        );

        let error = PurserError::dataset_not_found("data/titanic.csv");
        assert_eq!(error.to_string(), "Dataset not found: data/titanic.csv");

        let error = PurserError::render("bitmap backend failure");
        assert_eq!(error.to_string(), "Render error: bitmap backend failure");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let purser_error = PurserError::from(io_error);

        match purser_error {
            PurserError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
