//! Error types for defect-proneness comparisons
//!
//! Provides a unified error type for all defect-stats crates.

use thiserror::Error;

/// Core error type for the comparison pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// A dataset lacks the label column or a requested property column
    #[error("Missing column '{column}' in dataset '{dataset}'")]
    MissingColumn { dataset: String, column: String },

    /// A sample group is too small for the requested operation
    #[error("Insufficient data for {context}: expected at least {expected} samples, got {actual}")]
    InsufficientData {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// The run configuration cannot be used (empty or duplicated entries)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// A dataset could not be loaded
    #[error("Failed to load dataset '{dataset}': {message}")]
    Load { dataset: String, message: String },

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an empty sample
    pub fn empty_input(context: impl Into<String>) -> Self {
        Self::InsufficientData {
            context: context.into(),
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a column that is not present in a dataset
    pub fn missing_column(dataset: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            dataset: dataset.into(),
            column: column.into(),
        }
    }

    /// Create an error for NaN values handed directly to a computation
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN values"))
    }

    /// Whether this error comes from an empty sample group
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}
