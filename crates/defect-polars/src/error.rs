//! Error types for defect-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error(transparent)]
    Core(#[from] defect_core::Error),

    #[error("Type mismatch in column '{column}': expected {expected}, got {got}")]
    TypeMismatch {
        column: String,
        expected: String,
        got: String,
    },

    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Convert into the pipeline error type, attributing IO and parsing
    /// failures to `dataset`
    pub fn into_core(self, dataset: &str) -> defect_core::Error {
        match self {
            Error::Core(err) => err,
            Error::UnknownDataset(name) => defect_core::Error::Configuration(format!(
                "no file registered for dataset '{name}'"
            )),
            other => defect_core::Error::Load {
                dataset: dataset.to_string(),
                message: other.to_string(),
            },
        }
    }
}
