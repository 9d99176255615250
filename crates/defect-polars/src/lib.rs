//! Polars integration for loading labelled defect datasets
//!
//! Each dataset is a headed CSV file with a `defect_status` column (1 for
//! defect-prone, 0 for defect-free) and one numeric column per property.
//!
//! # Example
//!
//! ```rust,ignore
//! use defect_core::{DatasetLoader, PropertySpec};
//! use defect_polars::CsvDatasetLoader;
//!
//! let loader = CsvDatasetLoader::new().with_dataset("Mozilla", "authors_data/IST_MOZ.csv");
//! let dataset = loader.load("Mozilla", &[PropertySpec::new("URL", "URL")])?;
//! ```

mod error;
mod loader;
mod traits;

pub use error::{Error, Result};
pub use loader::{read_csv, CsvDatasetLoader};
pub use traits::DefectFrameExt;
