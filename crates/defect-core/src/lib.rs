//! Core types for defect-proneness comparisons
//!
//! This crate provides the pieces every other defect-stats crate builds on:
//!
//! - **Errors**: one [`Error`] taxonomy shared by the whole workspace
//! - **Datasets**: columnar [`Dataset`] values and the label-based
//!   [`Dataset::split_groups`] splitter
//! - **Catalogs**: the ordered, validated [`PropertyCatalog`]
//! - **Execution**: sequential and Rayon-backed engines for dispatching
//!   independent evaluations
//!
//! # Example
//!
//! ```rust
//! use defect_core::Dataset;
//!
//! let dataset = Dataset::new("Mozilla", vec![Some(1), Some(0), Some(1), None])
//!     .with_column("Lines_of_code", vec![Some(120.0), Some(40.0), None, Some(8.0)])
//!     .unwrap();
//!
//! let groups = dataset.split_groups("Lines_of_code").unwrap();
//! assert_eq!(groups.defective, vec![120.0]);
//! assert_eq!(groups.clean, vec![40.0]);
//! ```

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod execution;

pub use catalog::{validate_dataset_names, PropertyCatalog, PropertySpec};
pub use dataset::{
    Dataset, DatasetLoader, SampleGroups, CLEAN, DEFECTIVE, DEFECT_STATUS_COLUMN,
};
pub use error::{Error, Result};
pub use execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};
