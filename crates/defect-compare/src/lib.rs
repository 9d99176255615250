//! Cross-dataset comparison of defect-prone and defect-free artifacts
//!
//! For every property of a [`PropertyCatalog`](defect_core::PropertyCatalog)
//! and every dataset, the pipeline splits the property values by defect
//! label, runs a one-sided Mann-Whitney test (defective > clean), computes
//! Cliff's delta and formats both for display. A property whose test is
//! significant on every dataset is emphasized in the report.
//!
//! # Example
//!
//! ```rust
//! use defect_compare::ComparisonPipeline;
//! use defect_core::{Dataset, PropertyCatalog};
//!
//! let catalog = PropertyCatalog::from_pairs([("URL", "URL")]).unwrap();
//! let labels = vec![Some(1), Some(1), Some(1), Some(0), Some(0), Some(0)];
//! let urls = vec![Some(4.0), Some(5.0), Some(6.0), Some(1.0), Some(2.0), Some(3.0)];
//! let dataset = Dataset::new("Mozilla", labels).with_column("URL", urls).unwrap();
//!
//! let table = ComparisonPipeline::new(catalog).run(&[dataset]).unwrap();
//! assert_eq!(table.body(), vec![vec!["URL", "0.05", "1.00"]]);
//! ```

pub mod aggregate;
mod evaluator;
pub mod format;
mod pipeline;
pub mod report;

pub use aggregate::{all_significant, SignificanceAggregator};
pub use evaluator::{CellOutcome, EmptyGroupPolicy, PropertyEvaluator, TestResult};
pub use format::{format_effect_size, format_p_value, is_significant, FormattedResult};
pub use pipeline::{ComparisonPipeline, PipelineOptions, PropertyOutcome};
pub use report::{PropertyRow, ReportBuilder, ReportLayout, ReportTable};
