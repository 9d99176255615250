//! Defect-proneness comparison of infrastructure-as-code script properties
//!
//! This crate ties the workspace together: it loads the configured datasets,
//! runs the one-sided Mann-Whitney test and Cliff's delta for every
//! (property, dataset) pair and renders the resulting report table.
//!
//! # Crates
//!
//! - `defect-core`: errors, datasets, property catalog, execution engines
//! - `defect-rank`: Mann-Whitney U test
//! - `defect-effect`: Cliff's delta
//! - `defect-compare`: evaluation, significance aggregation, report building
//! - `defect-polars`: CSV loading

pub mod cli;
pub mod config;
pub mod render;

pub use defect_compare::{
    ComparisonPipeline, EmptyGroupPolicy, PipelineOptions, ReportLayout, ReportTable,
};
pub use defect_core::{Dataset, DatasetLoader, Error, PropertyCatalog, PropertySpec, Result};
pub use defect_effect::CliffDelta;
pub use defect_polars::CsvDatasetLoader;
pub use defect_rank::{MannWhitneyU, RankSumMethod};

use anyhow::Context;
use cli::Cli;
use config::RunConfig;
use tracing::info;

/// Build the report described by the command line and render it
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = RunConfig::resolve(cli)?;
    let catalog = config.catalog().context("Invalid property list")?;
    let pipeline = ComparisonPipeline::new(catalog).with_options(config.options());
    let loader = config.loader();
    let names = config.dataset_names();
    info!(datasets = names.len(), properties = pipeline.catalog().len(), "starting comparison");

    #[cfg(feature = "parallel")]
    let table = {
        let engine = match cli.threads {
            Some(threads) => defect_core::ParallelEngine::with_num_threads(threads)?,
            None => defect_core::ParallelEngine::new(),
        };
        pipeline.with_engine(engine).run_with_loader(&loader, &names)?
    };
    #[cfg(not(feature = "parallel"))]
    let table = pipeline.run_with_loader(&loader, &names)?;

    render::render(&table, config.format)
}
