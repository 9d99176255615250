//! End-to-end comparison pipeline
//!
//! Validates the run, evaluates every (property, dataset) cell through an
//! execution engine, joins the results, folds significance per property in
//! dataset order and builds the report table.

use crate::{
    aggregate::SignificanceAggregator,
    evaluator::{CellOutcome, EmptyGroupPolicy, PropertyEvaluator},
    report::{PropertyRow, ReportBuilder, ReportLayout, ReportTable},
};
use defect_core::{
    validate_dataset_names, Dataset, DatasetLoader, ExecutionEngine, PropertyCatalog,
    PropertySpec, Result, SequentialEngine,
};
use defect_effect::CliffDelta;
use defect_rank::{MannWhitneyU, RankSumMethod};
use tracing::{info, instrument};

/// Tunables of a pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub layout: ReportLayout,
    pub empty_group_policy: EmptyGroupPolicy,
    pub method: RankSumMethod,
}

impl PipelineOptions {
    pub fn with_layout(mut self, layout: ReportLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_empty_group_policy(mut self, policy: EmptyGroupPolicy) -> Self {
        self.empty_group_policy = policy;
        self
    }

    pub fn with_method(mut self, method: RankSumMethod) -> Self {
        self.method = method;
        self
    }
}

/// All cells of one property, in dataset order
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyOutcome {
    pub property: PropertySpec,
    pub cells: Vec<CellOutcome>,
}

/// Cross-dataset comparison of every property in a catalog
#[derive(Debug, Clone)]
pub struct ComparisonPipeline<E = SequentialEngine> {
    catalog: PropertyCatalog,
    options: PipelineOptions,
    engine: E,
}

impl ComparisonPipeline<SequentialEngine> {
    /// Create a sequential pipeline with default options
    pub fn new(catalog: PropertyCatalog) -> Self {
        Self {
            catalog,
            options: PipelineOptions::default(),
            engine: SequentialEngine::new(),
        }
    }
}

impl<E: ExecutionEngine> ComparisonPipeline<E> {
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Swap the execution engine
    pub fn with_engine<F: ExecutionEngine>(self, engine: F) -> ComparisonPipeline<F> {
        ComparisonPipeline {
            catalog: self.catalog,
            options: self.options,
            engine,
        }
    }

    pub fn catalog(&self) -> &PropertyCatalog {
        &self.catalog
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    fn evaluator(&self) -> PropertyEvaluator<MannWhitneyU, CliffDelta> {
        PropertyEvaluator::new(
            MannWhitneyU::new().with_method(self.options.method),
            CliffDelta::new(),
        )
        .with_empty_group_policy(self.options.empty_group_policy)
    }

    /// Evaluate every cell without building a table
    ///
    /// Configuration and column problems are reported before any
    /// computation starts. Otherwise the first failing cell, in property
    /// then dataset order, aborts the run.
    #[instrument(skip_all, fields(properties = self.catalog.len(), datasets = datasets.len()))]
    pub fn evaluate(&self, datasets: &[Dataset]) -> Result<Vec<PropertyOutcome>> {
        validate_dataset_names(datasets.iter().map(Dataset::name))?;
        for dataset in datasets {
            dataset.require_columns(self.catalog.as_slice())?;
        }

        let evaluator = self.evaluator();
        let properties = self.catalog.as_slice();
        let n_datasets = datasets.len();

        let mut results = self
            .engine
            .execute_batch(properties.len() * n_datasets, |index| {
                evaluator.evaluate(&properties[index / n_datasets], &datasets[index % n_datasets])
            })
            .into_iter();

        let mut outcomes = Vec::with_capacity(properties.len());
        for property in properties {
            let cells = results
                .by_ref()
                .take(n_datasets)
                .collect::<Result<Vec<_>>>()?;
            outcomes.push(PropertyOutcome {
                property: property.clone(),
                cells,
            });
        }
        Ok(outcomes)
    }

    /// Evaluate every cell and assemble the report table
    pub fn run(&self, datasets: &[Dataset]) -> Result<ReportTable> {
        let outcomes = self.evaluate(datasets)?;

        let mut builder = ReportBuilder::new(
            datasets.iter().map(|d| d.name().to_string()).collect(),
        )
        .with_layout(self.options.layout);

        for outcome in outcomes {
            let emphasized = outcome
                .cells
                .iter()
                .fold(SignificanceAggregator::new(), |agg, cell| {
                    agg.observe(cell.formatted.significant)
                })
                .finish()?;
            let cells = outcome.cells.into_iter().map(|cell| cell.formatted).collect();
            builder.push_row(PropertyRow::new(
                outcome.property.display_name,
                emphasized,
                cells,
            ))?;
        }

        let table = builder.build()?;
        info!(
            rows = table.rows().len(),
            columns = table.num_columns(),
            emphasized = table.emphasized().count(),
            "comparison report built"
        );
        Ok(table)
    }

    /// Load the named datasets in order, then run
    pub fn run_with_loader<L: DatasetLoader>(
        &self,
        loader: &L,
        dataset_names: &[&str],
    ) -> Result<ReportTable> {
        validate_dataset_names(dataset_names.iter().copied())?;
        let datasets = dataset_names
            .iter()
            .map(|name| loader.load(name, self.catalog.as_slice()))
            .collect::<Result<Vec<_>>>()?;
        self.run(&datasets)
    }
}
