//! End-to-end tests of the comparison pipeline over four datasets

mod common;

use common::{catalog, dataset, study, DATASETS};
use defect_compare::{
    ComparisonPipeline, EmptyGroupPolicy, PipelineOptions, ReportLayout, ReportTable,
};
use defect_core::{Dataset, Error, PropertyCatalog};
use defect_rank::RankSumMethod;
use proptest::prelude::*;

fn emphasized_names(table: &ReportTable) -> Vec<String> {
    table.emphasized().map(|row| row.display_name.clone()).collect()
}

#[test]
fn test_full_study_shape() {
    let table = ComparisonPipeline::new(catalog()).run(&study()).unwrap();

    assert_eq!(table.rows().len(), 12);
    assert_eq!(table.num_columns(), 9);
    assert_eq!(table.header().len(), 9);
    assert_eq!(table.header()[1], "Mirantis p-value");
    assert_eq!(table.header()[8], "Wikimedia effect-size");

    let names: Vec<_> = table.rows().iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names[5], "File mode");
    assert_eq!(names[6], "Hard-coded string");
    assert_eq!(names[8], "Lines of code");
    for cells in table.body() {
        assert_eq!(cells.len(), 9);
    }
}

#[test]
fn test_emphasis_requires_every_dataset() {
    let table = ComparisonPipeline::new(catalog()).run(&study()).unwrap();
    assert_eq!(emphasized_names(&table), vec!["Attribute", "URL"]);

    let include = &table.rows()[7];
    assert_eq!(include.label(), "Include");
    let significant: Vec<_> = include.cells.iter().map(|c| c.significant).collect();
    assert_eq!(significant, vec![true, true, true, false]);
}

#[test]
fn test_cell_values() {
    let table = ComparisonPipeline::new(catalog()).run(&study()).unwrap();
    let body = table.body();

    assert_eq!(
        body[0],
        vec![
            "**Attribute**", "0.001", "1.00", "0.001", "1.00", "0.001", "1.00", "0.001", "1.00"
        ]
    );
    // interleaved samples favour the clean group
    assert_eq!(body[1][2], "-0.17");
    assert_eq!(body[1][0], "Command");
}

#[test]
fn test_emphasis_ignores_dataset_order() {
    let forward = ComparisonPipeline::new(catalog()).run(&study()).unwrap();

    let mut reversed_datasets = study();
    reversed_datasets.reverse();
    let reversed = ComparisonPipeline::new(catalog()).run(&reversed_datasets).unwrap();

    assert_eq!(emphasized_names(&forward), emphasized_names(&reversed));
    assert_eq!(reversed.header()[1], "Wikimedia p-value");
    assert_eq!(reversed.datasets()[0], "Wikimedia");
}

#[test]
fn test_p_value_at_threshold_is_not_significant() {
    let catalog = PropertyCatalog::from_pairs([("Require", "Require")]).unwrap();
    let at_threshold = Dataset::new(
        "Openstack",
        vec![Some(1), Some(1), Some(1), Some(0), Some(0), Some(0)],
    )
    .with_column(
        "Require",
        vec![Some(4.0), Some(5.0), Some(6.0), Some(1.0), Some(2.0), Some(3.0)],
    )
    .unwrap();

    let table = ComparisonPipeline::new(catalog).run(&[at_threshold]).unwrap();
    let row = &table.rows()[0];
    assert_eq!(row.cells[0].p_display, "0.05");
    assert!(!row.cells[0].significant);
    assert!(!row.emphasized);
    assert_eq!(row.label(), "Require");
}

#[test]
fn test_p_values_only_layout() {
    let options = PipelineOptions::default().with_layout(ReportLayout::PValuesOnly);
    let table = ComparisonPipeline::new(catalog())
        .with_options(options)
        .run(&study())
        .unwrap();

    assert_eq!(table.num_columns(), 5);
    assert_eq!(
        table.header(),
        vec![
            "Property",
            "Mirantis p-value",
            "Mozilla p-value",
            "Openstack p-value",
            "Wikimedia p-value"
        ]
    );
    assert_eq!(emphasized_names(&table), vec!["Attribute", "URL"]);
}

#[test]
fn test_forced_asymptotic_method() {
    let options = PipelineOptions::default().with_method(RankSumMethod::Asymptotic);
    let outcomes = ComparisonPipeline::new(catalog())
        .with_options(options)
        .evaluate(&study())
        .unwrap();

    let cell = &outcomes[0].cells[0];
    let result = cell.result.as_ref().unwrap();
    assert_eq!(result.rank_sum.method, RankSumMethod::Asymptotic);
    assert!(cell.formatted.significant);
}

/// Openstack with every row labelled clean
fn without_defects() -> Dataset {
    common::PROPERTIES
        .iter()
        .fold(Dataset::new("Openstack", vec![Some(0); 12]), |dataset, (key, _)| {
            dataset.with_column(*key, common::separated()).unwrap()
        })
}

#[test]
fn test_empty_group_aborts_run() {
    let mut datasets = study();
    datasets[2] = without_defects();

    let err = ComparisonPipeline::new(catalog()).run(&datasets).unwrap_err();
    assert!(err.is_insufficient_data());
    assert!(err.to_string().contains("'Attribute' in dataset 'Openstack'"));
}

#[test]
fn test_empty_group_placeholder() {
    let mut datasets = study();
    datasets[2] = without_defects();

    let options = PipelineOptions::default().with_empty_group_policy(EmptyGroupPolicy::Placeholder);
    let table = ComparisonPipeline::new(catalog())
        .with_options(options)
        .run(&datasets)
        .unwrap();

    assert_eq!(table.rows().len(), 12);
    assert!(table.rows().iter().all(|row| row.cells[2].is_placeholder()));
    assert_eq!(table.body()[0][5], "n/a");
    assert!(emphasized_names(&table).is_empty());
}

#[test]
fn test_missing_column_aborts_run() {
    let mut datasets = study();
    datasets[1] = dataset("Mozilla", &[]);
    let partial = PropertyCatalog::from_pairs([("Attribute", "Attribute"), ("Ghost", "Ghost")])
        .unwrap();

    let err = ComparisonPipeline::new(partial).run(&datasets).unwrap_err();
    match err {
        Error::MissingColumn { dataset, column } => {
            assert_eq!(dataset, DATASETS[0]);
            assert_eq!(column, "Ghost");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_engine_matches_sequential() {
    use defect_core::ParallelEngine;

    let sequential = ComparisonPipeline::new(catalog()).run(&study()).unwrap();
    let parallel = ComparisonPipeline::new(catalog())
        .with_engine(ParallelEngine::with_num_threads(3).unwrap())
        .run(&study())
        .unwrap();
    assert_eq!(sequential, parallel);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_emphasis_iff_significant_everywhere(mask in prop::collection::vec(any::<bool>(), 4)) {
        let datasets: Vec<Dataset> = DATASETS
            .iter()
            .zip(&mask)
            .map(|(&name, &sep)| {
                let keys: &[&str] = if sep { &["Comment"] } else { &[] };
                dataset(name, keys)
            })
            .collect();

        let table = ComparisonPipeline::new(catalog()).run(&datasets).unwrap();
        let comment = &table.rows()[2];
        prop_assert_eq!(comment.emphasized, mask.iter().all(|&m| m));
        for (cell, &sep) in comment.cells.iter().zip(&mask) {
            prop_assert_eq!(cell.significant, sep);
        }
    }

    #[test]
    fn prop_emphasis_invariant_under_permutation(
        mask in prop::collection::vec(any::<bool>(), 4),
        rotation in 0usize..4,
    ) {
        let datasets: Vec<Dataset> = DATASETS
            .iter()
            .zip(&mask)
            .map(|(&name, &sep)| dataset(name, &[if sep { "File" } else { "SSH_KEY" }]))
            .collect();
        let mut rotated = datasets.clone();
        rotated.rotate_left(rotation);

        let base = ComparisonPipeline::new(catalog()).run(&datasets).unwrap();
        let moved = ComparisonPipeline::new(catalog()).run(&rotated).unwrap();
        prop_assert_eq!(emphasized_names(&base), emphasized_names(&moved));
    }
}
