//! DataFrame to [`Dataset`] conversion

use crate::{Error, Result};
use defect_core::{Dataset, PropertySpec, DEFECT_STATUS_COLUMN};
use polars::prelude::*;

/// Extension trait turning a Polars DataFrame into a labelled dataset
pub trait DefectFrameExt {
    /// Extract the `defect_status` column and the given property columns
    ///
    /// # Arguments
    /// * `name` - Dataset name used in the report and in error messages
    /// * `properties` - Property columns to extract, in catalog order
    ///
    /// Missing columns fail with `MissingColumn`. A non-empty cell that does
    /// not parse as a number fails with `TypeMismatch`. Empty cells become
    /// missing values, as do labels that are not whole numbers.
    fn to_dataset(&self, name: &str, properties: &[PropertySpec]) -> Result<Dataset>;
}

impl DefectFrameExt for DataFrame {
    fn to_dataset(&self, name: &str, properties: &[PropertySpec]) -> Result<Dataset> {
        let labels = extract_labels(self, name)?;
        let mut dataset = Dataset::new(name, labels);
        for property in properties {
            let values = extract_values(self, name, &property.key)?;
            dataset = dataset.with_column(property.key.clone(), values)?;
        }
        Ok(dataset)
    }
}

fn lookup<'a>(df: &'a DataFrame, dataset: &str, column: &str) -> Result<&'a Column> {
    let column_ref = df
        .column(column)
        .map_err(|_| defect_core::Error::missing_column(dataset, column))?;
    match column_ref.dtype() {
        DataType::Float64
        | DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32
        | DataType::UInt16
        | DataType::UInt8
        | DataType::String
        | DataType::Null => Ok(column_ref),
        dt => Err(Error::TypeMismatch {
            column: column.to_string(),
            expected: "numeric".to_string(),
            got: format!("{dt:?}"),
        }),
    }
}

/// Cast to `Float64`, failing if any present cell does not parse
fn cast_numeric(column: &Column, name: &str) -> Result<Column> {
    let float_column = column.cast(&DataType::Float64)?;
    let unparsed = float_column.null_count().saturating_sub(column.null_count());
    if unparsed > 0 {
        return Err(Error::TypeMismatch {
            column: name.to_string(),
            expected: "numeric".to_string(),
            got: format!("{unparsed} non-numeric cell(s)"),
        });
    }
    Ok(float_column)
}

fn extract_labels(df: &DataFrame, dataset: &str) -> Result<Vec<Option<i64>>> {
    let column = lookup(df, dataset, DEFECT_STATUS_COLUMN)?;
    let float_column = cast_numeric(column, DEFECT_STATUS_COLUMN)?;
    // `1.0` reads as 1; fractional labels such as `0.4` are not a class
    Ok(float_column
        .f64()?
        .iter()
        .map(|label| label.filter(|v| v.fract() == 0.0).map(|v| v as i64))
        .collect())
}

fn extract_values(df: &DataFrame, dataset: &str, key: &str) -> Result<Vec<Option<f64>>> {
    let column = lookup(df, dataset, key)?;
    let float_column = cast_numeric(column, key)?;
    Ok(float_column.f64()?.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties() -> Vec<PropertySpec> {
        vec![
            PropertySpec::new("URL", "URL"),
            PropertySpec::new("Lines_of_code", "Lines of code"),
        ]
    }

    #[test]
    fn test_to_dataset() {
        let df = df![
            "defect_status" => [1i64, 0, 1, 0],
            "URL" => [Some(2.0), Some(0.0), None, Some(1.0)],
            "Lines_of_code" => [120i64, 40, 80, 35],
            "ignored" => ["a", "b", "c", "d"],
        ]
        .unwrap();

        let dataset = df.to_dataset("Mozilla", &properties()).unwrap();
        assert_eq!(dataset.name(), "Mozilla");
        assert_eq!(dataset.len(), 4);
        assert!(!dataset.has_column("ignored"));

        let groups = dataset.split_groups("URL").unwrap();
        assert_eq!(groups.defective, vec![2.0]);
        assert_eq!(groups.clean, vec![0.0, 1.0]);

        let groups = dataset.split_groups("Lines_of_code").unwrap();
        assert_eq!(groups.defective, vec![120.0, 80.0]);
        assert_eq!(groups.clean, vec![40.0, 35.0]);
    }

    #[test]
    fn test_float_labels() {
        let df = df![
            "defect_status" => [1.0f64, 0.0],
            "URL" => [3.0f64, 1.0],
        ]
        .unwrap();
        let dataset = df.to_dataset("Wikimedia", &properties()[..1]).unwrap();
        let groups = dataset.split_groups("URL").unwrap();
        assert_eq!(groups.defective, vec![3.0]);
        assert_eq!(groups.clean, vec![1.0]);
    }

    #[test]
    fn test_fractional_labels_ignored() {
        let df = df![
            "defect_status" => [1.0f64, 1.7, 0.0, 0.4],
            "URL" => [3.0f64, 9.0, 1.0, 2.0],
        ]
        .unwrap();
        let dataset = df.to_dataset("Wikimedia", &properties()[..1]).unwrap();
        let groups = dataset.split_groups("URL").unwrap();
        assert_eq!(groups.defective, vec![3.0]);
        assert_eq!(groups.clean, vec![1.0]);
    }

    #[test]
    fn test_non_numeric_cell_rejected() {
        let df = df![
            "defect_status" => [1i64, 1, 0, 0],
            "URL" => [Some("3"), Some("abc"), None, Some("2")],
        ]
        .unwrap();
        let err = df.to_dataset("Mozilla", &properties()[..1]).unwrap_err();
        match err {
            Error::TypeMismatch { column, got, .. } => {
                assert_eq!(column, "URL");
                assert_eq!(got, "1 non-numeric cell(s)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_property_column() {
        let df = df![
            "defect_status" => [1i64, 0],
            "URL" => [3.0f64, 1.0],
        ]
        .unwrap();
        let err = df.to_dataset("Mirantis", &properties()).unwrap_err();
        match err.into_core("Mirantis") {
            defect_core::Error::MissingColumn { dataset, column } => {
                assert_eq!(dataset, "Mirantis");
                assert_eq!(column, "Lines_of_code");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_label_column() {
        let df = df!["URL" => [3.0f64, 1.0]].unwrap();
        let err = df.to_dataset("Openstack", &properties()[..1]).unwrap_err();
        assert!(matches!(
            err,
            Error::Core(defect_core::Error::MissingColumn { ref column, .. })
                if column == DEFECT_STATUS_COLUMN
        ));
    }

    #[test]
    fn test_boolean_column_rejected() {
        let df = df![
            "defect_status" => [1i64, 0],
            "URL" => [true, false],
        ]
        .unwrap();
        let err = df.to_dataset("Openstack", &properties()[..1]).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }
}
