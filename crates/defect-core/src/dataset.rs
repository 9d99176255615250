//! Columnar datasets and the defect-label group splitter
//!
//! A [`Dataset`] holds the `defect_status` label column next to one numeric
//! column per property. Missing entries are `None`; NaN values are treated
//! as missing when samples are drawn.

use crate::{catalog::PropertySpec, Error, Result};
use std::collections::HashMap;

/// Name of the binary label column
pub const DEFECT_STATUS_COLUMN: &str = "defect_status";

/// Label value marking a defect-prone artifact
pub const DEFECTIVE: i64 = 1;

/// Label value marking a defect-free artifact
pub const CLEAN: i64 = 0;

/// A named table of labelled observations
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    defect_status: Vec<Option<i64>>,
    columns: HashMap<String, Vec<Option<f64>>>,
}

/// The two samples drawn from a dataset for one property
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleGroups {
    /// Values of rows labelled defective (the treatment group)
    pub defective: Vec<f64>,
    /// Values of rows labelled clean (the control group)
    pub clean: Vec<f64>,
}

impl SampleGroups {
    /// Whether either side has no observations
    pub fn has_empty_group(&self) -> bool {
        self.defective.is_empty() || self.clean.is_empty()
    }
}

impl Dataset {
    /// Create a dataset from its label column
    pub fn new(name: impl Into<String>, defect_status: Vec<Option<i64>>) -> Self {
        Self {
            name: name.into(),
            defect_status,
            columns: HashMap::new(),
        }
    }

    /// Attach a property column
    ///
    /// Fails if the column length differs from the label column length.
    pub fn with_column(
        mut self,
        key: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Result<Self> {
        let key = key.into();
        if values.len() != self.defect_status.len() {
            return Err(Error::InvalidInput(format!(
                "column '{key}' in dataset '{}' has {} rows, expected {}",
                self.name,
                values.len(),
                self.defect_status.len()
            )));
        }
        self.columns.insert(key, values);
        Ok(self)
    }

    /// Dataset name as shown in report headers
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.defect_status.len()
    }

    /// Whether the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.defect_status.is_empty()
    }

    /// Whether a property column is present
    pub fn has_column(&self, key: &str) -> bool {
        self.columns.contains_key(key)
    }

    /// Check that every requested property column is present
    pub fn require_columns(&self, properties: &[PropertySpec]) -> Result<()> {
        for property in properties {
            if !self.has_column(&property.key) {
                return Err(Error::missing_column(&self.name, &property.key));
            }
        }
        Ok(())
    }

    /// Partition the values of one property by defect label
    ///
    /// A row contributes only when its label is 0 or 1 and its value is
    /// present and not NaN. Other rows are skipped without error.
    pub fn split_groups(&self, key: &str) -> Result<SampleGroups> {
        let values = self
            .columns
            .get(key)
            .ok_or_else(|| Error::missing_column(&self.name, key))?;

        let mut groups = SampleGroups::default();
        for (label, value) in self.defect_status.iter().zip(values) {
            let (Some(label), Some(value)) = (label, value) else {
                continue;
            };
            if value.is_nan() {
                continue;
            }
            match *label {
                DEFECTIVE => groups.defective.push(*value),
                CLEAN => groups.clean.push(*value),
                _ => {}
            }
        }

        tracing::trace!(
            dataset = %self.name,
            property = key,
            defective = groups.defective.len(),
            clean = groups.clean.len(),
            "split sample groups"
        );
        Ok(groups)
    }
}

/// Source of datasets for a pipeline run
pub trait DatasetLoader {
    /// Load the dataset registered under `name`, with at least the given
    /// property columns
    fn load(&self, name: &str, properties: &[PropertySpec]) -> Result<Dataset>;
}
