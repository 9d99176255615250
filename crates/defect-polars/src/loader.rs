//! CSV-backed [`DatasetLoader`]

use crate::{traits::DefectFrameExt, Error, Result};
use defect_core::{Dataset, DatasetLoader, PropertySpec};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads datasets from CSV files registered by name
#[derive(Debug, Clone, Default)]
pub struct CsvDatasetLoader {
    files: Vec<(String, PathBuf)>,
}

impl CsvDatasetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the CSV file backing `name`; a later registration of the
    /// same name replaces the earlier one
    pub fn with_dataset(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let path = path.into();
        match self.files.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = path,
            None => self.files.push((name, path)),
        }
        self
    }

    /// Path registered for `name`
    pub fn path_for(&self, name: &str) -> Option<&Path> {
        self.files
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, path)| path.as_path())
    }

    /// Registered dataset names in registration order
    pub fn dataset_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|(name, _)| name.as_str())
    }

    fn read(&self, name: &str, properties: &[PropertySpec]) -> Result<Dataset> {
        let path = self
            .path_for(name)
            .ok_or_else(|| Error::UnknownDataset(name.to_string()))?;
        debug!(dataset = name, path = %path.display(), "reading csv");

        let df = read_csv(path)?;
        let dataset = df.to_dataset(name, properties)?;
        info!(
            dataset = name,
            rows = dataset.len(),
            properties = properties.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }
}

impl DatasetLoader for CsvDatasetLoader {
    fn load(&self, name: &str, properties: &[PropertySpec]) -> defect_core::Result<Dataset> {
        self.read(name, properties).map_err(|err| err.into_core(name))
    }
}

/// Read a headed CSV file into a DataFrame
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(df)
}
