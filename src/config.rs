//! Run configuration
//!
//! A run file lists the datasets and properties to compare, in report
//! order. Omitted sections fall back to the built-in IaC defect study.
//!
//! # Example run file
//!
//! ```toml
//! data_dir = "authors_data"
//! layout = "p-values"
//! empty_groups = "placeholder"
//!
//! [[dataset]]
//! name = "Mozilla"
//! path = "IST_MOZ.csv"
//!
//! [[property]]
//! key = "Hard_coded_string"
//! name = "Hard-coded string"
//! ```

use crate::cli::{Cli, EmptyGroupChoice, LayoutChoice, OutputFormat};
use anyhow::{Context, Result};
use defect_compare::PipelineOptions;
use defect_core::PropertyCatalog;
use defect_polars::CsvDatasetLoader;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory holding the study CSV files
pub const DEFAULT_DATA_DIR: &str = "authors_data";

const STUDY_DATASETS: [(&str, &str); 4] = [
    ("Mirantis", "IST_MIR.csv"),
    ("Mozilla", "IST_MOZ.csv"),
    ("Openstack", "IST_OST.csv"),
    ("Wikimedia", "IST_WIK.csv"),
];

const STUDY_PROPERTIES: [(&str, &str); 12] = [
    ("Attribute", "Attribute"),
    ("Command", "Command"),
    ("Comment", "Comment"),
    ("Ensure", "Ensure"),
    ("File", "File"),
    ("File_mode", "File mode"),
    ("Hard_coded_string", "Hard-coded string"),
    ("Include", "Include"),
    ("Lines_of_code", "Lines of code"),
    ("Require", "Require"),
    ("SSH_KEY", "SSH_KEY"),
    ("URL", "URL"),
];

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatasetEntry {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PropertyEntry {
    /// Column name in the CSV files
    pub key: String,
    /// Label in the report; defaults to the key
    pub name: Option<String>,
}

/// Root of a TOML run file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub data_dir: Option<PathBuf>,
    #[serde(default = "study_datasets")]
    pub dataset: Vec<DatasetEntry>,
    #[serde(default = "study_properties")]
    pub property: Vec<PropertyEntry>,
    #[serde(default)]
    pub layout: LayoutChoice,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub empty_groups: EmptyGroupChoice,
}

fn study_datasets() -> Vec<DatasetEntry> {
    STUDY_DATASETS
        .iter()
        .map(|(name, file)| DatasetEntry {
            name: name.to_string(),
            path: PathBuf::from(file),
        })
        .collect()
}

fn study_properties() -> Vec<PropertyEntry> {
    STUDY_PROPERTIES
        .iter()
        .map(|(key, name)| PropertyEntry {
            key: key.to_string(),
            name: Some(name.to_string()),
        })
        .collect()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::study()
    }
}

impl RunConfig {
    /// The four-dataset, twelve-property IaC defect study
    pub fn study() -> Self {
        Self {
            data_dir: Some(PathBuf::from(DEFAULT_DATA_DIR)),
            dataset: study_datasets(),
            property: study_properties(),
            layout: LayoutChoice::default(),
            format: OutputFormat::default(),
            empty_groups: EmptyGroupChoice::default(),
        }
    }

    /// Load a run file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid run file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    /// The run file named on the command line, or the study defaults,
    /// with command-line flags applied on top
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::study(),
        };
        if let Some(dir) = &cli.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(layout) = cli.layout {
            config.layout = layout;
        }
        if let Some(format) = cli.format {
            config.format = format;
        }
        if let Some(empty_groups) = cli.empty_groups {
            config.empty_groups = empty_groups;
        }
        Ok(config)
    }

    /// Validated property catalog in configured order
    pub fn catalog(&self) -> defect_core::Result<PropertyCatalog> {
        PropertyCatalog::from_pairs(self.property.iter().map(|entry| {
            let name = entry.name.clone().unwrap_or_else(|| entry.key.clone());
            (entry.key.clone(), name)
        }))
    }

    pub fn options(&self) -> PipelineOptions {
        PipelineOptions::default()
            .with_layout(self.layout.into())
            .with_empty_group_policy(self.empty_groups.into())
    }

    pub fn dataset_names(&self) -> Vec<&str> {
        self.dataset.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Dataset path with relative paths placed under `data_dir`
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.data_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn loader(&self) -> CsvDatasetLoader {
        self.dataset
            .iter()
            .fold(CsvDatasetLoader::new(), |loader, entry| {
                loader.with_dataset(entry.name.clone(), self.resolve_path(&entry.path))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_study_defaults() {
        let config = RunConfig::study();
        assert_eq!(
            config.dataset_names(),
            vec!["Mirantis", "Mozilla", "Openstack", "Wikimedia"]
        );
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.display_name("File_mode"), Some("File mode"));
        assert_eq!(catalog.display_name("Hard_coded_string"), Some("Hard-coded string"));
        assert_eq!(catalog.display_name("Lines_of_code"), Some("Lines of code"));

        let loader = config.loader();
        assert_eq!(
            loader.path_for("Wikimedia"),
            Some(Path::new("authors_data/IST_WIK.csv"))
        );
    }

    #[test]
    fn test_parse_run_file() {
        let toml = r#"
            layout = "p-values"
            empty_groups = "placeholder"

            [[dataset]]
            name = "Mozilla"
            path = "/data/moz.csv"

            [[dataset]]
            name = "Puppet"
            path = "puppet.csv"

            [[property]]
            key = "URL"

            [[property]]
            key = "SSH_KEY"
            name = "SSH key"
        "#;
        let config = RunConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.layout, LayoutChoice::PValues);
        assert_eq!(config.empty_groups, EmptyGroupChoice::Placeholder);
        assert_eq!(config.format, OutputFormat::Markdown);
        assert_eq!(config.dataset_names(), vec!["Mozilla", "Puppet"]);

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.display_name("URL"), Some("URL"));
        assert_eq!(catalog.display_name("SSH_KEY"), Some("SSH key"));

        // no data_dir: relative paths stay relative to the working directory
        let loader = config.loader();
        assert_eq!(loader.path_for("Puppet"), Some(Path::new("puppet.csv")));
        assert_eq!(loader.path_for("Mozilla"), Some(Path::new("/data/moz.csv")));
    }

    #[test]
    fn test_omitted_sections_use_study() {
        let config = RunConfig::from_toml_str("format = \"csv\"").unwrap();
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.dataset.len(), 4);
        assert_eq!(config.property.len(), 12);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(RunConfig::from_toml_str("colour = \"blue\"").is_err());
        assert!(RunConfig::from_toml_str("layout = \"wide\"").is_err());
    }

    #[test]
    fn test_duplicate_property_rejected() {
        let toml = r#"
            [[property]]
            key = "URL"

            [[property]]
            key = "URL"
        "#;
        let config = RunConfig::from_toml_str(toml).unwrap();
        assert!(matches!(
            config.catalog(),
            Err(defect_core::Error::Configuration(_))
        ));
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "defect-stats",
            "--data-dir",
            "elsewhere",
            "--layout",
            "p-values",
            "--format",
            "text",
        ]);
        let config = RunConfig::resolve(&cli).unwrap();
        assert_eq!(config.layout, LayoutChoice::PValues);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.empty_groups, EmptyGroupChoice::Abort);
        assert_eq!(
            config.loader().path_for("Mirantis"),
            Some(Path::new("elsewhere/IST_MIR.csv"))
        );
    }
}
