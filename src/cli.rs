//! CLI argument parsing for defect-stats

use clap::{Parser, ValueEnum};
use defect_compare::{EmptyGroupPolicy, ReportLayout};
use serde::Deserialize;
use std::path::PathBuf;

/// Output format of the report table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Markdown pipe table (default)
    #[default]
    Markdown,
    /// Aligned plain-text columns
    Text,
    /// CSV for spreadsheet analysis
    Csv,
}

/// Columns shown per dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutChoice {
    /// p-value and effect size
    #[default]
    Full,
    /// p-value only
    PValues,
}

impl From<LayoutChoice> for ReportLayout {
    fn from(choice: LayoutChoice) -> Self {
        match choice {
            LayoutChoice::Full => ReportLayout::Full,
            LayoutChoice::PValues => ReportLayout::PValuesOnly,
        }
    }
}

/// Handling of properties with an empty defective or clean group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyGroupChoice {
    /// Stop with an error
    #[default]
    Abort,
    /// Print `n/a` and treat the cell as not significant
    Placeholder,
}

impl From<EmptyGroupChoice> for EmptyGroupPolicy {
    fn from(choice: EmptyGroupChoice) -> Self {
        match choice {
            EmptyGroupChoice::Abort => EmptyGroupPolicy::Abort,
            EmptyGroupChoice::Placeholder => EmptyGroupPolicy::Placeholder,
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(name = "defect-stats")]
#[command(version)]
#[command(
    about = "Compare script properties between defect-prone and defect-free scripts",
    long_about = None
)]
pub struct Cli {
    /// TOML run file listing datasets and properties
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory that relative dataset paths are resolved against
    #[arg(short = 'd', long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format [default: markdown]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Report layout [default: full]
    #[arg(long, value_enum)]
    pub layout: Option<LayoutChoice>,

    /// Empty group handling [default: abort]
    #[arg(long = "empty-groups", value_enum)]
    pub empty_groups: Option<EmptyGroupChoice>,

    /// Write the report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of worker threads (defaults to all cores)
    #[cfg(feature = "parallel")]
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Enable debug logging of every evaluated cell
    #[arg(long)]
    pub debug: bool,
}
