//! Report table assembly
//!
//! One row per property in catalog order, one column group per dataset in
//! caller order. Rows are immutable once built; emphasis is a flag on the
//! row, rendered as markdown bold around the display name.

use crate::format::FormattedResult;
use defect_core::{Error, Result};
use std::fmt;

/// Marker wrapped around the names of emphasized properties
pub const EMPHASIS_MARKER: &str = "**";

/// Header of the first column
pub const PROPERTY_HEADER: &str = "Property";

/// Which per-dataset columns the report carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportLayout {
    /// `<dataset> p-value` and `<dataset> effect-size` per dataset
    #[default]
    Full,
    /// `<dataset> p-value` per dataset
    PValuesOnly,
}

impl ReportLayout {
    /// Number of columns contributed by each dataset
    pub fn columns_per_dataset(&self) -> usize {
        match self {
            Self::Full => 2,
            Self::PValuesOnly => 1,
        }
    }
}

/// A finalized report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    pub display_name: String,
    pub emphasized: bool,
    /// One cell per dataset, in dataset order
    pub cells: Vec<FormattedResult>,
}

impl PropertyRow {
    pub fn new(display_name: impl Into<String>, emphasized: bool, cells: Vec<FormattedResult>) -> Self {
        Self {
            display_name: display_name.into(),
            emphasized,
            cells,
        }
    }

    /// Row label with the emphasis marker applied
    pub fn label(&self) -> String {
        if self.emphasized {
            format!("{EMPHASIS_MARKER}{}{EMPHASIS_MARKER}", self.display_name)
        } else {
            self.display_name.clone()
        }
    }
}

/// The finished comparison table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    layout: ReportLayout,
    datasets: Vec<String>,
    rows: Vec<PropertyRow>,
}

impl ReportTable {
    pub fn layout(&self) -> ReportLayout {
        self.layout
    }

    pub fn datasets(&self) -> &[String] {
        &self.datasets
    }

    pub fn rows(&self) -> &[PropertyRow] {
        &self.rows
    }

    pub fn num_columns(&self) -> usize {
        1 + self.datasets.len() * self.layout.columns_per_dataset()
    }

    /// Column headers in display order
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.num_columns());
        header.push(PROPERTY_HEADER.to_string());
        for dataset in &self.datasets {
            header.push(format!("{dataset} p-value"));
            if self.layout == ReportLayout::Full {
                header.push(format!("{dataset} effect-size"));
            }
        }
        header
    }

    /// String cells of one row, aligned with [`ReportTable::header`]
    pub fn row_cells(&self, row: &PropertyRow) -> Vec<String> {
        let mut cells = Vec::with_capacity(self.num_columns());
        cells.push(row.label());
        for cell in &row.cells {
            cells.push(cell.p_display.clone());
            if self.layout == ReportLayout::Full {
                cells.push(cell.delta_display.clone());
            }
        }
        cells
    }

    /// All rows as string cells
    pub fn body(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|row| self.row_cells(row)).collect()
    }

    /// Rows whose property reached significance on every dataset
    pub fn emphasized(&self) -> impl Iterator<Item = &PropertyRow> {
        self.rows.iter().filter(|row| row.emphasized)
    }
}

impl fmt::Display for ReportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header().join("\t"))?;
        for cells in self.body() {
            writeln!(f, "{}", cells.join("\t"))?;
        }
        Ok(())
    }
}

/// Collects finalized rows into a [`ReportTable`]
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    layout: ReportLayout,
    datasets: Vec<String>,
    rows: Vec<PropertyRow>,
}

impl ReportBuilder {
    pub fn new(datasets: Vec<String>) -> Self {
        Self {
            layout: ReportLayout::default(),
            datasets,
            rows: Vec::new(),
        }
    }

    pub fn with_layout(mut self, layout: ReportLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Append a row; it must carry exactly one cell per dataset
    pub fn push_row(&mut self, row: PropertyRow) -> Result<()> {
        if row.cells.len() != self.datasets.len() {
            return Err(Error::InvalidInput(format!(
                "row '{}' has {} cells, expected {}",
                row.display_name,
                row.cells.len(),
                self.datasets.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn build(self) -> Result<ReportTable> {
        defect_core::validate_dataset_names(self.datasets.iter().map(String::as_str))?;
        if self.rows.is_empty() {
            return Err(Error::Configuration("report has no property rows".to_string()));
        }
        Ok(ReportTable {
            layout: self.layout,
            datasets: self.datasets,
            rows: self.rows,
        })
    }
}
