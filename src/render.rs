//! Report renderers

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use defect_compare::ReportTable;

/// Render `table` in the requested format
pub fn render(table: &ReportTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(markdown(table)),
        OutputFormat::Text => Ok(text(table)),
        OutputFormat::Csv => csv(table),
    }
}

/// Pipe table with a header separator; emphasis is already markdown bold
pub fn markdown(table: &ReportTable) -> String {
    let header = table.header();
    let mut out = String::new();
    out.push_str(&markdown_row(&header));
    out.push_str(&markdown_row(&vec!["---".to_string(); header.len()]));
    for cells in table.body() {
        out.push_str(&markdown_row(&cells));
    }
    out
}

fn markdown_row(cells: &[String]) -> String {
    let escaped: Vec<String> = cells.iter().map(|cell| cell.replace('|', "\\|")).collect();
    format!("| {} |\n", escaped.join(" | "))
}

/// Left-aligned columns padded to the widest cell
pub fn text(table: &ReportTable) -> String {
    let header = table.header();
    let body = table.body();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for cells in std::iter::once(&header).chain(&body) {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Header row followed by one record per property
pub fn csv(table: &ReportTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.header())?;
    for cells in table.body() {
        writer.write_record(&cells)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}
