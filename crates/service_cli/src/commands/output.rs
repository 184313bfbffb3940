//! Output formatting
//!
//! Renders reports as a boxed table or pretty JSON, and writes sampled
//! Monte Carlo paths to CSV.

use std::fs::File;
use std::io;
use std::path::Path;

use clap::ValueEnum;
use pricer_pricing::SimulatedPaths;
use serde::Serialize;

use crate::Result;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Renders `value` as JSON or `rows` as a table, per `format`.
pub fn render<T: Serialize>(
    format: OutputFormat,
    title: &str,
    value: &T,
    rows: &[(String, String)],
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table(title, rows)),
    }
}

/// Two-column boxed table.
pub fn table(title: &str, rows: &[(String, String)]) -> String {
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let inner = (key_width + value_width + 3).max(title.chars().count());
    let value_width = inner - key_width - 3;

    let mut out = String::new();
    out.push_str(&format!("┌─{}─┐\n", "─".repeat(inner)));
    out.push_str(&format!("│ {:<inner$} │\n", title));
    out.push_str(&format!(
        "├─{}─┬─{}─┤\n",
        "─".repeat(key_width),
        "─".repeat(value_width)
    ));
    for (key, value) in rows {
        out.push_str(&format!("│ {:<key_width$} │ {:>value_width$} │\n", key, value));
    }
    out.push_str(&format!(
        "└─{}─┴─{}─┘",
        "─".repeat(key_width),
        "─".repeat(value_width)
    ));
    out
}

/// Writes `paths` with their time grid: one row per time point, one
/// column per path.
pub fn write_paths_csv<W: io::Write>(writer: W, paths: &SimulatedPaths) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(paths.n_paths() + 1);
    header.push("t".to_string());
    header.extend((0..paths.n_paths()).map(|i| format!("path_{}", i)));
    wtr.write_record(&header)?;

    for (j, t) in paths.time_grid().into_iter().enumerate() {
        let mut row = Vec::with_capacity(paths.n_paths() + 1);
        row.push(t.to_string());
        row.extend(paths.iter().map(|path| path[j].to_string()));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes `paths` to the CSV file at `path`.
pub fn write_paths_csv_file(path: &Path, paths: &SimulatedPaths) -> Result<()> {
    let file = File::create(path)?;
    write_paths_csv(file, paths)?;
    tracing::info!(file = %path.display(), n_paths = paths.n_paths(), "wrote sampled paths");
    Ok(())
}
