//! Export Module
//!
//! Writes the records visible on the current page, filters applied.
//!
//! - `e` or `:export` → CSV
//! - `:export json` → JSON
//! - Files saved to the configured export directory

mod csv_export;
mod json_export;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::Local;
use serde::Serialize;

use crate::core::Action;
use crate::domain::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

/// Write `records` under `dir` and return the file path.
pub fn write_records<R: Record + Serialize>(
    dir: &Path,
    prefix: &str,
    records: &[&R],
    format: ExportFormat,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;
    let path = dir.join(generate_filename(prefix, format.extension()));
    match format {
        ExportFormat::Csv => csv_export::write_records(&path, records)?,
        ExportFormat::Json => json_export::write_records(&path, records)?,
    }
    Ok(path)
}

/// Export and turn the outcome into a status line message.
pub fn export_page<R: Record + Serialize>(
    dir: &Path,
    prefix: &str,
    records: &[&R],
    format: ExportFormat,
) -> Action {
    if records.is_empty() {
        return Action::warn(format!("No {prefix} to export"));
    }
    match write_records(dir, prefix, records, format) {
        Ok(path) => {
            tracing::info!(count = records.len(), path = %path.display(), "exported {prefix}");
            Action::info(format!("Exported {} {} to {}", records.len(), prefix, path.display()))
        }
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "export failed");
            Action::error(format!("Export failed: {err:#}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NotifyLevel;
    use crate::domain::seed;

    #[test]
    fn test_csv_has_header_and_filtered_rows() {
        let dir = tempfile::tempdir().unwrap();
        let expenses = seed::expenses();
        let approved: Vec<_> = expenses
            .iter()
            .filter(|e| e.status.title() == "Approved")
            .collect();

        let path = write_records(dir.path(), "expenses", &approved, ExportFormat::Csv).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("id,description,amount"));
        assert!(lines[1].contains("Office Depot"));
    }

    #[test]
    fn test_json_is_an_array_of_records() {
        let dir = tempfile::tempdir().unwrap();
        let tasks = seed::tasks();
        let refs: Vec<_> = tasks.iter().collect();

        let path = write_records(dir.path(), "tasks", &refs, ExportFormat::Json).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[5]["name"], "Equipment Repair");
    }

    #[test]
    fn test_empty_page_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let none: Vec<&crate::domain::expense::Expense> = Vec::new();
        let action = export_page(dir.path(), "expenses", &none, ExportFormat::Csv);
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Warn)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
