//! CLI commands for data export
//!
//! Writes the session's expenses to stdout in the chosen format.

use clap::ValueEnum;
use std::io::{self, Write};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_csv, export_json, export_yaml};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (spreadsheet-compatible)
    Csv,
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Write every expense to stdout
pub fn handle_export_command(storage: &Storage, format: ExportFormat, pretty: bool) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(storage).list()?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match format {
        ExportFormat::Csv => export_csv(&expenses, &mut writer)?,
        ExportFormat::Json => export_json(&expenses, &mut writer, pretty)?,
        ExportFormat::Yaml => export_yaml(&expenses, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    tracing::debug!(count = expenses.len(), ?format, "expenses exported");
    Ok(())
}
