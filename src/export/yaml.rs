//! YAML Export functionality
//!
//! Same records as the JSON export, preceded by a short comment header.

use std::io::Write;

use chrono::Utc;

use crate::error::ExpenseResult;
use crate::export::export_error;
use crate::models::{Expense, ExpenseRecord};

/// Export expenses as a YAML sequence of records
pub fn export_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let records: Vec<ExpenseRecord> = expenses.iter().map(ExpenseRecord::from).collect();

    writeln!(writer, "# Expense export").map_err(export_error)?;
    writeln!(writer, "# Generated: {}", Utc::now().to_rfc3339()).map_err(export_error)?;
    writeln!(writer, "# Records: {}", records.len()).map_err(export_error)?;

    serde_yaml::to_writer(writer, &records).map_err(export_error)?;

    Ok(())
}
