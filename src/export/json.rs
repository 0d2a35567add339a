//! JSON Export functionality

use std::io::Write;

use crate::error::ExpenseResult;
use crate::export::export_error;
use crate::models::{Expense, ExpenseRecord};

/// Export expenses as a JSON array of records
pub fn export_json<W: Write>(expenses: &[Expense], writer: &mut W, pretty: bool) -> ExpenseResult<()> {
    let records: Vec<ExpenseRecord> = expenses.iter().map(ExpenseRecord::from).collect();

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &records).map_err(export_error)?;
    } else {
        serde_json::to_writer(&mut *writer, &records).map_err(export_error)?;
    }
    writeln!(writer).map_err(export_error)?;

    Ok(())
}
