//! Export module for the expense tracker
//!
//! Writes the current expense set in one of three formats:
//! - CSV: spreadsheet-compatible, same columns the CSV import reads
//! - JSON: machine-readable array of records
//! - YAML: human-readable array of records
//!
//! Every format writes the records the import side accepts, so an export can
//! seed a later session through `--data`.

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_csv;
pub use json::export_json;
pub use yaml::export_yaml;

use crate::error::ExpenseError;

pub(crate) fn export_error(e: impl std::fmt::Display) -> ExpenseError {
    ExpenseError::Export(e.to_string())
}
