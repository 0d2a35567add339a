//! Import service
//!
//! Seeds the current session from a JSON, YAML or CSV file. Every record is
//! checked before anything is stored, so a bad file leaves the session as it
//! was.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseRecord, Money};
use crate::services::expense::{ExpenseService, NewExpense};

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Yaml,
    Csv,
}

impl ImportFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> ExpenseResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("csv") => Ok(Self::Csv),
            _ => Err(ExpenseError::Import(format!(
                "unsupported file type: {} (expected .json, .yaml or .csv)",
                path.display()
            ))),
        }
    }
}

/// Result of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
}

/// Parse records from a reader
///
/// CSV input needs a header row naming the columns
/// `title,amount,date,category,comment`; only `title` and `amount` are required.
pub fn read_records<R: Read>(reader: R, format: ImportFormat) -> ExpenseResult<Vec<ExpenseRecord>> {
    match format {
        ImportFormat::Json => Ok(serde_json::from_reader(reader)?),
        ImportFormat::Yaml => Ok(serde_yaml::from_reader(reader)?),
        ImportFormat::Csv => {
            let mut csv_reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(reader);
            csv_reader
                .deserialize()
                .collect::<Result<Vec<ExpenseRecord>, csv::Error>>()
                .map_err(ExpenseError::from)
        }
    }
}

/// Service for importing expenses into the current session
pub struct ImportService<'a> {
    expenses: &'a ExpenseService<'a>,
}

impl<'a> ImportService<'a> {
    pub fn new(expenses: &'a ExpenseService<'a>) -> Self {
        Self { expenses }
    }

    /// Import every record of a file, format chosen by extension
    pub fn import_file(&self, path: &Path) -> ExpenseResult<ImportSummary> {
        let format = ImportFormat::from_path(path)?;
        let file = File::open(path).map_err(|e| {
            ExpenseError::Import(format!("cannot open {}: {}", path.display(), e))
        })?;

        let records = read_records(BufReader::new(file), format)?;
        let summary = self.import_records(records)?;
        tracing::info!(
            path = %path.display(),
            imported = summary.imported,
            "expenses imported"
        );
        Ok(summary)
    }

    /// Import records; the first invalid one aborts the whole batch
    pub fn import_records(&self, records: Vec<ExpenseRecord>) -> ExpenseResult<ImportSummary> {
        let today = self.expenses.today();
        let mut inputs = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let input = to_new_expense(record).map_err(|e| record_error(index, e))?;

            let probe = Expense::new(input.title.clone(), input.amount, input.date.unwrap_or(today));
            probe
                .validate()
                .map_err(|e| record_error(index, e.to_string()))?;

            inputs.push(input);
        }

        let imported = inputs.len();
        for input in inputs {
            self.expenses.create(input)?;
        }

        Ok(ImportSummary { imported })
    }
}

fn to_new_expense(record: ExpenseRecord) -> Result<NewExpense, String> {
    let amount = Money::from_major(record.amount).map_err(|e| e.to_string())?;
    Ok(NewExpense {
        title: record.title,
        amount,
        date: record.date,
        category: record.category,
        comment: record.comment,
    })
}

fn record_error(index: usize, message: impl std::fmt::Display) -> ExpenseError {
    ExpenseError::Import(format!("record {}: {}", index + 1, message))
}
