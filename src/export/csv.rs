//! CSV Export functionality
//!
//! Writes the columns `title,amount,date,category,comment`, the same header
//! the CSV import expects.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::export::export_error;
use crate::models::{Expense, ExpenseRecord};

/// Export expenses as CSV with a header row
pub fn export_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    if expenses.is_empty() {
        csv_writer
            .write_record(["title", "amount", "date", "category", "comment"])
            .map_err(export_error)?;
    }

    for expense in expenses {
        csv_writer
            .serialize(ExpenseRecord::from(expense))
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::import::{read_records, ImportFormat};
    use chrono::NaiveDate;

    #[test]
    fn test_csv_export() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 28).unwrap();
        let expenses = vec![
            Expense::new("Обед, бизнес-ланч", Money::from_minor(50000), date).with_category("Еда"),
            Expense::new("Такси", Money::from_minor(30050), date),
        ];

        let mut output = Vec::new();
        export_csv(&expenses, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("title,amount,date,category,comment"));
        assert_eq!(lines.next(), Some("\"Обед, бизнес-ланч\",500.0,2025-12-28,Еда,"));
        assert_eq!(lines.next(), Some("Такси,300.5,2025-12-28,,"));
    }

    #[test]
    fn test_empty_csv_has_header() {
        let mut output = Vec::new();
        export_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "title,amount,date,category,comment\n"
        );
    }

    #[test]
    fn test_csv_export_reads_back() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 28).unwrap();
        let expenses = vec![Expense::new("Кофе", Money::from_minor(25000), date).with_comment("утро")];

        let mut output = Vec::new();
        export_csv(&expenses, &mut output).unwrap();

        let records = read_records(output.as_slice(), ImportFormat::Csv).unwrap();
        assert_eq!(records[0].title, "Кофе");
        assert_eq!(records[0].amount, 250.0);
        assert_eq!(records[0].comment.as_deref(), Some("утро"));
    }
}
