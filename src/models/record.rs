//! Flat, serializable form of an expense
//!
//! This is the shape files are read from and written to: amounts are plain
//! decimal numbers and the ID is left out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::expense::Expense;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub title: String,
    pub amount: f64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl From<&Expense> for ExpenseRecord {
    fn from(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: expense.amount.to_major_f64(),
            date: Some(expense.date),
            category: expense.category.clone(),
            comment: expense.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_from_expense() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 28).unwrap();
        let expense = Expense::new("Юбка", Money::from_minor(150050), date).with_category("Покупки");

        let record = ExpenseRecord::from(&expense);
        assert_eq!(record.title, "Юбка");
        assert_eq!(record.amount, 1500.5);
        assert_eq!(record.date, Some(date));
        assert_eq!(record.category.as_deref(), Some("Покупки"));
        assert!(record.comment.is_none());
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let record: ExpenseRecord =
            serde_json::from_str(r#"{"title": "Обед", "amount": 500.0}"#).unwrap();
        assert_eq!(record.title, "Обед");
        assert!(record.date.is_none());
        assert!(record.category.is_none());
    }
}
