//! Expense model
//!
//! A single tracked expenditure: what it was, how much, when, and an optional
//! category and comment.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Label used wherever an expense without a category has to be named
pub const UNCATEGORIZED_LABEL: &str = "Без категории";

/// A tracked expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Short description ("Обед", "Такси")
    pub title: String,

    /// How much was spent
    pub amount: Money,

    /// Day the money was spent
    pub date: NaiveDate,

    /// Optional category ("Еда", "Транспорт")
    #[serde(default)]
    pub category: Option<String>,

    /// Optional free-form comment
    #[serde(default)]
    pub comment: Option<String>,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense without category or comment
    pub fn new(title: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            title: title.into().trim().to_string(),
            amount,
            date,
            category: None,
            comment: None,
            created_at: Utc::now(),
        }
    }

    /// Set the category; blank values clear it
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = normalize_optional(Some(category.into()));
        self
    }

    /// Set the comment; blank values clear it
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = normalize_optional(Some(comment.into()));
        self
    }

    /// Category name for grouping and display
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED_LABEL)
    }

    /// Case-insensitive category match; uncategorized expenses never match
    pub fn in_category(&self, category: &str) -> bool {
        let wanted = category.trim().to_lowercase();
        self.category
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == wanted)
    }

    /// Whether the expense falls within an inclusive, possibly open-ended range
    pub fn in_period(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
        start.map_or(true, |s| self.date >= s) && end.map_or(true, |e| self.date <= e)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.title, self.amount)
    }
}

/// Trim an optional string and drop it when blank
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("название не может быть пустым")]
    EmptyTitle,

    #[error("сумма не может быть отрицательной: {0}")]
    NegativeAmount(Money),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_trims_title() {
        let expense = Expense::new("  Обед ", Money::from_minor(50000), date(2025, 12, 28));
        assert_eq!(expense.title, "Обед");
        assert!(expense.category.is_none());
        assert!(expense.comment.is_none());
    }

    #[test]
    fn test_blank_category_and_comment_are_dropped() {
        let expense = Expense::new("Такси", Money::from_minor(30000), date(2025, 12, 1))
            .with_category("   ")
            .with_comment("");
        assert!(expense.category.is_none());
        assert!(expense.comment.is_none());
        assert_eq!(expense.category_label(), UNCATEGORIZED_LABEL);
    }

    #[test]
    fn test_in_category_ignores_case() {
        let expense = Expense::new("Обед", Money::from_minor(50000), date(2025, 12, 28))
            .with_category("Еда");
        assert!(expense.in_category("еда"));
        assert!(expense.in_category(" ЕДА "));
        assert!(!expense.in_category("Транспорт"));
    }

    #[test]
    fn test_in_period_is_inclusive_and_open_ended() {
        let expense = Expense::new("Кофе", Money::from_minor(20000), date(2025, 12, 10));
        assert!(expense.in_period(Some(date(2025, 12, 10)), Some(date(2025, 12, 10))));
        assert!(expense.in_period(Some(date(2025, 12, 1)), None));
        assert!(expense.in_period(None, Some(date(2025, 12, 31))));
        assert!(!expense.in_period(Some(date(2025, 12, 11)), None));
        assert!(expense.in_period(None, None));
    }

    #[test]
    fn test_validate() {
        let ok = Expense::new("Юбка", Money::from_minor(150000), date(2025, 12, 28));
        assert!(ok.validate().is_ok());

        let empty = Expense::new("  ", Money::from_minor(100), date(2025, 12, 28));
        assert_eq!(empty.validate(), Err(ExpenseValidationError::EmptyTitle));

        let negative = Expense::new("Возврат", Money::from_minor(-100), date(2025, 12, 28));
        assert!(matches!(
            negative.validate(),
            Err(ExpenseValidationError::NegativeAmount(_))
        ));
    }
}
