//! Expense service
//!
//! Business logic for recording, deleting and querying expenses on top of
//! the in-memory storage.

use chrono::{Days, Local, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::normalize_optional;
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    today: NaiveDate,
}

/// Criteria for narrowing down the expense list
///
/// Every criterion that is set must match. A range with only one bound is
/// open on the other side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category (blank values are ignored)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = normalize_optional(Some(category.into()));
        self
    }

    /// Filter by a single day
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Filter by an inclusive date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn since(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Whether no criterion is set
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.date.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Check that the range is not inverted
    pub fn validate(&self) -> ExpenseResult<()> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(ExpenseError::Validation(format!(
                    "начальная дата {} позже конечной {}",
                    start, end
                )));
            }
        }
        Ok(())
    }

    /// Whether an expense satisfies every criterion
    pub fn matches(&self, expense: &Expense) -> bool {
        self.category
            .as_deref()
            .map_or(true, |c| expense.in_category(c))
            && self.date.map_or(true, |d| expense.date == d)
            && expense.in_period(self.start_date, self.end_date)
    }

    /// Short human-readable description, used by the status bar
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(category) = &self.category {
            parts.push(format!("категория: {}", category));
        }
        if let Some(date) = self.date {
            parts.push(format!("дата: {}", date));
        }
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => parts.push(format!("{}..{}", start, end)),
            (Some(start), None) => parts.push(format!("с {}", start)),
            (None, Some(end)) => parts.push(format!("по {}", end)),
            (None, None) => {}
        }
        parts.join(", ")
    }
}

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub title: String,
    pub amount: Money,
    /// Defaults to today when not given
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub comment: Option<String>,
}

impl NewExpense {
    pub fn new(title: impl Into<String>, amount: Money) -> Self {
        Self {
            title: title.into(),
            amount,
            date: None,
            category: None,
            comment: None,
        }
    }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service using the local calendar date
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_today(storage, Local::now().date_naive())
    }

    /// Create a service with a fixed notion of "today"
    pub fn with_today(storage: &'a Storage, today: NaiveDate) -> Self {
        Self { storage, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Record a new expense
    pub fn create(&self, input: NewExpense) -> ExpenseResult<Expense> {
        let mut expense = Expense::new(input.title, input.amount, input.date.unwrap_or(self.today));
        expense.category = normalize_optional(input.category);
        expense.comment = normalize_optional(input.comment);

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        tracing::debug!(id = %expense.id, amount = %expense.amount, "expense recorded");

        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let removed = self
            .storage
            .expenses
            .delete(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        tracing::debug!(id = %id, "expense deleted");
        Ok(removed)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    pub fn by_category(&self, category: &str) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.get_by_category(category)
    }

    pub fn by_date(&self, date: NaiveDate) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.get_by_date(date)
    }

    /// Expenses between two dates, both inclusive
    pub fn by_period(&self, start: NaiveDate, end: NaiveDate) -> ExpenseResult<Vec<Expense>> {
        ExpenseFilter::new().date_range(start, end).validate()?;
        self.storage.expenses.get_by_date_range(start, end)
    }

    pub fn by_category_and_period(
        &self,
        category: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ExpenseResult<Vec<Expense>> {
        self.filter(&ExpenseFilter::new().category(category).date_range(start, end))
    }

    /// Expenses matching every criterion of the filter, insertion order kept
    pub fn filter(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        filter.validate()?;
        if filter.is_empty() {
            return self.list();
        }
        self.storage.expenses.find(|e| filter.matches(e))
    }

    /// Expenses from the last `days` days (today included), newest first
    pub fn recent(&self, days: u32) -> ExpenseResult<Vec<Expense>> {
        let start = self
            .today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        self.storage.expenses.get_since(start)
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> ExpenseResult<Vec<String>> {
        self.storage.expenses.distinct_categories()
    }
}
