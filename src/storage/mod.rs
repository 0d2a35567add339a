//! Storage layer for the expense tracker
//!
//! Expenses live in memory for the lifetime of the process. `Storage` is the
//! single handle the services and the TUI share.

pub mod expenses;

pub use expenses::ExpenseRepository;

use crate::error::ExpenseError;
use crate::models::Expense;

/// Main storage coordinator
#[derive(Debug, Default)]
pub struct Storage {
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-filled with expenses, kept in the given order
    pub fn with_expenses(expenses: impl IntoIterator<Item = Expense>) -> Result<Self, ExpenseError> {
        let storage = Self::new();
        for expense in expenses {
            storage.expenses.upsert(expense)?;
        }
        Ok(storage)
    }

    /// Whether no expenses have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.expenses.count().map(|n| n == 0).unwrap_or(true)
    }
}
