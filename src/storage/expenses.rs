//! In-memory expense repository
//!
//! Expenses are kept in insertion order, which is also their display order.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

/// Repository holding the expenses of the current session
#[derive(Debug, Default)]
pub struct ExpenseRepository {
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Expense>>, ExpenseError> {
        self.data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Expense>>, ExpenseError> {
        self.data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Insert a new expense, or replace the one with the same ID in place
    pub fn upsert(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut data = self.write()?;
        match data.iter_mut().find(|e| e.id == expense.id) {
            Some(existing) => *existing = expense,
            None => data.push(expense),
        }
        Ok(())
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        Ok(self.read()?.iter().find(|e| e.id == id).cloned())
    }

    /// All expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self.read()?.clone())
    }

    /// Remove an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let mut data = self.write()?;
        Ok(data
            .iter()
            .position(|e| e.id == id)
            .map(|index| data.remove(index)))
    }

    pub fn count(&self) -> Result<usize, ExpenseError> {
        Ok(self.read()?.len())
    }

    /// Expenses matching a predicate, insertion order preserved
    pub fn find<F>(&self, predicate: F) -> Result<Vec<Expense>, ExpenseError>
    where
        F: Fn(&Expense) -> bool,
    {
        Ok(self.read()?.iter().filter(|e| predicate(e)).cloned().collect())
    }

    pub fn get_by_category(&self, category: &str) -> Result<Vec<Expense>, ExpenseError> {
        self.find(|e| e.in_category(category))
    }

    pub fn get_by_date(&self, date: NaiveDate) -> Result<Vec<Expense>, ExpenseError> {
        self.find(|e| e.date == date)
    }

    /// Expenses between two dates, both inclusive
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>, ExpenseError> {
        self.find(|e| e.in_period(Some(start), Some(end)))
    }

    /// Expenses dated on or after `start`, newest first
    pub fn get_since(&self, start: NaiveDate) -> Result<Vec<Expense>, ExpenseError> {
        let mut expenses = self.find(|e| e.date >= start)?;
        // stable sort keeps insertion order among same-day expenses
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    /// Distinct category names in first-seen order
    pub fn distinct_categories(&self) -> Result<Vec<String>, ExpenseError> {
        let data = self.read()?;
        let mut categories: Vec<String> = Vec::new();
        for category in data.iter().filter_map(|e| e.category.as_ref()) {
            if !categories.iter().any(|c| c.to_lowercase() == category.to_lowercase()) {
                categories.push(category.clone());
            }
        }
        Ok(categories)
    }
}
