//! Analytics service
//!
//! Aggregations over recorded expenses: totals per category, grand totals
//! and the average spent per day.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::error::ExpenseResult;
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name, or the uncategorized label
    pub category: String,
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of all spending
    pub percentage: f64,
}

/// Everything the analytics view and `summary` command show
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    pub by_category: Vec<CategoryTotal>,
    pub total: Money,
    pub average_per_day: Money,
    pub expense_count: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

/// Service for spending analytics
pub struct AnalyticsService<'a> {
    storage: &'a Storage,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Totals grouped by category, largest first
    pub fn by_category(&self) -> ExpenseResult<Vec<CategoryTotal>> {
        Ok(category_totals(&self.storage.expenses.get_all()?))
    }

    /// Sum of all expenses
    pub fn total(&self) -> ExpenseResult<Money> {
        Ok(self.storage.expenses.get_all()?.iter().map(|e| e.amount).sum())
    }

    /// Sum of expenses between two dates, both inclusive
    pub fn total_for_period(&self, start: NaiveDate, end: NaiveDate) -> ExpenseResult<Money> {
        Ok(self
            .storage
            .expenses
            .get_by_date_range(start, end)?
            .iter()
            .map(|e| e.amount)
            .sum())
    }

    /// Average spent per day between the earliest and latest expense
    pub fn average_per_day(&self) -> ExpenseResult<Money> {
        Ok(average_per_day(&self.storage.expenses.get_all()?))
    }

    /// Full summary of the given expenses
    pub fn summarize(expenses: &[Expense]) -> SpendingSummary {
        SpendingSummary {
            by_category: category_totals(expenses),
            total: expenses.iter().map(|e| e.amount).sum(),
            average_per_day: average_per_day(expenses),
            expense_count: expenses.len(),
            first_date: expenses.iter().map(|e| e.date).min(),
            last_date: expenses.iter().map(|e| e.date).max(),
        }
    }

    /// Summary of every recorded expense
    pub fn summary(&self) -> ExpenseResult<SpendingSummary> {
        Ok(Self::summarize(&self.storage.expenses.get_all()?))
    }
}

fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut groups: HashMap<&str, (Money, usize)> = HashMap::new();
    for expense in expenses {
        let entry = groups
            .entry(expense.category_label())
            .or_insert((Money::zero(), 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let grand_total: Money = expenses.iter().map(|e| e.amount).sum();

    let mut totals: Vec<CategoryTotal> = groups
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            total,
            count,
            percentage: total.percentage_of(grand_total),
        })
        .collect();

    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    totals
}

fn average_per_day(expenses: &[Expense]) -> Money {
    let first = expenses.iter().map(|e| e.date).min();
    let last = expenses.iter().map(|e| e.date).max();

    match (first, last) {
        (Some(first), Some(last)) => {
            let days = (last - first).num_days() + 1;
            expenses.iter().map(|e| e.amount).sum::<Money>().div_round(days)
        }
        _ => Money::zero(),
    }
}
