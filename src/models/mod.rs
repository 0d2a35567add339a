//! Core data models for the expense tracker

pub mod expense;
pub mod ids;
pub mod money;
pub mod record;

pub use expense::{Expense, ExpenseValidationError, UNCATEGORIZED_LABEL};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use record::ExpenseRecord;
