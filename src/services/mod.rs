//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, defaults and aggregations.

pub mod analytics;
pub mod expense;
pub mod import;

pub use analytics::{AnalyticsService, CategoryTotal, SpendingSummary};
pub use expense::{ExpenseFilter, ExpenseService, NewExpense};
pub use import::{ImportFormat, ImportService, ImportSummary};
