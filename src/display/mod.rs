//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and reports for the
//! non-interactive commands.

pub mod expense;
pub mod report;

pub use expense::{format_category_list, format_expense_list, EMPTY_MESSAGE, NO_CATEGORY};
pub use report::format_summary;
