//! Expense CLI commands
//!
//! Listing and querying the expenses of the current session.

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::{format_category_list, format_expense_list};
use crate::error::ExpenseResult;
use crate::services::{ExpenseFilter, ExpenseService};
use crate::storage::Storage;

/// Filters for the `list` command
#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Only this category (case-insensitive)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only this day (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Start of the period, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End of the period, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl ListArgs {
    pub fn to_filter(&self) -> ExpenseFilter {
        let mut filter = ExpenseFilter::new();
        if let Some(category) = &self.category {
            filter = filter.category(category.as_str());
        }
        if let Some(date) = self.date {
            filter = filter.date(date);
        }
        if let Some(from) = self.from {
            filter = filter.since(from);
        }
        if let Some(to) = self.to {
            filter = filter.until(to);
        }
        filter
    }
}

/// Print expenses matching the given filters
pub fn handle_list_command(storage: &Storage, settings: &Settings, args: &ListArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let expenses = service.filter(&args.to_filter())?;
    print!("{}", format_expense_list(&expenses, settings));
    Ok(())
}

/// Print expenses from the last `days` days, newest first
pub fn handle_recent_command(
    storage: &Storage,
    settings: &Settings,
    days: Option<u32>,
) -> ExpenseResult<()> {
    let days = days.unwrap_or(settings.recent_days);
    let service = ExpenseService::new(storage);
    let expenses = service.recent(days)?;

    println!("Расходы за последние {} дн.", days);
    print!("{}", format_expense_list(&expenses, settings));
    Ok(())
}

/// Print the distinct categories
pub fn handle_categories_command(storage: &Storage) -> ExpenseResult<()> {
    let categories = ExpenseService::new(storage).categories()?;
    print!("{}", format_category_list(&categories));
    Ok(())
}
