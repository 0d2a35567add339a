//! CLI commands for reports

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::ExpenseResult;
use crate::services::{AnalyticsService, ExpenseFilter, ExpenseService};
use crate::storage::Storage;

/// Period for the `summary` command
#[derive(Args, Debug, Default, Clone)]
pub struct SummaryArgs {
    /// Start of the period, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End of the period, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

/// Print totals by category, grand total and average per day
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    args: &SummaryArgs,
) -> ExpenseResult<()> {
    let mut filter = ExpenseFilter::new();
    if let Some(from) = args.from {
        filter = filter.since(from);
    }
    if let Some(to) = args.to {
        filter = filter.until(to);
    }

    let expenses = ExpenseService::new(storage).filter(&filter)?;
    let summary = AnalyticsService::summarize(&expenses);
    print!("{}", format_summary(&summary, settings));
    Ok(())
}
