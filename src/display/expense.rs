//! Expense display formatting
//!
//! Formats expense lists as tables for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::display::report::truncate;
use crate::models::{Expense, Money};

/// Shown in place of the list when there is nothing to show
pub const EMPTY_MESSAGE: &str = "Нет расходов";

/// Placeholder for a missing category or comment
pub const NO_CATEGORY: &str = "-";

const COMMENT_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Дата")]
    date: String,
    #[tabled(rename = "Название")]
    title: String,
    #[tabled(rename = "Категория")]
    category: String,
    #[tabled(rename = "Сумма")]
    amount: String,
    #[tabled(rename = "Комментарий")]
    comment: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            date: settings.format_date(expense.date),
            title: expense.title.clone(),
            category: expense
                .category
                .clone()
                .unwrap_or_else(|| NO_CATEGORY.to_string()),
            amount: expense.amount.format_with_symbol(&settings.currency_symbol),
            comment: expense
                .comment
                .as_deref()
                .map(|c| truncate(c, COMMENT_WIDTH))
                .unwrap_or_default(),
        }
    }
}

/// Format expenses as a table, one row per expense in the given order
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, settings))
        .collect();

    let table = Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()))
        .to_string();

    let total: Money = expenses.iter().map(|e| e.amount).sum();

    let mut output = table;
    output.push('\n');
    output.push_str(&format!(
        "\nВсего записей: {}, на сумму {}\n",
        expenses.len(),
        total.format_with_symbol(&settings.currency_symbol)
    ));
    output
}

/// Format category names, one per line
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "Нет категорий\n".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(category);
        output.push('\n');
    }
    output
}
