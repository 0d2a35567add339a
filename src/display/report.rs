//! Report formatting utilities for terminal output
//!
//! Provides the spending summary plus small helpers shared by the other
//! formatters.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use crate::config::Settings;
use crate::display::expense::EMPTY_MESSAGE;
use crate::services::SpendingSummary;

const BAR_WIDTH: usize = 20;

/// Format the spending summary: category breakdown, total and daily average
pub fn format_summary(summary: &SpendingSummary, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str("Сводка расходов\n");
    output.push_str(&separator(40));
    output.push('\n');

    if summary.expense_count == 0 {
        output.push_str(EMPTY_MESSAGE);
        output.push('\n');
        return output;
    }

    if let (Some(first), Some(last)) = (summary.first_date, summary.last_date) {
        output.push_str(&format!(
            "Период: {} .. {}\n",
            settings.format_date(first),
            settings.format_date(last)
        ));
    }
    output.push('\n');

    let max_total = summary
        .by_category
        .iter()
        .map(|c| c.total.to_major_f64())
        .fold(0.0, f64::max);

    let mut builder = Builder::default();
    builder.push_record(["Категория", "Сумма", "Кол-во", "Доля", ""]);
    for line in &summary.by_category {
        builder.push_record([
            line.category.clone(),
            line.total.format_with_symbol(symbol),
            line.count.to_string(),
            format_percentage(line.percentage),
            format_bar(line.total.to_major_f64(), max_total, BAR_WIDTH),
        ]);
    }

    let table = builder
        .build()
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
        .to_string();
    output.push_str(&table);
    output.push_str("\n\n");

    output.push_str(&format!(
        "Итого:            {}\n",
        summary.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "В среднем в день: {}\n",
        summary.average_per_day.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Записей:          {}\n", summary.expense_count));

    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use crate::services::AnalyticsService;
    use chrono::NaiveDate;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Привет, мир", 7), "Прив...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
    }

    #[test]
    fn test_empty_summary() {
        let summary = AnalyticsService::summarize(&[]);
        let output = format_summary(&summary, &Settings::default());
        assert!(output.contains(EMPTY_MESSAGE));
        assert!(!output.contains("Итого"));
    }

    #[test]
    fn test_summary_lists_categories_and_totals() {
        let day = |d| NaiveDate::from_ymd_opt(2025, 12, d).unwrap();
        let expenses = vec![
            Expense::new("Обед", Money::from_minor(30000), day(1)).with_category("Еда"),
            Expense::new("Такси", Money::from_minor(10000), day(2)),
        ];

        let summary = AnalyticsService::summarize(&expenses);
        let output = format_summary(&summary, &Settings::default());

        assert!(output.contains("Период: 2025-12-01 .. 2025-12-02"));
        assert!(output.contains("Еда"));
        assert!(output.contains("Без категории"));
        assert!(output.contains("75%"));
        assert!(output.contains("Итого:            400.00 ₽"));
        assert!(output.contains("В среднем в день: 200.00 ₽"));
    }
}
