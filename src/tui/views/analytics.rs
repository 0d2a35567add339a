//! Analytics view
//!
//! Totals for the expenses passing the current filter, broken down by
//! category.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::report::{format_bar, format_percentage};
use crate::display::EMPTY_MESSAGE;
use crate::services::{AnalyticsService, SpendingSummary};
use crate::tui::app::App;
use crate::tui::layout::AnalyticsLayout;

const BAR_WIDTH: usize = 20;

/// Render the analytics view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = AnalyticsLayout::new(area);
    let summary = AnalyticsService::summarize(&app.visible_expenses());

    render_totals(frame, app, &summary, layout.totals);
    render_categories(frame, app, &summary, layout.categories);
}

fn render_totals(frame: &mut Frame, app: &App, summary: &SpendingSummary, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let block = Block::default()
        .title(" Итоги ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let period = match (summary.first_date, summary.last_date) {
        (Some(first), Some(last)) => format!(
            "{} .. {}",
            app.settings.format_date(first),
            app.settings.format_date(last)
        ),
        _ => "-".to_string(),
    };

    let label = Style::default().fg(Color::White);
    let value = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("Всего потрачено:  ", label),
            Span::styled(summary.total.format_with_symbol(symbol), value),
        ]),
        Line::from(vec![
            Span::styled("В среднем в день: ", label),
            Span::styled(summary.average_per_day.format_with_symbol(symbol), value),
        ]),
        Line::from(vec![
            Span::styled("Записей:          ", label),
            Span::styled(summary.expense_count.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Период:           ", label),
            Span::styled(period, Style::default().fg(Color::Cyan)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_categories(frame: &mut Frame, app: &App, summary: &SpendingSummary, area: Rect) {
    let block = Block::default()
        .title(" По категориям ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if summary.by_category.is_empty() {
        let text = Paragraph::new(EMPTY_MESSAGE)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.settings.currency_symbol.as_str();
    let max_total = summary
        .by_category
        .iter()
        .map(|c| c.total.to_major_f64())
        .fold(0.0, f64::max);

    let widths = [
        Constraint::Min(16),                     // Category
        Constraint::Length(14),                  // Total
        Constraint::Length(6),                   // Count
        Constraint::Length(6),                   // Share
        Constraint::Length(BAR_WIDTH as u16),    // Bar
    ];

    let right = |text: String| Cell::from(Line::from(text).alignment(Alignment::Right));
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let header = Row::new(vec![
        Cell::from("Категория"),
        right("Сумма".to_string()),
        right("Шт.".to_string()),
        right("Доля".to_string()),
        Cell::from(""),
    ])
    .style(bold.fg(Color::Yellow));

    let rows: Vec<Row> = summary
        .by_category
        .iter()
        .map(|line| {
            Row::new(vec![
                Cell::from(line.category.clone()),
                right(line.total.format_with_symbol(symbol)),
                right(line.count.to_string()),
                right(format_percentage(line.percentage)),
                Cell::from(format_bar(line.total.to_major_f64(), max_total, BAR_WIDTH))
                    .style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
