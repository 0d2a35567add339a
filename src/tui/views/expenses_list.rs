//! Expenses list view
//!
//! One table row per expense, in the order the expenses were recorded. An
//! empty list renders the empty-state message instead of a table.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::config::Settings;
use crate::display::{EMPTY_MESSAGE, NO_CATEGORY};
use crate::models::Expense;
use crate::tui::app::App;

/// Render the expenses list for the app's current filter
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let expenses = app.visible_expenses();

    let title = if app.filter.is_empty() {
        " Расходы ".to_string()
    } else {
        format!(" Расходы ({}) ", app.filter.describe())
    };

    let selected = (!expenses.is_empty()).then(|| app.selected_index.min(expenses.len() - 1));
    render_expenses(frame, area, &expenses, app.settings, selected, &title);
}

/// Render a slice of expenses as a table
pub fn render_expenses(
    frame: &mut Frame,
    area: Rect,
    expenses: &[Expense],
    settings: &Settings,
    selected: Option<usize>,
    title: &str,
) {
    let block = Block::default()
        .title(title.to_string())
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if expenses.is_empty() {
        let lines = vec![
            Line::from(EMPTY_MESSAGE),
            Line::from(""),
            Line::styled(
                "Нажмите 'a', чтобы добавить расход",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        let text = Paragraph::new(lines).block(block);
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(10), // Date
        Constraint::Min(16),    // Title
        Constraint::Length(16), // Category
        Constraint::Length(14), // Amount
        Constraint::Min(10),    // Comment
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Дата").style(bold),
        Cell::from("Название").style(bold),
        Cell::from("Категория").style(bold),
        Cell::from(Line::from("Сумма").alignment(Alignment::Right)).style(bold),
        Cell::from("Комментарий").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = expenses.iter().map(|e| expense_row(e, settings)).collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(selected);

    frame.render_stateful_widget(table, area, &mut state);
}

fn expense_row<'e>(expense: &'e Expense, settings: &Settings) -> Row<'e> {
    let category = match &expense.category {
        Some(category) => Cell::from(category.as_str()),
        None => Cell::from(NO_CATEGORY).style(Style::default().fg(Color::DarkGray)),
    };

    Row::new(vec![
        Cell::from(settings.format_date(expense.date)),
        Cell::from(expense.title.as_str()),
        category,
        Cell::from(
            Line::from(expense.amount.format_with_symbol(&settings.currency_symbol))
                .alignment(Alignment::Right),
        )
        .style(Style::default().fg(Color::Green)),
        Cell::from(expense.comment.as_deref().unwrap_or_default()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(expenses: &[Expense], selected: Option<usize>) -> Vec<String> {
        let backend = TestBackend::new(100, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let settings = Settings::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_expenses(frame, area, expenses, &settings, selected, " Расходы ");
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn expense(title: &str, minor: i64) -> Expense {
        Expense::new(
            title,
            Money::from_minor(minor),
            NaiveDate::from_ymd_opt(2025, 12, 28).unwrap(),
        )
    }

    #[test]
    fn test_empty_list_renders_empty_message() {
        let lines = draw(&[], None);
        assert!(lines.iter().any(|l| l.contains("Нет расходов")));
        assert!(!lines.iter().any(|l| l.contains("Дата")));
    }

    #[test]
    fn test_one_row_per_expense_in_order() {
        let expenses = vec![
            expense("Юбка", 150000).with_category("Покупки"),
            expense("Обед", 50000),
            expense("Такси", 30000).with_comment("поздно"),
        ];
        let lines = draw(&expenses, None);

        let row_of = |title: &str| {
            lines
                .iter()
                .position(|l| l.contains(title))
                .unwrap_or_else(|| panic!("{} not rendered", title))
        };
        let (skirt, lunch, taxi) = (row_of("Юбка"), row_of("Обед"), row_of("Такси"));
        assert_eq!(lunch, skirt + 1);
        assert_eq!(taxi, lunch + 1);

        let data_rows = lines.iter().filter(|l| l.contains("2025-12-28")).count();
        assert_eq!(data_rows, 3);

        assert!(lines[skirt].contains("Покупки"));
        assert!(lines[skirt].contains("1500.00 ₽"));
        assert!(lines[lunch].contains(" - "));
        assert!(lines[taxi].contains("поздно"));
        assert!(!lines.iter().any(|l| l.contains(EMPTY_MESSAGE)));
    }

    #[test]
    fn test_selected_row_is_marked() {
        let expenses = vec![expense("Первый", 100), expense("Второй", 200)];
        let lines = draw(&expenses, Some(1));

        let marked: Vec<&String> = lines.iter().filter(|l| l.contains('▶')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Второй"));
    }
}
