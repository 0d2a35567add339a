//! Status bar view
//!
//! Shows the number of visible expenses, their total, the active filter and
//! key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Money;
use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let expenses = app.visible_expenses();
    let total: Money = expenses.iter().map(|e| e.amount).sum();

    let mut spans = vec![
        Span::styled(" Записей: ", Style::default().fg(Color::White)),
        Span::styled(
            expenses.len().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled("Итого: ", Style::default().fg(Color::White)),
        Span::styled(
            total.format_with_symbol(&app.settings.currency_symbol),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ];

    if !app.filter.is_empty() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("Фильтр: {}", app.filter.describe()),
            Style::default().fg(Color::Magenta),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.input_mode {
        InputMode::Normal => " q:Выход  ?:Помощь ",
        InputMode::Editing => " Enter:Сохранить  Esc:Отмена ",
    };

    // Right-align the hints when there is room for them
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hints_len = hints.chars().count();
    let available = area.width as usize;
    if left_len + hints_len < available {
        spans.push(Span::raw(" ".repeat(available - left_len - hints_len)));
        spans.push(Span::styled(hints, Style::default().fg(Color::White)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
