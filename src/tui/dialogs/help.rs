//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Помощь ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for the current view
fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Общие клавиши"),
        Line::from(""),
        key_line("q", "Выход"),
        key_line("?", "Помощь"),
        key_line("1 / 2", "Расходы / Аналитика"),
        key_line("Tab", "Следующая вкладка"),
        key_line("f", "Фильтр"),
        key_line("c", "Сбросить фильтр"),
        key_line("a", "Добавить расход"),
        Line::from(""),
    ];

    match view {
        ActiveView::Expenses => {
            lines.push(section("Список расходов"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k, ↓/↑", "Выбор строки"));
            lines.push(key_line("g / G", "В начало / в конец"));
            lines.push(key_line("d", "Удалить выбранный расход"));
        }
        ActiveView::Analytics => {
            lines.push(section("Аналитика"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Итоги по категориям для записей, прошедших фильтр",
            ));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Нажмите любую клавишу, чтобы закрыть",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
