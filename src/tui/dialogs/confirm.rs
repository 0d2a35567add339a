//! Delete confirmation dialog
//!
//! Shows the expense about to be removed so the user can check it before
//! answering.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Expense, ExpenseId};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

const DIALOG_WIDTH: u16 = 54;

/// Render the confirmation for deleting `id`
pub fn render(frame: &mut Frame, app: &App, id: ExpenseId) {
    let expense = match app.expense_service().get(id) {
        Ok(expense) => expense,
        Err(e) => {
            tracing::warn!(error = %e, "failed to look up expense for delete");
            None
        }
    };

    let details = match &expense {
        Some(expense) => detail_lines(expense, app),
        None => vec![Line::from(Span::styled(
            id.to_string(),
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let height = details.len() as u16 + 6;
    let area = centered_rect_fixed(DIALOG_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Подтверждение ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                    // Question
            Constraint::Length(details.len() as u16), // Details
            Constraint::Length(1),                    // Spacer
            Constraint::Length(1),                    // Answers
            Constraint::Min(0),
        ])
        .split(inner);

    let title = expense
        .as_ref()
        .map(|e| e.title.clone())
        .unwrap_or_else(|| "запись".to_string());
    let question = Line::from(Span::styled(
        format!("Удалить «{}»?", title),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(question), chunks[0]);
    frame.render_widget(Paragraph::new(details), chunks[1]);
    frame.render_widget(Paragraph::new(answer_line()), chunks[3]);
}

fn detail_lines(expense: &Expense, app: &App) -> Vec<Line<'static>> {
    let muted = Style::default().fg(Color::DarkGray);
    let mut lines = vec![Line::from(vec![
        Span::styled("  ", muted),
        Span::styled(
            expense
                .amount
                .format_with_symbol(&app.settings.currency_symbol),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(
                "  {}  {}",
                app.settings.format_date(expense.date),
                expense.category_label()
            ),
            muted,
        ),
    ])];

    if let Some(comment) = &expense.comment {
        lines.push(Line::from(Span::styled(format!("  {}", comment), muted)));
    }
    lines
}

fn answer_line() -> Line<'static> {
    Line::from(vec![
        Span::styled("[Y]", Style::default().fg(Color::Green)),
        Span::raw(" Удалить  "),
        Span::styled("[N]", Style::default().fg(Color::Red)),
        Span::raw(" Оставить  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Отмена"),
    ])
}
