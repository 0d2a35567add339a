//! TUI Views module
//!
//! Contains the main views (expenses list and analytics) as well as the tab
//! header and status bar that frame them.

pub mod analytics;
pub mod expenses_list;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Tabs,
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.header);

    match app.active_view {
        ActiveView::Expenses => expenses_list::render(frame, app, layout.main),
        ActiveView::Analytics => analytics::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render the view switcher
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ActiveView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, view.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_view.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::Filter => dialogs::filter::render(frame, app),
        ActiveDialog::ConfirmDelete(id) => dialogs::confirm::render(frame, app, id),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Expense, Money};
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_shell_renders_tabs_and_status_bar() {
        let storage = Storage::new();
        let settings = Settings::default();
        let app = App::new(&storage, &settings);

        let output = screen(&app);
        assert!(output.contains("1 Расходы"));
        assert!(output.contains("2 Аналитика"));
        assert!(output.contains("Записей: 0"));
        assert!(output.contains("Нет расходов"));
    }

    #[test]
    fn test_shell_renders_analytics_view() {
        let storage = Storage::new();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::Analytics);

        let output = screen(&app);
        assert!(output.contains("Итоги"));
        assert!(output.contains("По категориям"));
    }

    #[test]
    fn test_confirm_dialog_names_the_expense() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 28).unwrap();
        let storage =
            Storage::with_expenses(vec![Expense::new("Юбка", Money::from_minor(150000), date)])
                .unwrap();
        let settings = Settings::default();
        let mut app = App::with_today(&storage, &settings, date);
        app.request_delete();

        let output = screen(&app);
        assert!(output.contains("Удалить «Юбка»?"));
        assert!(output.contains("Подтверждение"));
    }

    #[test]
    fn test_help_dialog_renders() {
        let storage = Storage::new();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.open_dialog(ActiveDialog::Help);

        let output = screen(&app);
        assert!(output.contains("Помощь"));
        assert!(output.contains("Добавить расход"));
    }
}
