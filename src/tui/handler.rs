//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) | Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
    } else {
        handle_normal_key(app, key);
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('1') => app.switch_view(ActiveView::Expenses),
        KeyCode::Char('2') => app.switch_view(ActiveView::Analytics),
        KeyCode::Tab => app.next_view(),
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('f') | KeyCode::Char('/') => app.open_dialog(ActiveDialog::Filter),
        KeyCode::Char('c') => app.clear_filter(),
        KeyCode::Esc => app.clear_status(),
        _ => {
            if app.active_view == ActiveView::Expenses {
                handle_expenses_view_key(app, key);
            }
        }
    }
}

/// Handle keys in the expenses list
fn handle_expenses_view_key(app: &mut App, key: KeyEvent) {
    let count = app.visible_expenses().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(count),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_to_bottom(count),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        _ => {}
    }
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::AddExpense => dialogs::expense::handle_key(app, key),
        ActiveDialog::Filter => dialogs::filter::handle_key(app, key),
        ActiveDialog::ConfirmDelete(id) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                app.delete_expense(id);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
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

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 28).unwrap()
    }

    fn seeded() -> Storage {
        Storage::with_expenses(vec![
            Expense::new("Юбка", Money::from_minor(150000), today()).with_category("Покупки"),
            Expense::new("Обед", Money::from_minor(50000), today()).with_category("Еда"),
        ])
        .unwrap()
    }

    #[test]
    fn test_quit_keys() {
        let storage = Storage::new();
        let settings = Settings::default();

        let mut app = App::new(&storage, &settings);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new(&storage, &settings);
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_view_switching() {
        let storage = Storage::new();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_view, ActiveView::Analytics);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_view, ActiveView::Expenses);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view, ActiveView::Analytics);
    }

    #[test]
    fn test_navigation_and_delete_with_confirmation() {
        let storage = seeded();
        let settings = Settings::default();
        let mut app = App::with_today(&storage, &settings, today());

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_index, 1);

        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.active_dialog, ActiveDialog::ConfirmDelete(_)));

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.has_dialog());
        assert_eq!(storage.expenses.count().unwrap(), 2);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        let remaining = storage.expenses.get_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Юбка");
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let storage = Storage::new();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_keys_go_to_dialog_while_open() {
        let storage = Storage::new();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.expense_form.title_input.value(), "q");
    }

    #[test]
    fn test_filter_dialog_and_clear() {
        let storage = seeded();
        let settings = Settings::default();
        let mut app = App::with_today(&storage, &settings, today());

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.active_dialog, ActiveDialog::Filter);
        for c in "еда".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.visible_expenses().len(), 1);

        press(&mut app, KeyCode::Char('c'));
        assert!(app.filter.is_empty());
        assert_eq!(app.visible_expenses().len(), 2);
    }
}
