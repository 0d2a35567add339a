//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Creating one never touches the terminal, so it can be rendered into any
//! ratatui backend.

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::models::{Expense, ExpenseId};
use crate::services::{ExpenseFilter, ExpenseService};
use crate::storage::Storage;

use super::dialogs::expense::ExpenseFormState;
use super::dialogs::filter::FilterFormState;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Expenses,
    Analytics,
}

impl ActiveView {
    /// Every view, in tab order
    pub const ALL: [ActiveView; 2] = [ActiveView::Expenses, ActiveView::Analytics];

    pub fn title(self) -> &'static str {
        match self {
            Self::Expenses => "Расходы",
            Self::Analytics => "Аналитика",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Expenses => 0,
            Self::Analytics => 1,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Expenses => Self::Analytics,
            Self::Analytics => Self::Expenses,
        }
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    Filter,
    Help,
    ConfirmDelete(ExpenseId),
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the expenses list
    pub selected_index: usize,

    /// Filter applied to both views
    pub filter: ExpenseFilter,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add expense form state
    pub expense_form: ExpenseFormState,

    /// Filter form state
    pub filter_form: FilterFormState,

    today: NaiveDate,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self::with_today(storage, settings, Local::now().date_naive())
    }

    /// Create an App with a fixed notion of "today"
    pub fn with_today(storage: &'a Storage, settings: &'a Settings, today: NaiveDate) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            filter: ExpenseFilter::default(),
            status_message: None,
            expense_form: ExpenseFormState::new(today),
            filter_form: FilterFormState::new(),
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Expense service bound to this app's storage and date
    pub fn expense_service(&self) -> ExpenseService<'a> {
        ExpenseService::with_today(self.storage, self.today)
    }

    /// Expenses passing the current filter, in insertion order
    pub fn visible_expenses(&self) -> Vec<Expense> {
        match self.expense_service().filter(&self.filter) {
            Ok(expenses) => expenses,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read expenses");
                Vec::new()
            }
        }
    }

    /// The expense under the cursor, if any
    pub fn selected_expense(&self) -> Option<Expense> {
        self.visible_expenses().into_iter().nth(self.selected_index)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    pub fn next_view(&mut self) {
        self.switch_view(self.active_view.next());
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        match dialog {
            ActiveDialog::AddExpense => {
                self.expense_form = ExpenseFormState::new(self.today);
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::Filter => {
                self.filter_form = FilterFormState::from_filter(&self.filter);
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::Help | ActiveDialog::ConfirmDelete(_) | ActiveDialog::None => {}
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Move selection up in the expenses list
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down, staying within `max` rows
    pub fn move_down(&mut self, max: usize) {
        if self.selected_index < max.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn move_to_bottom(&mut self, max: usize) {
        self.selected_index = max.saturating_sub(1);
    }

    /// Keep the selection on an existing row after the list shrank
    pub fn clamp_selection(&mut self) {
        let count = self.visible_expenses().len();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    /// Put the cursor on the given expense if it is visible
    pub fn select_expense(&mut self, id: ExpenseId) {
        if let Some(index) = self.visible_expenses().iter().position(|e| e.id == id) {
            self.selected_index = index;
        }
    }

    /// Replace the active filter
    pub fn apply_filter(&mut self, filter: ExpenseFilter) {
        self.filter = filter;
        self.selected_index = 0;
        if self.filter.is_empty() {
            self.set_status("Фильтр сброшен");
        } else {
            self.set_status(format!("Фильтр: {}", self.filter.describe()));
        }
    }

    pub fn clear_filter(&mut self) {
        self.apply_filter(ExpenseFilter::default());
    }

    /// Ask for confirmation before deleting the selected expense
    pub fn request_delete(&mut self) {
        match self.selected_expense() {
            Some(expense) => self.open_dialog(ActiveDialog::ConfirmDelete(expense.id)),
            None => self.set_status("Нечего удалять"),
        }
    }

    /// Delete an expense after confirmation
    pub fn delete_expense(&mut self, id: ExpenseId) {
        match self.expense_service().delete(id) {
            Ok(expense) => {
                self.set_status(format!("Удалено: {}", expense.title));
                self.clamp_selection();
            }
            Err(e) => {
                tracing::warn!(error = %e, "delete failed");
                self.set_status(format!("Не удалось удалить: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 28).unwrap()
    }

    fn seeded() -> Storage {
        Storage::with_expenses(vec![
            Expense::new("Юбка", Money::from_minor(150000), today()).with_category("Покупки"),
            Expense::new("Обед", Money::from_minor(50000), today()).with_category("Еда"),
            Expense::new("Такси", Money::from_minor(30000), today()),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_app_defaults() {
        let storage = Storage::new();
        let settings = Settings::default();
        let app = App::new(&storage, &settings);

        assert!(!app.should_quit);
        assert_eq!(app.active_view, ActiveView::Expenses);
        assert!(!app.has_dialog());
        assert!(app.visible_expenses().is_empty());
        assert!(app.selected_expense().is_none());
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let storage = seeded();
        let settings = Settings::default();
        let mut app = App::with_today(&storage, &settings, today());

        app.move_up();
        assert_eq!(app.selected_index, 0);
        for _ in 0..10 {
            app.move_down(3);
        }
        assert_eq!(app.selected_index, 2);
        assert_eq!(app.selected_expense().unwrap().title, "Такси");
    }

    #[test]
    fn test_filter_narrows_visible_expenses() {
        let storage = seeded();
        let settings = Settings::default();
        let mut app = App::with_today(&storage, &settings, today());

        app.apply_filter(ExpenseFilter::new().category("еда"));
        let visible = app.visible_expenses();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Обед");
        assert_eq!(
            app.status_message.as_deref(),
            Some("Фильтр: категория: еда")
        );

        app.clear_filter();
        assert_eq!(app.visible_expenses().len(), 3);
    }

    #[test]
    fn test_delete_flow() {
        let storage = seeded();
        let settings = Settings::default();
        let mut app = App::with_today(&storage, &settings, today());

        app.move_to_bottom(3);
        app.request_delete();
        let id = match app.active_dialog {
            ActiveDialog::ConfirmDelete(id) => id,
            other => panic!("unexpected dialog: {:?}", other),
        };

        app.close_dialog();
        app.delete_expense(id);

        assert_eq!(storage.expenses.count().unwrap(), 2);
        assert_eq!(app.selected_index, 1);
        assert_eq!(app.status_message.as_deref(), Some("Удалено: Такси"));
    }

    #[test]
    fn test_request_delete_on_empty_list() {
        let storage = Storage::new();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.request_delete();
        assert!(!app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some("Нечего удалять"));
    }

    #[test]
    fn test_views_cycle() {
        let storage = Storage::new();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.next_view();
        assert_eq!(app.active_view, ActiveView::Analytics);
        app.next_view();
        assert_eq!(app.active_view, ActiveView::Expenses);
    }
}
