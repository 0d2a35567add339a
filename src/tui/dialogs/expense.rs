//! Add expense dialog
//!
//! Modal form with tab navigation between fields. Validation errors are
//! shown inside the dialog and keep it open.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::services::NewExpense;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Date format accepted by the date field
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Title,
    Amount,
    Date,
    Category,
    Comment,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Category,
            Self::Category => Self::Comment,
            Self::Comment => Self::Title,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Comment,
            Self::Amount => Self::Title,
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
            Self::Comment => Self::Category,
        }
    }
}

/// State for the add expense dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,
    pub title_input: TextInput,
    pub amount_input: TextInput,
    pub date_input: TextInput,
    pub category_input: TextInput,
    pub comment_input: TextInput,
    /// Error message to display
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    /// Create an empty form with the date prefilled
    pub fn new(today: NaiveDate) -> Self {
        let mut state = Self {
            focused_field: ExpenseField::Title,
            title_input: TextInput::new()
                .label("Название")
                .placeholder("Обед, такси..."),
            amount_input: TextInput::new().label("Сумма").placeholder("1500.00"),
            date_input: TextInput::new()
                .label("Дата")
                .placeholder("ГГГГ-ММ-ДД")
                .content(today.format(INPUT_DATE_FORMAT).to_string()),
            category_input: TextInput::new()
                .label("Категория")
                .placeholder("необязательно"),
            comment_input: TextInput::new()
                .label("Комментарий")
                .placeholder("необязательно"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.title_input.focused = self.focused_field == ExpenseField::Title;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
        self.date_input.focused = self.focused_field == ExpenseField::Date;
        self.category_input.focused = self.focused_field == ExpenseField::Category;
        self.comment_input.focused = self.focused_field == ExpenseField::Comment;
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Title => &mut self.title_input,
            ExpenseField::Amount => &mut self.amount_input,
            ExpenseField::Date => &mut self.date_input,
            ExpenseField::Category => &mut self.category_input,
            ExpenseField::Comment => &mut self.comment_input,
        }
    }

    /// Build the service input; the error is the message shown in the form
    pub fn build(&self) -> Result<NewExpense, String> {
        let title = self.title_input.value().trim();
        if title.is_empty() {
            return Err("Введите название".to_string());
        }

        let amount_str = self.amount_input.value().trim();
        if amount_str.is_empty() {
            return Err("Введите сумму".to_string());
        }
        let amount = Money::parse(amount_str).map_err(|_| "Неверный формат суммы".to_string())?;
        if amount.is_negative() {
            return Err("Сумма не может быть отрицательной".to_string());
        }

        let date = match self.date_input.optional_value() {
            Some(value) => Some(
                NaiveDate::parse_from_str(&value, INPUT_DATE_FORMAT)
                    .map_err(|_| "Неверная дата, формат ГГГГ-ММ-ДД".to_string())?,
            ),
            None => None,
        };

        Ok(NewExpense {
            title: title.to_string(),
            amount,
            date,
            category: self.category_input.optional_value(),
            comment: self.comment_input.optional_value(),
        })
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(64, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Новый расход ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Comment
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    frame.render_widget(&form.title_input, chunks[0]);
    frame.render_widget(&form.amount_input, chunks[1]);
    frame.render_widget(&form.date_input, chunks[2]);
    frame.render_widget(&form.category_input, chunks[3]);
    frame.render_widget(&form.comment_input, chunks[4]);

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[6]);
    }

    frame.render_widget(Paragraph::new(form_hints()), chunks[7]);
}

/// Key hints shared by the form dialogs
pub fn form_hints() -> Line<'static> {
    Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Далее  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Сохранить  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Отмена"),
    ])
}

/// Handle key input for the add expense dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => save_expense(app),
        KeyCode::Backspace => {
            form.clear_error();
            form.focused_input().backspace();
        }
        KeyCode::Delete => {
            form.clear_error();
            form.focused_input().delete();
        }
        KeyCode::Left => form.focused_input().move_left(),
        KeyCode::Right => form.focused_input().move_right(),
        KeyCode::Home => form.focused_input().move_start(),
        KeyCode::End => form.focused_input().move_end(),
        KeyCode::Char(c) => {
            form.clear_error();
            form.focused_input().insert(c);
        }
        _ => {}
    }
}

fn save_expense(app: &mut App) {
    let input = match app.expense_form.build() {
        Ok(input) => input,
        Err(e) => {
            app.expense_form.set_error(e);
            return;
        }
    };

    match app.expense_service().create(input) {
        Ok(expense) => {
            app.close_dialog();
            app.select_expense(expense.id);
            app.set_status(format!("Добавлено: {}", expense.title));
        }
        Err(e) => app.expense_form.set_error(e.to_string()),
    }
}
