//! Filter dialog
//!
//! Narrows both views by category, an exact day or a date range. Blank
//! fields are ignored; submitting an all-blank form clears the filter.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::services::ExpenseFilter;
use crate::tui::app::App;
use crate::tui::dialogs::expense::{form_hints, INPUT_DATE_FORMAT};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Category,
    Date,
    From,
    To,
}

impl FilterField {
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Date,
            Self::Date => Self::From,
            Self::From => Self::To,
            Self::To => Self::Category,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Category => Self::To,
            Self::Date => Self::Category,
            Self::From => Self::Date,
            Self::To => Self::From,
        }
    }
}

/// State for the filter dialog
#[derive(Debug, Clone)]
pub struct FilterFormState {
    pub focused_field: FilterField,
    pub category_input: TextInput,
    pub date_input: TextInput,
    pub from_input: TextInput,
    pub to_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for FilterFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterFormState {
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: FilterField::Category,
            category_input: TextInput::new().label("Категория").placeholder("любая"),
            date_input: TextInput::new().label("Дата").placeholder("ГГГГ-ММ-ДД"),
            from_input: TextInput::new().label("С").placeholder("ГГГГ-ММ-ДД"),
            to_input: TextInput::new().label("По").placeholder("ГГГГ-ММ-ДД"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Prefill the form from the filter currently in effect
    pub fn from_filter(filter: &ExpenseFilter) -> Self {
        let mut state = Self::new();
        let date = |d: Option<NaiveDate>| {
            d.map(|d| d.format(INPUT_DATE_FORMAT).to_string())
                .unwrap_or_default()
        };

        state.category_input = state
            .category_input
            .content(filter.category.clone().unwrap_or_default());
        state.date_input = state.date_input.content(date(filter.date));
        state.from_input = state.from_input.content(date(filter.start_date));
        state.to_input = state.to_input.content(date(filter.end_date));
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
        self.category_input.focused = self.focused_field == FilterField::Category;
        self.date_input.focused = self.focused_field == FilterField::Date;
        self.from_input.focused = self.focused_field == FilterField::From;
        self.to_input.focused = self.focused_field == FilterField::To;
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            FilterField::Category => &mut self.category_input,
            FilterField::Date => &mut self.date_input,
            FilterField::From => &mut self.from_input,
            FilterField::To => &mut self.to_input,
        }
    }

    /// Build the filter; the error is the message shown in the form
    pub fn build(&self) -> Result<ExpenseFilter, String> {
        let mut filter = ExpenseFilter::new();

        if let Some(category) = self.category_input.optional_value() {
            filter = filter.category(category);
        }
        if let Some(date) = parse_date(&self.date_input, "дата")? {
            filter = filter.date(date);
        }
        if let Some(start) = parse_date(&self.from_input, "начальная дата")? {
            filter = filter.since(start);
        }
        if let Some(end) = parse_date(&self.to_input, "конечная дата")? {
            filter = filter.until(end);
        }

        filter.validate().map_err(|e| e.to_string())?;
        Ok(filter)
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

fn parse_date(input: &TextInput, name: &str) -> Result<Option<NaiveDate>, String> {
    match input.optional_value() {
        Some(value) => NaiveDate::parse_from_str(&value, INPUT_DATE_FORMAT)
            .map(Some)
            .map_err(|_| format!("Неверная {}, формат ГГГГ-ММ-ДД", name)),
        None => Ok(None),
    }
}

/// Render the filter dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Фильтр ")
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
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // From
            Constraint::Length(1), // To
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.filter_form;
    frame.render_widget(&form.category_input, chunks[0]);
    frame.render_widget(&form.date_input, chunks[1]);
    frame.render_widget(&form.from_input, chunks[2]);
    frame.render_widget(&form.to_input, chunks[3]);

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[5]);
    }

    frame.render_widget(Paragraph::new(form_hints()), chunks[6]);
}

/// Handle key input for the filter dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.filter_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => match form.build() {
            Ok(filter) => {
                app.close_dialog();
                app.apply_filter(filter);
            }
            Err(e) => form.set_error(e),
        },
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
