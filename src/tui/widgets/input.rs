//! Text input widget
//!
//! A single-line text field with a cursor. The cursor is a character index,
//! so editing works the same for Cyrillic and ASCII input.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Width the label is right-aligned to
const LABEL_WIDTH: usize = 12;

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content and move the cursor to its end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let index = self.byte_index(self.cursor);
        self.content.insert(index, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index(self.cursor);
            self.content.remove(index);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let index = self.byte_index(self.cursor);
            self.content.remove(index);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Trimmed content, `None` when blank
    pub fn optional_value(&self) -> Option<String> {
        let trimmed = self.content.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![Span::styled(
            format!("{:>width$}: ", self.label, width = LABEL_WIDTH),
            label_style,
        )];

        if self.focused {
            let value_style = Style::default().fg(Color::White);
            let before: String = self.content.chars().take(self.cursor).collect();
            let mut rest = self.content.chars().skip(self.cursor);
            let cursor_char = rest.next().unwrap_or(' ');
            let after: String = rest.collect();

            spans.push(Span::styled(before, value_style));
            spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::styled(after, value_style));
        } else if self.content.is_empty() {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::styled(
                self.content.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace_cyrillic() {
        let mut input = TextInput::new();
        for c in "Обед".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Обед");
        assert_eq!(input.cursor, 4);

        input.backspace();
        assert_eq!(input.value(), "Обе");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::new().content("Такси");
        input.move_start();
        input.move_right();
        input.insert('!');
        assert_eq!(input.value(), "Т!акси");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::new().content("еда");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "да");
        input.move_end();
        input.delete();
        assert_eq!(input.value(), "да");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_optional_value() {
        assert_eq!(TextInput::new().content("   ").optional_value(), None);
        assert_eq!(
            TextInput::new().content(" Еда ").optional_value().as_deref(),
            Some("Еда")
        );
    }

    #[test]
    fn test_render_shows_label_and_content() {
        let input = TextInput::new().label("Название").content("Кофе");
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);

        let line: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert!(line.contains("Название: Кофе"));
    }
}
