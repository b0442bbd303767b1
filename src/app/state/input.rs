use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text field for the search query, wrapping `TextArea` so the
/// app state can derive `Clone`/`Debug`/`PartialEq` and so newlines can
/// never enter the query.
#[derive(Default)]
pub struct QueryField<'a>(TextArea<'a>);

impl QueryField<'_> {
    /// Feeds one key into the field. Enter is swallowed; it selects, it
    /// does not edit. Backspace is handled by the arming rules upstream,
    /// but deleting here keeps the field total over its input domain.
    pub fn input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {}
            KeyCode::Backspace => self.delete_char(),
            _ => {
                self.0.input(key);
            }
        }
    }

    /// Deletes the character before the cursor (ordinary text editing).
    pub fn delete_char(&mut self) {
        self.0.delete_char();
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join("")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.lines().iter().all(String::is_empty)
    }

    pub fn clear(&mut self) {
        self.0 = TextArea::default();
    }
}

impl Clone for QueryField<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for QueryField<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryField")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for QueryField<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for QueryField<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for QueryField<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &QueryField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn typing_builds_the_query() {
        let mut field = QueryField::default();
        field.input(key('a'));
        field.input(key('b'));
        assert_eq!(field.text(), "ab");
        assert!(!field.is_empty());
    }

    #[test]
    fn enter_is_ignored() {
        let mut field = QueryField::default();
        field.input(key('a'));
        field.input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        field.input(key('b'));
        assert_eq!(field.text(), "ab");
    }

    #[test]
    fn delete_char_removes_before_cursor() {
        let mut field = QueryField::default();
        field.input(key('a'));
        field.input(key('b'));
        field.delete_char();
        assert_eq!(field.text(), "a");
        field.delete_char();
        assert!(field.is_empty());
        // Deleting on an empty field is a no-op.
        field.delete_char();
        assert!(field.is_empty());
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut field = QueryField::default();
        field.input(key('x'));
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.text(), "");
    }
}
