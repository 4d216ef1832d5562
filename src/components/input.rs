//! Text input component

use crate::event::keys;
use crossterm::event::KeyEvent;

/// A single-line text field with a character-based cursor
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    /// Current input value
    value: String,
    /// Cursor position in characters
    cursor: usize,
    /// Whether the input is focused
    focused: bool,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Clear the input
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Check if focused
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Set focus state
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of character position `pos`
    fn byte_index(&self, pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn remove_at(&mut self, pos: usize) {
        let at = self.byte_index(pos);
        self.value.remove(at);
    }

    fn char_before_cursor(&self) -> Option<char> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.value.chars().nth(i))
    }

    /// Handle a key event. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !self.focused {
            return false;
        }

        if let Some(c) = keys::get_char(key) {
            self.insert(c);
            return true;
        }

        if keys::is_backspace(key) && self.cursor > 0 {
            self.cursor -= 1;
            self.remove_at(self.cursor);
            return true;
        }

        if keys::is_delete(key) && self.cursor < self.char_count() {
            self.remove_at(self.cursor);
            return true;
        }

        if keys::is_left(key) && self.cursor > 0 {
            self.cursor -= 1;
            return true;
        }

        if keys::is_right(key) && self.cursor < self.char_count() {
            self.cursor += 1;
            return true;
        }

        if keys::is_home(key) {
            self.cursor = 0;
            return true;
        }

        if keys::is_end(key) {
            self.cursor = self.char_count();
            return true;
        }

        // Ctrl+U to clear
        if keys::is_ctrl_char(key, 'u') {
            self.clear();
            return true;
        }

        // Ctrl+W to delete word
        if keys::is_ctrl_char(key, 'w') {
            while self.char_before_cursor().is_some_and(char::is_whitespace) {
                self.cursor -= 1;
                self.remove_at(self.cursor);
            }
            while self
                .char_before_cursor()
                .is_some_and(|c| !c.is_whitespace())
            {
                self.cursor -= 1;
                self.remove_at(self.cursor);
            }
            return true;
        }

        false
    }

    /// Split the value around the cursor for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.byte_index(self.cursor))
    }

    /// Take the value and clear the input
    pub fn take(&mut self) -> String {
        let value = std::mem::take(&mut self.value);
        self.cursor = 0;
        value
    }
}
