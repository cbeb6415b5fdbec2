//! Single-line search input with cursor handling and placeholder text.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Editable query line.
///
/// Arrow-up/down and Enter are deliberately not handled here; those belong to
/// the focus navigation layer. The input only reacts to editing keys and
/// reports whether its text changed.
#[derive(Debug, Default)]
pub struct SearchInput {
    buffer: String,
    /// Cursor position as a char offset into `buffer`.
    cursor: usize,
}

impl SearchInput {
    #[must_use]
    pub fn new(initial: String) -> Self {
        let cursor = initial.chars().count();
        Self {
            buffer: initial,
            cursor,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Display column of the cursor, in terminal cells.
    #[must_use]
    pub fn cursor_column(&self) -> u16 {
        let prefix: String = self.buffer.chars().take(self.cursor).collect();
        prefix.width() as u16
    }

    /// Apply an editing key. Returns true when the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => {
                    let changed = !self.buffer.is_empty();
                    self.buffer.clear();
                    self.cursor = 0;
                    changed
                }
                _ => false,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.buffer.insert(at, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_offset(self.cursor);
                self.buffer.remove(at);
                true
            }
            KeyCode::Delete => {
                if self.cursor >= self.buffer.chars().count() {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.buffer.remove(at);
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                let len = self.buffer.chars().count();
                self.cursor = (self.cursor + 1).min(len);
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.buffer.chars().count();
                false
            }
            _ => false,
        }
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_offset)
            .map_or(self.buffer.len(), |(index, _)| index)
    }
}
