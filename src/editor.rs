//! Text editor module
//!
//! One editor instance backs every editing modal: single-line fields (URL,
//! row cells, credentials) and the multi-line body editors. It tracks a byte
//! cursor that always sits on a UTF-8 character boundary.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct TextEditor {
    /// The content being edited
    content: String,

    /// Cursor position (byte offset in content)
    cursor: usize,

    /// Whether newlines are accepted
    multiline: bool,
}

impl TextEditor {
    /// Start a session on `content`, cursor at the end
    pub fn load(&mut self, content: String, multiline: bool) {
        self.cursor = content.len();
        self.content = content;
        self.multiline = multiline;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Clear all content and reset state
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Insert a character at the current cursor position
    pub fn insert_char(&mut self, c: char) {
        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.insert(cursor, c);
        self.cursor = cursor + c.len_utf8();
    }

    /// Insert a string at the current cursor position
    pub fn insert_str(&mut self, s: &str) {
        let text = if self.multiline {
            s.to_string()
        } else {
            s.replace(['\r', '\n', '\t'], "")
        };
        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.insert_str(cursor, &text);
        self.cursor = cursor + text.len();
    }

    /// Insert a string with curly quotes turned into straight ones
    pub fn insert_str_normalized(&mut self, s: &str) {
        let normalized = s
            .replace(['\u{201C}', '\u{201D}'], "\"")
            .replace(['\u{2018}', '\u{2019}'], "'");
        self.insert_str(&normalized);
    }

    /// Ignored by single-line editors
    pub fn insert_newline(&mut self) -> bool {
        if !self.multiline {
            return false;
        }
        self.insert_char('\n');
        true
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_char_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        let Some((prev, _)) = self.content[..cursor].char_indices().next_back() else {
            return false;
        };

        self.content.remove(prev);
        self.cursor = prev;
        true
    }

    /// Delete the character after the cursor (delete key)
    pub fn delete_char_after_cursor(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }

        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.remove(cursor);
        true
    }

    pub fn move_cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let mut new_cursor = self.cursor - 1;
        while new_cursor > 0 && !self.content.is_char_boundary(new_cursor) {
            new_cursor -= 1;
        }

        self.cursor = new_cursor;
        true
    }

    pub fn move_cursor_right(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }

        let mut new_cursor = self.cursor + 1;
        while new_cursor < self.content.len() && !self.content.is_char_boundary(new_cursor) {
            new_cursor += 1;
        }

        self.cursor = new_cursor.min(self.content.len());
        true
    }

    pub fn move_cursor_up(&mut self) -> bool {
        let (line, _) = self.cursor_line_col();
        if line == 0 {
            return false;
        }
        self.move_to_line(line - 1)
    }

    pub fn move_cursor_down(&mut self) -> bool {
        let (line, _) = self.cursor_line_col();
        if line + 1 >= self.line_bounds().len() {
            return false;
        }
        self.move_to_line(line + 1)
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.content.len();
    }

    pub fn move_cursor_to_line_start(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.cursor = self.line_bounds()[line].0;
    }

    pub fn move_cursor_to_line_end(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.cursor = self.line_bounds()[line].1;
    }

    /// Zero-based line and character column of the cursor
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        let before = &self.content[..cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (line, before[line_start..].chars().count())
    }

    /// Handle a key event, returns true if the event was handled
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Backspace => self.delete_char_before_cursor(),
            KeyCode::Delete => self.delete_char_after_cursor(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Up => self.move_cursor_up(),
            KeyCode::Down => self.move_cursor_down(),
            KeyCode::Home => {
                self.move_cursor_to_line_start();
                true
            }
            KeyCode::End => {
                self.move_cursor_to_line_end();
                true
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_start();
                true
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_end();
                true
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                true
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_newline()
            }
            KeyCode::Tab if self.multiline => {
                self.insert_char('\t');
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
                true
            }
            _ => false,
        }
    }

    /// Byte range of every line, newline excluded
    fn line_bounds(&self) -> Vec<(usize, usize)> {
        let mut bounds = Vec::new();
        let mut start = 0;
        for line in self.content.split('\n') {
            bounds.push((start, start + line.len()));
            start += line.len() + 1;
        }
        bounds
    }

    fn move_to_line(&mut self, target: usize) -> bool {
        let (_, col) = self.cursor_line_col();
        let Some(&(start, end)) = self.line_bounds().get(target) else {
            return false;
        };

        self.cursor = self.content[start..end]
            .char_indices()
            .nth(col)
            .map(|(i, _)| start + i)
            .unwrap_or(end);
        true
    }

    /// Clamp cursor to valid UTF-8 character boundary
    fn clamp_cursor_to_boundary(&self, cursor: usize) -> usize {
        let mut pos = cursor.min(self.content.len());
        while pos > 0 && !self.content.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}

/// Re-indent a JSON document with two spaces, keeping key order
pub fn pretty_json(text: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    serde_json::to_string_pretty(&value)
}
