//! Single-line edit buffer with a virtual cursor.
//!
//! The cursor is a character offset (not a byte offset) and always satisfies
//! `0 <= cursor <= len`. Every operation is total: moving past either end is
//! a no-op rather than an error.

/// Text being edited on the prompt line plus the cursor position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    /// Creates an empty buffer with the cursor at offset 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a character offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text to the left of the cursor.
    pub fn before(&self) -> &str {
        &self.text[..self.byte_offset(self.cursor)]
    }

    /// Text from the cursor to the end.
    pub fn after(&self) -> &str {
        &self.text[self.byte_offset(self.cursor)..]
    }

    /// Inserts a character at the cursor and advances past it.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Inserts a whole string at the cursor (paste, IME commit).
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Removes the character left of the cursor. Returns `false` at offset 0.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    /// Removes the character under the cursor. Returns `false` at the end.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Replaces the whole buffer.
    ///
    /// History recall and completion-accept both pass `cursor_at_end = true`.
    /// Otherwise the previous cursor is kept, clamped to the new length.
    pub fn set_text(&mut self, text: impl Into<String>, cursor_at_end: bool) {
        self.text = text.into();
        let len = self.len();
        self.cursor = if cursor_at_end {
            len
        } else {
            self.cursor.min(len)
        };
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Byte index of the given character offset.
    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
