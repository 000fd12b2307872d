//! Statement buffer - word-capped free-text input
//!
//! Edits that would push the whitespace-delimited word count past the
//! ceiling are dropped silently; the buffer simply does not change and the
//! keystroke is lost. Deletions and cursor movement always apply.

#[derive(Debug, Clone)]
pub struct StatementBuffer {
    text: String,
    /// Byte offset into `text`, always on a char boundary.
    cursor: usize,
    word_limit: usize,
}

impl StatementBuffer {
    pub fn new(word_limit: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            word_limit,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn word_limit(&self) -> usize {
        self.word_limit
    }

    /// Whitespace-delimited word count of the current buffer.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// True when the trimmed buffer has content to submit.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Split the text at the cursor, for rendering a cursor marker.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.cursor)
    }

    /// Insert a char at the cursor. Returns false when the edit was
    /// rejected by the word ceiling.
    pub fn insert_char(&mut self, c: char) -> bool {
        let mut candidate = self.text.clone();
        candidate.insert(self.cursor, c);
        if candidate.split_whitespace().count() > self.word_limit {
            return false;
        }
        self.text = candidate;
        self.cursor += c.len_utf8();
        true
    }

    /// Insert a string at the cursor (paste). Rejected as a whole when the
    /// result would exceed the ceiling.
    pub fn insert_str(&mut self, s: &str) -> bool {
        let mut candidate = self.text.clone();
        candidate.insert_str(self.cursor, s);
        if candidate.split_whitespace().count() > self.word_limit {
            return false;
        }
        self.text = candidate;
        self.cursor += s.len();
        true
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}
