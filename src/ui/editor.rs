//! Multi-line input buffer for the text area.

use unicode_width::UnicodeWidthStr;

use crate::ui::bidi::wrap_ranges;

/// Display rows of a [`TextEditor`] and the cursor as (row, column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedText {
    pub rows: Vec<String>,
    pub cursor: (usize, usize),
}

/// Text plus a cursor kept on a char boundary (byte offset).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEditor {
    text: String,
    cursor: usize,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Insert pasted text at the cursor. CRLF and lone CR become LF.
    pub fn insert_text(&mut self, text: &str) {
        let text = normalize_newlines(text);
        self.text.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_backward(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.replace_range(self.cursor..next, "");
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

    pub fn move_to_line_start(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    /// Move to the previous line, keeping the char column where possible.
    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let column = self.text[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_in_line(prev_start, column);
    }

    /// Move to the next line, keeping the char column where possible.
    pub fn move_down(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.text.len() {
            self.cursor = end;
            return;
        }
        let start = self.line_start(self.cursor);
        let column = self.text[start..self.cursor].chars().count();
        self.cursor = self.offset_in_line(end + 1, column);
    }

    /// Lay the text out in rows of at most `width` cells, the way the input
    /// pane draws it, and find the cursor in that grid.
    pub fn wrap(&self, width: usize) -> WrappedText {
        let mut rows = Vec::new();
        let mut cursor = (0, 0);
        let mut line_start = 0;

        for line in self.text.split('\n') {
            let line_end = line_start + line.len();
            let ranges = wrap_ranges(line, width);
            let cursor_in_line = (line_start..=line_end)
                .contains(&self.cursor)
                .then(|| self.cursor - line_start);

            for (i, range) in ranges.iter().enumerate() {
                if let Some(at) = cursor_in_line {
                    let last = i + 1 == ranges.len();
                    if range.start <= at && (at < range.end || last) {
                        let column = UnicodeWidthStr::width(&line[range.start..at]);
                        cursor = (rows.len(), column);
                    }
                }
                rows.push(line[range.clone()].to_string());
            }
            line_start = line_end + 1;
        }

        // A full row pushes the cursor to the start of the next one.
        if width > 0 && cursor.1 >= width {
            cursor = (cursor.0 + 1, 0);
        }
        WrappedText { rows, cursor }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
    }

    fn line_start(&self, offset: usize) -> usize {
        self.text[..offset].rfind('\n').map_or(0, |idx| idx + 1)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.text[offset..]
            .find('\n')
            .map_or(self.text.len(), |idx| offset + idx)
    }

    fn offset_in_line(&self, line_start: usize, column: usize) -> usize {
        let line_end = self.line_end(line_start);
        self.text[line_start..line_end]
            .char_indices()
            .nth(column)
            .map_or(line_end, |(idx, _)| line_start + idx)
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
