//! Editable text with a cursor and an optional selection.
//!
//! Offsets are byte indices that always sit on a `char` boundary. The selection is the
//! span between `anchor` and `cursor`; an anchor equal to the cursor counts as no selection.

use std::ops::Range;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
    anchor: Option<usize>,
    multiline: bool,
}

impl TextBuffer {
    pub fn single_line(text: impl Into<String>) -> Self {
        Self::new(text.into(), false)
    }

    pub fn multi_line(text: impl Into<String>) -> Self {
        Self::new(text.into(), true)
    }

    fn new(text: String, multiline: bool) -> Self {
        Self {
            text: normalize(&text, multiline),
            cursor: 0,
            anchor: None,
            multiline,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole content, resetting cursor and selection.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = normalize(&text.into(), self.multiline);
        self.cursor = 0;
        self.anchor = None;
    }

    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection_range(&self) -> Option<Range<usize>> {
        let anchor = self.anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some(anchor.min(self.cursor)..anchor.max(self.cursor))
    }

    pub fn has_selection(&self) -> bool {
        self.selection_range().is_some()
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selection_range().map(|range| &self.text[range])
    }

    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.cursor = self.text.len();
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' && !self.multiline {
            return;
        }
        self.delete_selection();
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Insert pasted text; single-line buffers fold line breaks into spaces.
    pub fn insert_str(&mut self, text: &str) {
        let normalized = normalize(text, self.multiline);
        self.delete_selection();
        self.text.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
    }

    pub fn backspace(&mut self) {
        if self.delete_selection() {
            return;
        }
        if self.cursor == 0 {
            return;
        }
        let start = self.prev_boundary(self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn delete(&mut self) {
        if self.delete_selection() {
            return;
        }
        if self.cursor >= self.text.len() {
            return;
        }
        let end = self.next_boundary(self.cursor);
        self.text.replace_range(self.cursor..end, "");
    }

    pub fn move_left(&mut self, extend: bool) {
        self.begin_motion(extend);
        self.cursor = self.prev_boundary(self.cursor);
    }

    pub fn move_right(&mut self, extend: bool) {
        self.begin_motion(extend);
        self.cursor = self.next_boundary(self.cursor);
    }

    pub fn move_home(&mut self, extend: bool) {
        self.begin_motion(extend);
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_end(&mut self, extend: bool) {
        self.begin_motion(extend);
        self.cursor = self.line_end(self.cursor);
    }

    pub fn move_up(&mut self, extend: bool) {
        self.begin_motion(extend);
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let column = self.text[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_in_line(prev_start, column);
    }

    pub fn move_down(&mut self, extend: bool) {
        self.begin_motion(extend);
        let end = self.line_end(self.cursor);
        if end >= self.text.len() {
            self.cursor = self.text.len();
            return;
        }
        let column = self.text[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count();
        self.cursor = self.offset_in_line(end + 1, column);
    }

    /// Row and display column of the cursor, for placing the terminal caret.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let row = before.matches('\n').count();
        let column = UnicodeWidthStr::width(&before[self.line_start(self.cursor)..]);
        (row, column)
    }

    /// Byte ranges of every line, excluding the newline itself.
    pub fn line_ranges(&self) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;
        for (idx, ch) in self.text.char_indices() {
            if ch == '\n' {
                ranges.push(start..idx);
                start = idx + 1;
            }
        }
        ranges.push(start..self.text.len());
        ranges
    }

    fn begin_motion(&mut self, extend: bool) {
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.anchor = None;
        }
    }

    fn delete_selection(&mut self) -> bool {
        let Some(range) = self.selection_range() else {
            self.anchor = None;
            return false;
        };
        self.cursor = range.start;
        self.text.replace_range(range, "");
        self.anchor = None;
        true
    }

    fn prev_boundary(&self, idx: usize) -> usize {
        self.text[..idx]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self, idx: usize) -> usize {
        idx + self.text[idx..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0)
    }

    fn line_start(&self, idx: usize) -> usize {
        self.text[..idx].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, idx: usize) -> usize {
        self.text[idx..]
            .find('\n')
            .map(|i| idx + i)
            .unwrap_or(self.text.len())
    }

    fn offset_in_line(&self, line_start: usize, column: usize) -> usize {
        let line_end = self.line_end(line_start);
        self.text[line_start..line_end]
            .char_indices()
            .nth(column)
            .map(|(i, _)| line_start + i)
            .unwrap_or(line_end)
    }
}

/// `\r\n` and lone `\r` become `\n`; single-line buffers then fold every break into a space.
fn normalize(text: &str, multiline: bool) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    if multiline {
        text
    } else {
        text.replace('\n', " ")
    }
}
