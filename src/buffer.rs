//! The page buffer: stores lines of content and provides editing operations.

use crate::types::{Line, Pos};
use crate::utils::char_to_byte_index;

/// The page buffer: a list of [`Line`]s, each plain text or a link.
///
/// Intentionally simple: a `Vec<Line>` is plenty for a page of site content.
/// Two invariants hold for the whole session:
///
/// - The buffer is never empty. Zero lines normalize to one empty plain line,
///   and nothing ever removes the last remaining line.
/// - Editing the text of a link line demotes it to a plain line. The
///   navigation target is dropped the moment that line's content changes
///   (including splits and merges). This is deliberate compatibility
///   behavior, not an oversight.
///
/// Index arguments are expected to be pre-clamped by the cursor layer; the
/// buffer does not re-validate them.
pub struct Buffer {
    pub lines: Vec<Line>,
}

impl Buffer {
    /// Create a buffer with a single empty plain line.
    pub fn new() -> Self {
        Self { lines: vec![Line::plain("")] }
    }

    /// Build a buffer from page content, normalizing the empty case.
    pub fn from_lines(lines: Vec<Line>) -> Self {
        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn text_at(&self, i: usize) -> &str {
        self.lines[i].text()
    }

    /// The navigation target of line `i`, if it is a link line.
    pub fn target_at(&self, i: usize) -> Option<&str> {
        self.lines[i].target()
    }

    pub fn line_len_chars(&self, i: usize) -> usize {
        self.lines.get(i).map_or(0, Line::len_chars)
    }

    /// Replace the text of line `i`. The result is always a plain line.
    pub fn set_text(&mut self, i: usize, text: impl Into<String>) {
        self.lines[i] = Line::plain(text);
    }

    /// Insert a new plain line immediately after line `i`.
    pub fn insert_line_after(&mut self, i: usize, text: impl Into<String>) {
        self.lines.insert(i + 1, Line::plain(text));
    }

    /// Remove line `i`. Never called on the only remaining line.
    pub fn remove_line(&mut self, i: usize) -> Line {
        self.lines.remove(i)
    }

    /// Append `suffix` to the end of line `i`'s text, demoting it to plain.
    pub fn merge_line_into(&mut self, i: usize, suffix: &str) {
        let mut text = self.lines[i].text().to_string();
        text.push_str(suffix);
        self.set_text(i, text);
    }

    /// Insert a single character at a position, returning the new cursor position.
    pub fn insert_char(&mut self, p: Pos, ch: char) -> Pos {
        let mut text = self.text_at(p.line).to_string();
        let bi = char_to_byte_index(&text, p.col);
        text.insert(bi, ch);
        self.set_text(p.line, text);
        Pos { line: p.line, col: p.col + 1 }
    }

    /// Split line `p.line` at the cursor: text before the cursor stays, the
    /// remainder becomes a new line below. Returns the new cursor position
    /// (column 0 of the new line). Both halves come out plain.
    pub fn split_line(&mut self, p: Pos) -> Pos {
        let text = self.text_at(p.line);
        let bi = char_to_byte_index(text, p.col);
        let (head, tail) = (text[..bi].to_string(), text[bi..].to_string());
        self.set_text(p.line, head);
        self.insert_line_after(p.line, tail);
        Pos { line: p.line + 1, col: 0 }
    }

    /// Backspace behavior:
    /// - If `col > 0`, delete the character left of the cursor.
    /// - If at start of line and not the first line, merge this line's text
    ///   onto the end of the previous line and remove it.
    pub fn backspace(&mut self, p: Pos) -> Pos {
        if p.col > 0 {
            let mut text = self.text_at(p.line).to_string();
            let bi = char_to_byte_index(&text, p.col - 1);
            text.remove(bi);
            self.set_text(p.line, text);
            Pos { line: p.line, col: p.col - 1 }
        } else if p.line > 0 {
            let removed = self.remove_line(p.line);
            let prev_len = self.line_len_chars(p.line - 1);
            self.merge_line_into(p.line - 1, removed.text());
            Pos { line: p.line - 1, col: prev_len }
        } else {
            p
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(lines: &[&str]) -> Buffer {
        Buffer::from_lines(lines.iter().copied().map(Line::plain).collect())
    }

    // ==================== Creation and normalization ====================

    #[test]
    fn new_buffer_has_one_empty_line() {
        let b = Buffer::new();
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.text_at(0), "");
    }

    #[test]
    fn empty_content_normalizes_to_one_line() {
        let b = Buffer::from_lines(vec![]);
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.text_at(0), "");
        assert_eq!(b.target_at(0), None);
    }

    #[test]
    fn from_lines_keeps_link_targets() {
        let b = Buffer::from_lines(vec![
            Line::plain("intro"),
            Line::link("articles", "/articles"),
        ]);
        assert_eq!(b.target_at(0), None);
        assert_eq!(b.target_at(1), Some("/articles"));
        assert_eq!(b.text_at(1), "articles");
    }

    // ==================== Edit operations ====================

    #[test]
    fn insert_char_advances_column() {
        let mut b = buf(&["ac"]);
        let p = b.insert_char(Pos { line: 0, col: 1 }, 'b');
        assert_eq!(p, Pos { line: 0, col: 2 });
        assert_eq!(b.text_at(0), "abc");
    }

    #[test]
    fn insert_char_multibyte() {
        let mut b = buf(&["hllo"]);
        let p = b.insert_char(Pos { line: 0, col: 1 }, 'é');
        assert_eq!(p, Pos { line: 0, col: 2 });
        assert_eq!(b.text_at(0), "héllo");
    }

    #[test]
    fn split_line_at_middle() {
        let mut b = buf(&["hello world"]);
        let p = b.split_line(Pos { line: 0, col: 5 });
        assert_eq!(p, Pos { line: 1, col: 0 });
        assert_eq!(b.line_count(), 2);
        assert_eq!(b.text_at(0), "hello");
        assert_eq!(b.text_at(1), " world");
    }

    #[test]
    fn split_line_at_end_creates_empty_line() {
        let mut b = buf(&["ab", "cd"]);
        let p = b.split_line(Pos { line: 0, col: 2 });
        assert_eq!(p, Pos { line: 1, col: 0 });
        assert_eq!(b.text_at(0), "ab");
        assert_eq!(b.text_at(1), "");
        assert_eq!(b.text_at(2), "cd");
    }

    #[test]
    fn backspace_mid_line() {
        let mut b = buf(&["abc"]);
        let p = b.backspace(Pos { line: 0, col: 2 });
        assert_eq!(p, Pos { line: 0, col: 1 });
        assert_eq!(b.text_at(0), "ac");
    }

    #[test]
    fn backspace_at_line_start_merges() {
        let mut b = buf(&["line1", "line2"]);
        let p = b.backspace(Pos { line: 1, col: 0 });
        assert_eq!(p, Pos { line: 0, col: 5 });
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.text_at(0), "line1line2");
    }

    #[test]
    fn backspace_at_buffer_start_is_noop() {
        let mut b = buf(&["abc"]);
        let p = b.backspace(Pos::ORIGIN);
        assert_eq!(p, Pos::ORIGIN);
        assert_eq!(b.text_at(0), "abc");
        assert_eq!(b.line_count(), 1);
    }

    // ==================== Round trips ====================

    #[test]
    fn split_then_merge_restores_line() {
        let mut b = buf(&["hello world"]);
        let p = b.split_line(Pos { line: 0, col: 5 });
        let p = b.backspace(p);
        assert_eq!(p, Pos { line: 0, col: 5 });
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.text_at(0), "hello world");
    }

    #[test]
    fn insert_then_backspace_restores_line() {
        let mut b = buf(&["abcd"]);
        let p = b.insert_char(Pos { line: 0, col: 2 }, 'X');
        let p = b.backspace(p);
        assert_eq!(p, Pos { line: 0, col: 2 });
        assert_eq!(b.text_at(0), "abcd");
    }

    // ==================== Edit destroys link ====================

    #[test]
    fn set_text_drops_link_target() {
        let mut b = Buffer::from_lines(vec![Line::link("home", "/index")]);
        b.set_text(0, "edited");
        assert_eq!(b.target_at(0), None);
        assert_eq!(b.text_at(0), "edited");
    }

    #[test]
    fn insert_char_drops_link_target() {
        let mut b = Buffer::from_lines(vec![Line::link("home", "/index")]);
        b.insert_char(Pos { line: 0, col: 4 }, '!');
        assert_eq!(b.target_at(0), None);
        assert_eq!(b.text_at(0), "home!");
    }

    #[test]
    fn split_link_line_leaves_both_halves_plain() {
        let mut b = Buffer::from_lines(vec![Line::link("home page", "/index")]);
        b.split_line(Pos { line: 0, col: 4 });
        assert_eq!(b.target_at(0), None);
        assert_eq!(b.target_at(1), None);
        assert_eq!(b.text_at(0), "home");
        assert_eq!(b.text_at(1), " page");
    }

    #[test]
    fn merge_into_link_line_drops_target() {
        let mut b = Buffer::from_lines(vec![Line::link("home", "/index"), Line::plain("tail")]);
        let p = b.backspace(Pos { line: 1, col: 0 });
        assert_eq!(p, Pos { line: 0, col: 4 });
        assert_eq!(b.target_at(0), None);
        assert_eq!(b.text_at(0), "hometail");
    }
}
