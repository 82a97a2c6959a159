//! Cursor movement and clamping.

use super::Session;
use std::cmp::min;

impl Session {
    /// Move one column left; no-op at the start of the line.
    pub fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
            self.mark_redraw();
        }
    }

    /// Move one column right; no-op at the end of the line. The cursor may
    /// rest one past the last character.
    pub fn move_right(&mut self) {
        if self.cursor.col < self.buf.line_len_chars(self.cursor.line) {
            self.cursor.col += 1;
            self.mark_redraw();
        }
    }

    /// Move down a line, clamping the column to the new line's length and
    /// reconciling the viewport. No-op on the last line.
    ///
    /// The column is a single scalar: a column clamped away on a short line
    /// is not restored when moving back to a longer one.
    pub fn move_down(&mut self) {
        if self.cursor.line + 1 < self.buf.line_count() {
            self.cursor.line += 1;
            self.cursor.col = min(self.cursor.col, self.buf.line_len_chars(self.cursor.line));
            self.viewport.scroll_to_cursor(self.cursor.line);
            self.mark_redraw();
        }
    }

    /// Move up a line; same clamping and reconciliation as [`Self::move_down`].
    pub fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = min(self.cursor.col, self.buf.line_len_chars(self.cursor.line));
            self.viewport.scroll_to_cursor(self.cursor.line);
            self.mark_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::session;
    use crate::types::Pos;

    #[test]
    fn horizontal_moves_clamp_at_line_edges() {
        let mut s = session(&["ab"]);
        s.move_left();
        assert_eq!(s.cursor, Pos::ORIGIN);
        s.move_right();
        s.move_right();
        assert_eq!(s.cursor, Pos { line: 0, col: 2 });
        s.move_right();
        assert_eq!(s.cursor, Pos { line: 0, col: 2 });
    }

    #[test]
    fn vertical_moves_clamp_at_buffer_edges() {
        let mut s = session(&["a", "b"]);
        s.move_up();
        assert_eq!(s.cursor.line, 0);
        s.move_down();
        assert_eq!(s.cursor.line, 1);
        s.move_down();
        assert_eq!(s.cursor.line, 1);
    }

    #[test]
    fn vertical_move_clamps_column_to_short_line() {
        let mut s = session(&["long line", "ab", "another long"]);
        s.cursor = Pos { line: 0, col: 7 };
        s.move_down();
        assert_eq!(s.cursor, Pos { line: 1, col: 2 });
    }

    #[test]
    fn clamped_column_is_not_restored() {
        // Single scalar column state: down over a short line then back up
        // leaves the cursor at the clamped column.
        let mut s = session(&["long line", "ab"]);
        s.cursor = Pos { line: 0, col: 7 };
        s.move_down();
        s.move_up();
        assert_eq!(s.cursor, Pos { line: 0, col: 2 });
    }

    #[test]
    fn column_stays_in_bounds_over_any_horizontal_walk() {
        let mut s = session(&["abc"]);
        for _ in 0..10 {
            s.move_right();
        }
        for _ in 0..20 {
            s.move_left();
        }
        assert_eq!(s.cursor.col, 0);
        for step in 0..15 {
            if step % 3 == 0 {
                s.move_left();
            } else {
                s.move_right();
            }
            assert!(s.cursor.col <= s.buf.line_len_chars(s.cursor.line));
        }
    }

    #[test]
    fn line_and_column_stay_in_bounds_over_any_vertical_walk() {
        let mut s = session(&["one", "a much longer line", "", "tail"]);
        s.cursor.col = 3;
        for step in 0..25 {
            if step % 5 < 3 {
                s.move_down();
            } else {
                s.move_up();
            }
            assert!(s.cursor.line < s.buf.line_count());
            assert!(s.cursor.col <= s.buf.line_len_chars(s.cursor.line));
        }
    }

    #[test]
    fn moving_below_window_scrolls_viewport() {
        let mut s = session(&["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"]);
        for _ in 0..11 {
            s.move_down();
        }
        assert_eq!(s.cursor.line, 11);
        assert!(s.viewport.offset <= 11 && 11 < s.viewport.offset + s.viewport.rows);
    }
}
