//! The scrolling viewport: which slice of the buffer is on screen.

/// One screen row of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row {
    /// A buffer line, by index.
    Content(usize),
    /// Past the end of the buffer. Render-only, drawn as `~`, never stored
    /// in the buffer.
    Filler,
}

/// Visible window over the buffer: scroll offset plus row count.
///
/// `rows` is derived from the display height and the configured line-height
/// unit, recomputed whenever the terminal resizes. `offset` is the index of
/// the first visible buffer line.
pub struct Viewport {
    pub offset: usize,
    pub rows: usize,
    line_unit: usize,
}

impl Viewport {
    pub fn new(line_unit: usize) -> Self {
        // Guard against a zero unit from a hand-edited config.
        Self { offset: 0, rows: 0, line_unit: line_unit.max(1) }
    }

    /// Recompute the row count from the available display height.
    pub fn recompute_rows(&mut self, display_height: usize) {
        self.rows = display_height / self.line_unit;
    }

    /// Scroll the minimum amount needed to bring `cursor_line` into view.
    ///
    /// Afterwards `offset <= cursor_line < offset + rows` whenever `rows >= 1`.
    pub fn scroll_to_cursor(&mut self, cursor_line: usize) {
        if cursor_line < self.offset {
            self.offset = cursor_line;
        } else if self.rows >= 1 && cursor_line >= self.offset + self.rows {
            self.offset = cursor_line - self.rows + 1;
        }
    }

    /// The rows currently on screen: `rows` entries starting at `offset`,
    /// padded past the end of the buffer with filler markers.
    pub fn visible_rows(&self, line_count: usize) -> Vec<Row> {
        (self.offset..self.offset + self.rows)
            .map(|i| if i < line_count { Row::Content(i) } else { Row::Filler })
            .collect()
    }

}
