//! Rendering: drawing the session to the terminal.

use super::Session;
use crate::types::Mode;
use crate::viewport::Row;
use anyhow::Result;
use crossterm::{
    cursor,
    style::{self, Attribute, Color},
    terminal::{self, ClearType},
    QueueableCommand,
};
use std::io::{Stdout, Write};
use unicode_width::UnicodeWidthChar;

/// The prefix of `text` that fits in `max_cols` display columns.
fn truncated(text: &str, max_cols: usize) -> String {
    let mut cols = 0;
    text.chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(1);
            if cols + w > max_cols {
                false
            } else {
                cols += w;
                true
            }
        })
        .collect()
}

impl Session {
    /// Redraw the whole screen if anything requested it. Full-screen redraw
    /// keeps this simple and is cheap at page-content sizes.
    pub fn render(&mut self, stdout: &mut Stdout) -> Result<()> {
        if !self.needs_redraw {
            return Ok(());
        }
        self.needs_redraw = false;

        let (w, h) = terminal::size()?;
        let width = w as usize;
        let status_y = h.saturating_sub(1);

        stdout.queue(cursor::Hide)?;
        stdout.queue(style::ResetColor)?;

        for (row, slot) in self.viewport.visible_rows(self.buf.line_count()).into_iter().enumerate() {
            stdout.queue(cursor::MoveTo(0, u16::try_from(row).unwrap_or(u16::MAX)))?;
            stdout.queue(terminal::Clear(ClearType::CurrentLine))?;
            match slot {
                Row::Filler => {
                    stdout.queue(style::SetForegroundColor(Color::DarkGrey))?;
                    stdout.queue(style::Print("~"))?;
                    stdout.queue(style::ResetColor)?;
                }
                Row::Content(i) => self.render_line(stdout, i, width)?,
            }
        }

        self.render_status(stdout, status_y, width)?;
        stdout.flush()?;
        Ok(())
    }

    fn render_line(&self, stdout: &mut Stdout, i: usize, width: usize) -> Result<()> {
        let line = &self.buf.lines[i];
        let is_link = line.target().is_some();
        if is_link {
            stdout.queue(style::SetForegroundColor(Color::Cyan))?;
            stdout.queue(style::SetAttribute(Attribute::Underlined))?;
        }

        if i == self.cursor.line {
            // Draw char by char so the cell under the cursor can be reversed.
            let mut cols = 0;
            let mut cursor_drawn = false;
            for (ci, ch) in line.text().chars().enumerate() {
                let w = UnicodeWidthChar::width(ch).unwrap_or(1);
                if cols + w > width {
                    break;
                }
                if ci == self.cursor.col {
                    stdout.queue(style::SetAttribute(Attribute::Reverse))?;
                    stdout.queue(style::Print(ch))?;
                    stdout.queue(style::SetAttribute(Attribute::NoReverse))?;
                    cursor_drawn = true;
                } else {
                    stdout.queue(style::Print(ch))?;
                }
                cols += w;
            }
            // Cursor resting one past the end of the line: a reversed space.
            if !cursor_drawn && cols < width {
                stdout.queue(style::SetAttribute(Attribute::Reverse))?;
                stdout.queue(style::Print(" "))?;
                stdout.queue(style::SetAttribute(Attribute::NoReverse))?;
            }
        } else {
            stdout.queue(style::Print(truncated(line.text(), width)))?;
        }

        if is_link {
            stdout.queue(style::SetAttribute(Attribute::NoUnderline))?;
            stdout.queue(style::ResetColor)?;
        }
        Ok(())
    }

    /// The bottom line: the live command buffer while one is being typed,
    /// the uppercased mode name otherwise.
    fn render_status(&self, stdout: &mut Stdout, y: u16, width: usize) -> Result<()> {
        stdout.queue(cursor::MoveTo(0, y))?;
        stdout.queue(terminal::Clear(ClearType::CurrentLine))?;
        let text = match &self.mode {
            Mode::Command { buffer } => buffer.clone(),
            mode => format!("{} MODE", mode.display_name()),
        };
        stdout.queue(style::Print(truncated(&text, width)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::truncated;

    #[test]
    fn truncated_respects_display_columns() {
        assert_eq!(truncated("hello", 3), "hel");
        assert_eq!(truncated("hello", 10), "hello");
        assert_eq!(truncated("", 5), "");
        // CJK chars are two columns wide
        assert_eq!(truncated("日本語", 4), "日本");
        assert_eq!(truncated("日本語", 5), "日本");
    }
}
