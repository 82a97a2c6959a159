//! Editor session: the state aggregate and its lifecycle.

mod input;
mod movement;
mod render;

use crate::buffer::Buffer;
use crate::commands::CommandTable;
use crate::config::{Config, Keys};
use crate::types::{Line, Mode, Pos};
use crate::viewport::Viewport;

/// One editing session over a single page.
///
/// Owns the buffer, cursor, viewport and mode exclusively; there is exactly
/// one mutator and no concurrent readers. A session lives until navigation
/// is requested, at which point it is discarded — edits are never persisted.
pub struct Session {
    /// The page content being viewed/edited.
    pub buf: Buffer,
    /// Cursor position in the buffer.
    pub cursor: Pos,
    /// Visible window over the buffer.
    pub viewport: Viewport,
    /// Current mode; Command mode carries its command buffer.
    pub mode: Mode,
    /// Whether the screen needs to be redrawn.
    pub(crate) needs_redraw: bool,
    /// Configured key assignments.
    pub(crate) keys: Keys,
    /// Configured `command -> route` table.
    pub(crate) commands: CommandTable,
}

impl Session {
    /// Create a session over `lines`, sized for a terminal `total_rows` tall
    /// (one row is reserved for the status line).
    pub fn new(lines: Vec<Line>, config: &Config, total_rows: usize) -> Self {
        let mut viewport = Viewport::new(config.line_unit);
        viewport.recompute_rows(total_rows.saturating_sub(1));
        Self {
            buf: Buffer::from_lines(lines),
            cursor: Pos::ORIGIN,
            viewport,
            mode: Mode::Normal,
            needs_redraw: true,
            keys: config.keys.clone(),
            commands: CommandTable::new(config.commands.clone()),
        }
    }

    /// Mark that the screen needs to be redrawn.
    pub fn mark_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Called when the terminal is resized to `total_rows` tall.
    pub fn on_resize(&mut self, total_rows: usize) {
        self.viewport.recompute_rows(total_rows.saturating_sub(1));
        self.viewport.scroll_to_cursor(self.cursor.line);
        self.mark_redraw();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::navigate::Navigator;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// A session over plain-text lines with default keys and a 10-row screen.
    pub fn session(lines: &[&str]) -> Session {
        session_with_config(lines, &Config::default())
    }

    pub fn session_with_config(lines: &[&str], config: &Config) -> Session {
        let lines = lines.iter().copied().map(Line::plain).collect();
        Session::new(lines, config, 11)
    }

    /// Feed one key press through the mode state machine.
    pub fn press(session: &mut Session, nav: &mut dyn Navigator, code: KeyCode) {
        session.handle_key(KeyEvent::new(code, KeyModifiers::NONE), nav);
    }

    pub fn type_str(session: &mut Session, nav: &mut dyn Navigator, text: &str) {
        for ch in text.chars() {
            press(session, nav, KeyCode::Char(ch));
        }
    }
}
