//! Input dispatch: one entry point per event kind, routed by mode.

use super::Session;
use crate::navigate::Navigator;
use crate::types::Mode;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use std::mem;

impl Session {
    /// Route one input event to its handler.
    ///
    /// Each event runs to completion before the next is read: buffer
    /// mutation, cursor clamp, viewport reconciliation and the redraw
    /// request all happen here, synchronously.
    pub fn handle_event(&mut self, event: &Event, nav: &mut dyn Navigator) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(*key, nav);
                // Key presses always redraw; the wheel path below only
                // redraws when the cursor actually moved.
                self.mark_redraw();
            }
            Event::Mouse(mouse) => self.handle_wheel(*mouse),
            Event::Resize(_, rows) => self.on_resize(*rows as usize),
            _ => {}
        }
    }

    /// Dispatch a key press to the active mode's handler.
    pub fn handle_key(&mut self, key: KeyEvent, nav: &mut dyn Navigator) {
        match self.mode {
            Mode::Normal => self.handle_normal_key(key, nav),
            Mode::Insert => self.handle_insert_key(key),
            Mode::Command { .. } => self.handle_command_key(key, nav),
        }
    }

    /// Wheel scrolling is a direct vertical cursor move, outside the mode
    /// machine. The column re-clamps to the new line's length.
    fn handle_wheel(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.move_down(),
            MouseEventKind::ScrollUp => self.move_up(),
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent, nav: &mut dyn Navigator) {
        match key.code {
            KeyCode::Char(c) if c == self.keys.command_prefix => {
                self.mode = Mode::Command { buffer: c.to_string() };
            }
            KeyCode::Char(c) if c == self.keys.insert => {
                self.mode = Mode::Insert;
            }
            KeyCode::Char('h') | KeyCode::Left => self.move_left(),
            KeyCode::Char('l') | KeyCode::Right => self.move_right(),
            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            KeyCode::Enter => {
                // Following a link ends the session; the run loop acts on it.
                if let Some(target) = self.buf.target_at(self.cursor.line) {
                    nav.navigate(target);
                }
            }
            _ => {}
        }
    }

    fn handle_insert_key(&mut self, key: KeyEvent) {
        if self.keys.exit_matches(key.code) {
            self.mode = Mode::Normal;
            return;
        }
        match key.code {
            KeyCode::Enter => {
                self.cursor = self.buf.split_line(self.cursor);
                self.viewport.scroll_to_cursor(self.cursor.line);
            }
            KeyCode::Backspace => {
                self.cursor = self.buf.backspace(self.cursor);
                self.viewport.scroll_to_cursor(self.cursor.line);
            }
            KeyCode::Char(ch) if is_plain(key.modifiers) => {
                self.cursor = self.buf.insert_char(self.cursor, ch);
            }
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent, nav: &mut dyn Navigator) {
        if self.keys.exit_matches(key.code) {
            self.mode = Mode::Normal;
            return;
        }
        let Mode::Command { buffer } = &mut self.mode else { return };
        match key.code {
            KeyCode::Enter => {
                let committed = mem::take(buffer);
                self.mode = Mode::Normal;
                let command = &committed[self.keys.command_prefix.len_utf8()..];
                self.commands.dispatch(command, nav);
            }
            KeyCode::Backspace => {
                // The prefix character is never deleted; minimum length is 1.
                if buffer.chars().count() > 1 {
                    buffer.pop();
                }
            }
            KeyCode::Char(ch) if is_plain(key.modifiers) => {
                buffer.push(ch);
            }
            _ => {}
        }
    }
}

/// Printable input only: modified chords are not text.
fn is_plain(modifiers: KeyModifiers) -> bool {
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
