//! Terminal acquisition and restore.

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style,
    terminal::{self, ClearType},
    ExecutableCommand, QueueableCommand,
};
use std::io::{self, Stdout, Write};

/// Holds the terminal in editor state for as long as it lives.
///
/// A session draws on the alternate screen in raw mode, with mouse capture
/// on so wheel events reach the dispatcher. Every exit path — `:q`, a
/// followed link, an error, a panic unwind — goes through `Drop`, which
/// hands the visitor their shell back before anything is printed.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new(stdout: &mut Stdout) -> Result<Self> {
        terminal::enable_raw_mode().context("could not enable raw mode")?;
        stdout
            .queue(terminal::EnterAlternateScreen)?
            .queue(EnableMouseCapture)?
            .queue(cursor::Hide)?
            .queue(terminal::Clear(ClearType::All))?
            .flush()
            .context("could not switch to the alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best effort only: restore must not panic during unwind.
        let mut stdout = io::stdout();
        let _ = stdout.execute(style::ResetColor);
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}
