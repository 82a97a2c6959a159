//! Common types used throughout the editor.

/// A position in the page buffer.
///
/// - `line`: line index (0-based)
/// - `col`: **char index** within that line (0-based). This is *not* a byte index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub line: usize,
    pub col: usize, // char index within line
}

impl Pos {
    pub const ORIGIN: Pos = Pos { line: 0, col: 0 };
}

/// One line of page content.
///
/// A line is either plain text or text annotated with a navigation target
/// (an opaque route passed to the navigator when the visitor presses Enter
/// on it in Normal mode). Only the text takes part in cursor and edit
/// arithmetic; the target rides alongside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Plain(String),
    Link { text: String, target: String },
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    pub fn link(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Link { text: text.into(), target: target.into() }
    }

    /// The visible text of the line, whichever variant it is.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Link { text, .. } => text,
        }
    }

    /// The navigation target, if this line carries one.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Link { target, .. } => Some(target),
        }
    }

    pub fn len_chars(&self) -> usize {
        self.text().chars().count()
    }
}

/// The current editing mode.
///
/// Command mode owns the command buffer it accumulates; the buffer always
/// starts with the command-prefix character while the mode is active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Command { buffer: String },
}

impl Mode {
    /// Uppercase name for the status line.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Command { .. } => "COMMAND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_text_and_target() {
        let plain = Line::plain("hello");
        assert_eq!(plain.text(), "hello");
        assert_eq!(plain.target(), None);

        let link = Line::link("articles", "/articles");
        assert_eq!(link.text(), "articles");
        assert_eq!(link.target(), Some("/articles"));
    }

    #[test]
    fn mode_display_names() {
        assert_eq!(Mode::Normal.display_name(), "NORMAL");
        assert_eq!(Mode::Insert.display_name(), "INSERT");
        let cmd = Mode::Command { buffer: ":q".to_string() };
        assert_eq!(cmd.display_name(), "COMMAND");
    }
}
