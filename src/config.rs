//! Configuration: keys, viewport sizing, the command table, and page content.
//!
//! Everything the core engine treats as policy lives here rather than being
//! hard-coded: the command-prefix character, the insert-entry and mode-exit
//! keys, the line-height unit for viewport sizing, the `command -> route`
//! table, and optional page content overrides.

use crate::types::Line;
use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "pagevim.toml";

/// A page line as written in the config file: either a bare string or a
/// `{ text, target }` table for a link line.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LineSpec {
    Plain(String),
    Link { text: String, target: String },
}

impl From<LineSpec> for Line {
    fn from(spec: LineSpec) -> Self {
        match spec {
            LineSpec::Plain(text) => Line::Plain(text),
            LineSpec::Link { text, target } => Line::Link { text, target },
        }
    }
}

/// Key assignments for the mode state machine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Keys {
    /// Starts Command mode; always the first character of the command buffer.
    pub command_prefix: char,
    /// Enters Insert mode from Normal mode.
    pub insert: char,
    /// Leaves Insert/Command mode. Either `"esc"` or a single character.
    pub exit: String,
}

impl Default for Keys {
    fn default() -> Self {
        Self { command_prefix: ':', insert: 'i', exit: "esc".to_string() }
    }
}

impl Keys {
    /// Whether a key press is the configured mode-exit key.
    pub fn exit_matches(&self, code: KeyCode) -> bool {
        match self.exit.as_str() {
            "esc" | "escape" => code == KeyCode::Esc,
            s => {
                let mut chars = s.chars();
                matches!((chars.next(), chars.next()), (Some(c), None) if code == KeyCode::Char(c))
            }
        }
    }
}

/// The full configuration. Every field has a default, so a partial (or
/// absent) config file is fine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keys: Keys,
    /// Display rows per buffer line; the viewport holds
    /// `display_height / line_unit` lines.
    pub line_unit: usize,
    /// Page opened when none is named on the command line.
    pub start_page: String,
    /// The `command -> route` table used by Command-mode dispatch.
    pub commands: HashMap<String, String>,
    /// Page content overriding (or extending) the built-in pages.
    pub pages: HashMap<String, Vec<LineSpec>>,
}

impl Default for Config {
    fn default() -> Self {
        let commands = [
            ("help", "help"),
            ("home", "home"),
            ("about", "about"),
            ("principles", "principles"),
            ("articles", "articles"),
            ("q", "https://www.google.com"),
        ]
        .into_iter()
        .map(|(cmd, route)| (cmd.to_string(), route.to_string()))
        .collect();

        Self {
            keys: Keys::default(),
            line_unit: 1,
            start_page: "home".to_string(),
            commands,
            pages: HashMap::new(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist and parse; otherwise `pagevim.toml` in
    /// the working directory is used when present, and built-in defaults
    /// when not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => {
                let default = Path::new(CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}
