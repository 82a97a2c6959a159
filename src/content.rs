//! Page content: supplies the initial buffer lines for a page id.

use crate::config::Config;
use crate::types::Line;
use std::collections::HashMap;

/// Supplies the lines a session starts from, keyed by page id.
///
/// Pages come from the built-in set below, with config-file pages layered on
/// top (a config page with the same id wins). An unknown page id yields a
/// single empty plain line — a fallback, not an error.
pub struct ContentSource {
    pages: HashMap<String, Vec<Line>>,
}

impl ContentSource {
    pub fn from_config(config: &Config) -> Self {
        let mut pages = builtin_pages();
        for (id, specs) in &config.pages {
            pages.insert(id.clone(), specs.iter().cloned().map(Line::from).collect());
        }
        Self { pages }
    }

    /// Whether `page_id` names a page this source can supply.
    pub fn has_page(&self, page_id: &str) -> bool {
        self.pages.contains_key(page_id)
    }

    /// The initial buffer content for a page. Unknown ids fall back to one
    /// empty line.
    pub fn content_for(&self, page_id: &str) -> Vec<Line> {
        self.pages
            .get(page_id)
            .cloned()
            .unwrap_or_else(|| vec![Line::plain("")])
    }
}

fn builtin_pages() -> HashMap<String, Vec<Line>> {
    let mut pages = HashMap::new();

    pages.insert(
        "home".to_string(),
        vec![
            Line::plain(""),
            Line::plain("WELCOME"),
            Line::plain("-------"),
            Line::plain(""),
            Line::plain("This site is a vim simulator. Move with h/j/k/l, press"),
            Line::plain(": to type a command, or put the cursor on a link line"),
            Line::plain("and press Enter to follow it."),
            Line::plain(""),
            Line::link("  -> help", "help"),
            Line::link("  -> about me", "about"),
            Line::link("  -> core principles", "principles"),
            Line::link("  -> all articles", "articles"),
            Line::plain(""),
            Line::plain("Type :help<Enter> if you get stuck."),
        ],
    );

    pages.insert(
        "help".to_string(),
        vec![
            Line::plain(""),
            Line::plain("VIM SIMULATOR HELP"),
            Line::plain("----------"),
            Line::plain(""),
            Line::plain("MODES"),
            Line::plain("------"),
            Line::plain("Normal Mode - Press <Esc> to enter"),
            Line::plain("Insert Mode - Press i to enter"),
            Line::plain(""),
            Line::plain("COMMANDS"),
            Line::plain("--------"),
            Line::plain(":help<Enter>       - Show these instructions"),
            Line::plain(":home<Enter>       - Show home screen"),
            Line::plain(":about<Enter>      - Show about me"),
            Line::plain(":principles<Enter> - Show core principles"),
            Line::plain(":articles<Enter>   - Show all articles"),
            Line::plain(":q<Enter>          - Quit editor"),
            Line::plain(""),
            Line::plain("NAVIGATION"),
            Line::plain("----------"),
            Line::plain("h - move left"),
            Line::plain("j - move down"),
            Line::plain("k - move up"),
            Line::plain("l - move right"),
            Line::plain(""),
        ],
    );

    pages.insert(
        "about".to_string(),
        vec![
            Line::plain("Welcome to the About page"),
            Line::plain("Here you can learn more about this editor"),
            Line::plain(""),
            Line::link("  -> back home", "home"),
        ],
    );

    pages.insert(
        "principles".to_string(),
        vec![
            Line::plain("CORE PRINCIPLES"),
            Line::plain("---------------"),
            Line::plain(""),
            Line::plain("1. The keyboard is faster than the mouse."),
            Line::plain("2. Text is the universal interface."),
            Line::plain("3. Modes beat modifiers."),
            Line::plain(""),
            Line::link("  -> back home", "home"),
        ],
    );

    pages.insert(
        "articles".to_string(),
        vec![
            Line::plain("ARTICLES"),
            Line::plain("--------"),
            Line::plain(""),
            Line::plain("Nothing published yet. Check back soon."),
            Line::plain(""),
            Line::link("  -> back home", "home"),
        ],
    );

    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineSpec;

    #[test]
    fn builtin_pages_are_served() {
        let source = ContentSource::from_config(&Config::default());
        assert!(source.has_page("home"));
        assert!(source.has_page("help"));
        let help = source.content_for("help");
        assert!(help.iter().any(|l| l.text().contains("NAVIGATION")));
    }

    #[test]
    fn unknown_page_falls_back_to_one_empty_line() {
        let source = ContentSource::from_config(&Config::default());
        assert!(!source.has_page("missing"));
        assert_eq!(source.content_for("missing"), vec![Line::plain("")]);
    }

    #[test]
    fn config_pages_override_builtins() {
        let mut config = Config::default();
        config
            .pages
            .insert("about".to_string(), vec![LineSpec::Plain("custom about".to_string())]);
        let source = ContentSource::from_config(&config);
        assert_eq!(source.content_for("about"), vec![Line::plain("custom about")]);
    }

    #[test]
    fn home_page_links_carry_targets() {
        let source = ContentSource::from_config(&Config::default());
        let home = source.content_for("home");
        let targets: Vec<&str> = home.iter().filter_map(Line::target).collect();
        assert_eq!(targets, vec!["help", "about", "principles", "articles"]);
    }
}
