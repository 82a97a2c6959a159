//! `pagevim` — browse site content in the terminal with vim-style modal
//! key commands.
//!
//! ## Reading guide (high level architecture)
//! - **`main()` / `run()`**: sets up the terminal and runs one editing
//!   session per page until navigation leaves the site.
//! - **`terminal::TerminalGuard`**: raw mode + alternate screen, restored on
//!   exit (even on panic unwind).
//! - **`buffer::Buffer`**: the page content model — a `Vec<Line>` where a
//!   line is plain text or a link — and the low-level editing operations.
//! - **`editor::Session`**: cursor, viewport, mode state machine, input
//!   dispatch and rendering for one page.
//! - **`commands::CommandTable`** / **`navigate`**: `:command` dispatch to
//!   routes; a route either opens another page or ends the program.
//! - **`config` / `content`**: keys, the command table and page content,
//!   overridable from `pagevim.toml`.

mod buffer;
mod commands;
mod config;
mod content;
mod editor;
mod navigate;
mod terminal;
mod types;
mod utils;
mod viewport;

use anyhow::Result;
use config::Config;
use content::ContentSource;
use crossterm::event;
use crossterm::terminal as term;
use editor::Session;
use navigate::PendingNav;
use std::io;
use std::path::PathBuf;
use terminal::TerminalGuard;

fn main() {
    match run() {
        // An external route ends the program; print the destination once
        // the terminal has been restored.
        Ok(Some(destination)) => println!("Navigating to {destination}"),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {e:?}");
            std::process::exit(1);
        }
    }
}

/// Runs the editor: one session per page, restarted whenever navigation
/// lands on another known page. Returns the external destination when a
/// route leaves the site.
fn run() -> Result<Option<String>> {
    let args: Vec<String> = std::env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut start_page: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                println!("pagevim — browse site content with vim-style modal commands");
                println!();
                println!("USAGE:");
                println!("    pagevim [PAGE]           Open a page (default: the start page)");
                println!("    pagevim --config <FILE>  Use a specific config file");
                println!("    pagevim -h, --help       Show this help message");
                println!("    pagevim -v, --version    Show version information");
                println!();
                println!("KEYS:");
                println!("    h/j/k/l or arrows      Move the cursor");
                println!("    i                      Insert mode; Esc returns to Normal");
                println!("    :<command><Enter>      Run a command (:help, :home, :q, ...)");
                println!("    Enter on a link line   Follow the link");
                return Ok(None);
            }
            "-v" | "--version" => {
                println!("pagevim v{}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    eprintln!("Error: --config requires a path");
                    std::process::exit(1);
                };
                config_path = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => {
                eprintln!("Error: Unknown flag '{flag}'");
                eprintln!("Try 'pagevim --help' for more information.");
                std::process::exit(1);
            }
            page => start_page = Some(page.to_string()),
        }
        i += 1;
    }

    let config = Config::load(config_path.as_deref())?;
    let source = ContentSource::from_config(&config);
    let mut page = start_page.unwrap_or_else(|| config.start_page.clone());

    let mut stdout = io::stdout();
    let _term = TerminalGuard::new(&mut stdout)?;

    // One iteration per session. Navigation to a known page starts a fresh
    // session on it; any other route is terminal.
    loop {
        let (_w, h) = term::size()?;
        let mut session = Session::new(source.content_for(&page), &config, h as usize);
        let mut nav = PendingNav::new();

        let route = loop {
            session.render(&mut stdout)?;
            let event = event::read()?;
            session.handle_event(&event, &mut nav);
            if let Some(route) = nav.take() {
                break route;
            }
        };

        if source.has_page(&route) {
            page = route;
        } else {
            return Ok(Some(route));
        }
    }
}
