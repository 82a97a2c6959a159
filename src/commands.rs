//! Command dispatch: mapping typed `:commands` to navigation routes.

use crate::navigate::Navigator;
use std::collections::HashMap;

/// The table of recognized commands, supplied by configuration.
///
/// Dispatch is exact-match: a committed command either names a route here or
/// it is silently ignored. There is no error surface for a typo'd command —
/// the editor just drops back to Normal mode.
pub struct CommandTable {
    routes: HashMap<String, String>,
}

impl CommandTable {
    pub fn new(routes: HashMap<String, String>) -> Self {
        Self { routes }
    }

    /// The route a command maps to, if it is recognized.
    pub fn route_for(&self, command: &str) -> Option<&str> {
        self.routes.get(command).map(String::as_str)
    }

    /// Interpret a committed command string (already stripped of its prefix).
    ///
    /// Calls the navigator exactly once for a recognized command and not at
    /// all otherwise.
    pub fn dispatch(&self, command: &str, nav: &mut dyn Navigator) {
        if let Some(route) = self.route_for(command) {
            nav.navigate(route);
        }
    }
}
