//! Navigation away from the current session.

/// Performs the transition to another destination.
///
/// Navigation is one-shot and terminal for the session: the caller does not
/// consult a return value, and the session is expected to end once a route
/// has been requested.
pub trait Navigator {
    fn navigate(&mut self, route: &str);
}

/// A [`Navigator`] that records the requested route.
///
/// The run loop checks it after each input event: a route naming a known
/// page opens a fresh session on that page, anything else ends the program.
#[derive(Default)]
pub struct PendingNav {
    route: Option<String>,
}

impl PendingNav {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending route, if an event requested one.
    pub fn take(&mut self) -> Option<String> {
        self.route.take()
    }
}

impl Navigator for PendingNav {
    fn navigate(&mut self, route: &str) {
        // First request wins; a session navigates at most once.
        if self.route.is_none() {
            self.route = Some(route.to_string());
        }
    }
}

/// Test double counting every navigate call.
#[cfg(test)]
pub struct RecordingNav {
    pub calls: Vec<String>,
}

#[cfg(test)]
impl RecordingNav {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }
}

#[cfg(test)]
impl Navigator for RecordingNav {
    fn navigate(&mut self, route: &str) {
        self.calls.push(route.to_string());
    }
}
