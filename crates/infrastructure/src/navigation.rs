//! Session-expiry navigation adapter.

use folio_application::ports::SessionExpiredHandler;

/// Handler that records the redirect in the log.
///
/// Headless consumers (the CLI binary, tests of the wiring) have no
/// navigation surface; a UI embedding supplies its own handler instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingRedirectHandler;

impl LoggingRedirectHandler {
    /// Creates the handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SessionExpiredHandler for LoggingRedirectHandler {
    fn on_session_expired(&self, login_route: &str) {
        tracing::warn!(route = login_route, "session expired; sign-in required");
    }
}
