//! Session-expiry navigation port.

/// Capability invoked when the session cannot be recovered.
///
/// In a browser this would be a redirect to the login page; here it is
/// an injected callback so the session logic stays testable without a
/// navigation context.
pub trait SessionExpiredHandler: Send + Sync {
    /// Called after the session state has been cleared.
    ///
    /// `login_route` is the configured route the user should be sent to.
    fn on_session_expired(&self, login_route: &str);
}
