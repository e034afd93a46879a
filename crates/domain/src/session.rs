//! Persisted session state.
//!
//! `StoredSession` is the on-disk shape of a user session: the bearer
//! access token (if one is held) and a flag recording that a session
//! existed previously. The flag is what makes silent login possible after
//! a restart that dropped the access token but left the refresh cookie
//! intact.

use serde::{Deserialize, Serialize};

/// Persisted session state.
///
/// Invariant: an access token is never stored without the active flag.
/// The reverse is allowed — an active flag with no token marks a session
/// worth attempting a silent refresh for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoredSession {
    /// Bearer credential attached to outgoing requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,

    /// Marks that a valid session existed previously.
    #[serde(default)]
    session_active: bool,
}

impl StoredSession {
    /// Creates an empty session (no token, no active flag).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            access_token: None,
            session_active: false,
        }
    }

    /// Creates a session holding an access token.
    ///
    /// The active flag is set as a consequence; a stored token always
    /// implies an active session.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            session_active: true,
        }
    }

    /// Creates a tokenless session with the active flag set.
    ///
    /// This is the "returning user" state: no access token survived, but
    /// a refresh credential may still be honored by the backend.
    #[must_use]
    pub const fn active_without_token() -> Self {
        Self {
            access_token: None,
            session_active: true,
        }
    }

    /// Returns the stored access token, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Returns true if a session existed previously.
    #[must_use]
    pub const fn is_session_active(&self) -> bool {
        self.session_active
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.access_token.is_none() && !self.session_active
    }

    /// Replaces the access token, setting the active flag.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
        self.session_active = true;
    }

    /// Sets the active flag without touching the token.
    pub const fn mark_active(&mut self) {
        self.session_active = true;
    }

    /// Drops the token but keeps the active flag.
    pub fn drop_token(&mut self) {
        self.access_token = None;
    }

    /// Clears everything (logout or irrecoverable auth failure).
    pub fn clear(&mut self) {
        self.access_token = None;
        self.session_active = false;
    }

    /// Returns true if a silent refresh is worth attempting: no usable
    /// token, but a session existed previously.
    #[must_use]
    pub const fn should_attempt_refresh(&self) -> bool {
        self.access_token.is_none() && self.session_active
    }

    /// Re-establishes the invariant after deserializing external data.
    ///
    /// A hand-edited or legacy session file may carry a token without the
    /// active flag; a stored token always implies an active session.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.access_token.is_some() {
            self.session_active = true;
        }
        self
    }
}
