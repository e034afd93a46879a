//! Authentication state types.
//!
//! This module defines the in-memory authentication state the UI layer
//! binds to, the user profile shape returned by the backend, and the
//! token payload returned by the refresh endpoint.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Load status of the current-user fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// No fetch has started.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Succeeded,
    /// The last fetch failed.
    Failed,
}

/// The authenticated user's profile, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Role name (e.g. "user", "admin").
    #[serde(default)]
    pub role: Option<String>,
}

/// Token payload returned by the refresh endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionTokens {
    /// New bearer credential.
    pub access_token: String,
    /// Replacement refresh token, when the backend rotates it.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// In-memory authentication state.
///
/// Created at application start, mutated only by the current-user fetch
/// flow, torn down on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuthState {
    /// True once a current-user fetch has succeeded.
    pub is_authenticated: bool,
    /// The authenticated user, if any.
    pub user: Option<UserProfile>,
    /// Status of the current-user fetch.
    pub status: LoadStatus,
    /// Error message from the last failed fetch.
    pub error: Option<String>,
}

impl AuthState {
    /// Fresh unauthenticated state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_authenticated: false,
            user: None,
            status: LoadStatus::Idle,
            error: None,
        }
    }

    /// Transition: a current-user fetch started.
    pub fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading;
        self.error = None;
    }

    /// Transition: the current-user fetch succeeded.
    pub fn succeed(&mut self, user: UserProfile) {
        self.is_authenticated = true;
        self.user = Some(user);
        self.status = LoadStatus::Succeeded;
        self.error = None;
    }

    /// Transition: the current-user fetch failed.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.is_authenticated = false;
        self.user = None;
        self.status = LoadStatus::Failed;
        self.error = Some(message.into());
    }

    /// Transition: logout or session teardown.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
