//! Auth state lifecycle around the session client.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use folio_domain::{AuthState, UserProfile};

use crate::ports::HttpTransport;
use crate::session::{CURRENT_USER_PATH, SessionClient};

/// Owns the in-memory [`AuthState`] and drives it through the
/// current-user fetch flow.
///
/// This is bookkeeping around the session client: the client decides
/// whether a token is usable; this type records the outcome for the
/// rest of the application to bind to.
pub struct AuthManager<T: HttpTransport> {
    client: Arc<SessionClient<T>>,
    state: RwLock<AuthState>,
}

impl<T: HttpTransport> AuthManager<T> {
    /// Creates a manager over the given client, starting unauthenticated.
    pub fn new(client: Arc<SessionClient<T>>) -> Self {
        Self {
            client,
            state: RwLock::new(AuthState::new()),
        }
    }

    /// Snapshot of the current auth state.
    pub async fn state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    /// Startup flow.
    ///
    /// - A held access token leads straight to a current-user fetch.
    /// - No token but an active-session marker triggers a silent refresh
    ///   first; only a refresh that yields a token proceeds to the fetch.
    /// - Neither means no network traffic at all.
    ///
    /// Repeating this with unchanged session contents produces the same
    /// outcome. Failures land in the returned state, never panic.
    pub async fn bootstrap(&self) -> AuthState {
        if self.client.context().bearer().await.is_some() {
            return self.fetch_current_user().await;
        }

        if self.client.context().should_attempt_refresh().await {
            debug!("no access token but session was active; attempting silent login");
            match self.client.refresh().await {
                Ok(_) => return self.fetch_current_user().await,
                Err(error) => {
                    // The client has already cleared the session and
                    // fired the session-expired handler.
                    debug!(error = %error, "silent login failed");
                    return self.state().await;
                }
            }
        }

        self.state().await
    }

    /// Fetches the current user and records the outcome.
    pub async fn fetch_current_user(&self) -> AuthState {
        self.state.write().await.begin_loading();

        match self
            .client
            .get_json::<UserProfile>(CURRENT_USER_PATH)
            .await
        {
            Ok(user) => {
                info!(username = %user.username, "authenticated");
                let mut state = self.state.write().await;
                state.succeed(user);
                state.clone()
            }
            Err(error) => {
                let mut state = self.state.write().await;
                state.fail(error.to_string());
                state.clone()
            }
        }
    }

    /// Clears the session and resets the auth state.
    pub async fn logout(&self) {
        if let Err(error) = self.client.context().clear().await {
            tracing::warn!(error = %error, "failed to clear session on logout");
        }
        self.state.write().await.reset();
        info!("logged out");
    }
}

impl<T: HttpTransport> std::fmt::Debug for AuthManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthManager").finish_non_exhaustive()
    }
}
