//! Process-wide session state.

use std::sync::Arc;

use tokio::sync::RwLock;

use folio_domain::StoredSession;

use crate::ports::{StorageResult, TokenStorage};

/// Owned session state shared by the client and its consumers.
///
/// Holds the current bearer in memory and writes every mutation through
/// to the `TokenStorage` port, so the in-memory view and the persisted
/// session never diverge. The session client is the sole writer; all
/// mutation goes through the methods here.
pub struct SessionContext {
    storage: Arc<dyn TokenStorage>,
    state: RwLock<StoredSession>,
}

impl SessionContext {
    /// Creates a context over the given storage, starting empty.
    ///
    /// Call [`restore`](Self::restore) to load a persisted session.
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            storage,
            state: RwLock::new(StoredSession::empty()),
        }
    }

    /// Loads the persisted session into memory.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the persisted session cannot be read.
    pub async fn restore(&self) -> StorageResult<()> {
        let session = self.storage.load().await?.normalized();
        *self.state.write().await = session;
        Ok(())
    }

    /// The current bearer token, if one is held.
    pub async fn bearer(&self) -> Option<String> {
        self.state.read().await.access_token().map(str::to_owned)
    }

    /// True if a session existed previously.
    pub async fn session_active(&self) -> bool {
        self.state.read().await.is_session_active()
    }

    /// True if a silent refresh is worth attempting: no token held, but
    /// a session existed previously.
    pub async fn should_attempt_refresh(&self) -> bool {
        self.state.read().await.should_attempt_refresh()
    }

    /// Snapshot of the full session state.
    pub async fn snapshot(&self) -> StoredSession {
        self.state.read().await.clone()
    }

    /// Replaces the bearer token and persists it.
    ///
    /// # Errors
    ///
    /// Returns the storage error if persisting fails; the in-memory
    /// state is updated regardless.
    pub async fn set_token(&self, token: &str) -> StorageResult<()> {
        let session = {
            let mut state = self.state.write().await;
            state.set_token(token);
            state.clone()
        };
        self.storage.store(&session).await
    }

    /// Records that a valid session exists, and persists the flag.
    ///
    /// # Errors
    ///
    /// Returns the storage error if persisting fails; the in-memory
    /// state is updated regardless.
    pub async fn mark_session_active(&self) -> StorageResult<()> {
        let session = {
            let mut state = self.state.write().await;
            state.mark_active();
            state.clone()
        };
        self.storage.store(&session).await
    }

    /// Clears the session from memory and storage.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the persisted session cannot be
    /// removed; the in-memory state is cleared regardless.
    pub async fn clear(&self) -> StorageResult<()> {
        self.state.write().await.clear();
        self.storage.clear().await
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}
