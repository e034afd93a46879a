//! Session persistence port.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use folio_domain::StoredSession;

/// Errors from the session persistence layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("IO error: {0}")]
    Io(String),

    /// Stored data could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// No storage location is available on this system.
    #[error("storage location unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Port for persisting the session across restarts.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Loads the persisted session. A missing store is an empty session,
    /// not an error.
    async fn load(&self) -> StorageResult<StoredSession>;

    /// Persists the session, replacing any previous contents.
    async fn store(&self, session: &StoredSession) -> StorageResult<()>;

    /// Removes any persisted session.
    async fn clear(&self) -> StorageResult<()>;
}

/// In-memory session storage.
///
/// Sessions held here do not survive a restart; useful for tests and
/// for callers that opt out of on-disk persistence.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    session: RwLock<StoredSession>,
}

impl MemoryTokenStorage {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given session.
    #[must_use]
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            session: RwLock::new(session),
        }
    }
}

#[async_trait]
impl TokenStorage for MemoryTokenStorage {
    async fn load(&self) -> StorageResult<StoredSession> {
        Ok(self.session.read().await.clone())
    }

    async fn store(&self, session: &StoredSession) -> StorageResult<()> {
        *self.session.write().await = session.clone();
        Ok(())
    }

    async fn clear(&self) -> StorageResult<()> {
        *self.session.write().await = StoredSession::empty();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn load_of_fresh_store_is_empty() {
        let storage = MemoryTokenStorage::new();
        assert_eq!(storage.load().await.unwrap(), StoredSession::empty());
    }

    #[tokio::test]
    async fn store_and_load_round_trip() {
        let storage = MemoryTokenStorage::new();
        let session = StoredSession::with_token("tok");
        storage.store(&session).await.unwrap();
        assert_eq!(storage.load().await.unwrap(), session);
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let storage = MemoryTokenStorage::with_session(StoredSession::with_token("tok"));
        storage.clear().await.unwrap();
        assert!(storage.load().await.unwrap().is_empty());
    }
}
