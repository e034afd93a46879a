//! File-based session persistence.
//!
//! Stores the session in the platform-specific config directory:
//! - Linux/macOS: ~/.config/folio/session.json
//! - Windows: %APPDATA%/folio/session.json

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use folio_application::ports::{StorageError, StorageResult, TokenStorage};
use folio_domain::StoredSession;

/// Session storage backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Creates storage at the default platform location.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if no config directory can be
    /// determined.
    pub fn new() -> StorageResult<Self> {
        let Some(config_dir) = dirs::config_dir() else {
            return Err(StorageError::Unavailable(
                "could not determine config directory".to_string(),
            ));
        };
        Ok(Self {
            path: config_dir.join("folio").join("session.json"),
        })
    }

    /// Creates storage at an explicit path.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this storage reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStorage for FileSessionStorage {
    async fn load(&self) -> StorageResult<StoredSession> {
        if !self.path.exists() {
            return Ok(StoredSession::empty());
        }

        let content = fs::read(&self.path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let session: StoredSession = serde_json::from_slice(&content)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        Ok(session.normalized())
    }

    async fn store(&self, session: &StoredSession) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        let content = serde_json::to_vec_pretty(session)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    async fn clear(&self) -> StorageResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn storage_in(dir: &tempfile::TempDir) -> FileSessionStorage {
        FileSessionStorage::with_path(dir.path().join("session.json"))
    }

    #[tokio::test]
    async fn load_of_missing_file_is_empty_session() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);
        assert_eq!(storage.load().await.unwrap(), StoredSession::empty());
    }

    #[tokio::test]
    async fn store_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);

        let session = StoredSession::with_token("persisted-token");
        storage.store(&session).await.unwrap();

        let loaded = storage.load().await.unwrap();
        assert_eq!(loaded, session);
        assert!(loaded.is_session_active());
    }

    #[tokio::test]
    async fn store_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::with_path(dir.path().join("nested/deep/session.json"));

        storage
            .store(&StoredSession::active_without_token())
            .await
            .unwrap();

        assert!(storage.path().exists());
    }

    #[tokio::test]
    async fn clear_removes_the_file() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);
        storage
            .store(&StoredSession::with_token("tok"))
            .await
            .unwrap();

        storage.clear().await.unwrap();

        assert!(!storage.path().exists());
        // Clearing an already-missing file is fine.
        storage.clear().await.unwrap();
    }

    #[tokio::test]
    async fn load_normalizes_hand_edited_files() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(
            storage.path(),
            br#"{"access_token":"tok","session_active":false}"#,
        )
        .unwrap();

        let loaded = storage.load().await.unwrap();
        assert!(loaded.is_session_active());
        assert_eq!(loaded.access_token(), Some("tok"));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), b"not json").unwrap();

        assert!(matches!(
            storage.load().await,
            Err(StorageError::Serialization(_))
        ));
    }
}
