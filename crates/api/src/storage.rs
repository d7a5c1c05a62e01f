//! Backing store for uploaded candidate documents.
//!
//! The trait keeps handlers independent of where files land; the default
//! implementation writes to a local directory and serves URLs under the
//! configured public base URL.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use regportal_core::error::CoreError;

/// Abstraction over the document file store.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `bytes` at the given relative `path`, returning the public URL.
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<String, CoreError>;

    /// Remove the object at the given relative `path`. Missing objects are
    /// not an error; the database row is authoritative.
    async fn delete(&self, path: &str) -> Result<(), CoreError>;
}

/// Local-filesystem implementation of [`ObjectStorage`].
pub struct LocalStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }

    /// Resolve a relative storage path against the root, rejecting any
    /// component that would escape it.
    fn resolve(&self, path: &str) -> Result<PathBuf, CoreError> {
        let relative = Path::new(path);
        let escapes = relative.components().any(|c| {
            !matches!(
                c,
                std::path::Component::Normal(_) | std::path::Component::CurDir
            )
        });
        if escapes || path.is_empty() {
            return Err(CoreError::Validation(format!(
                "Invalid storage path: {path}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<String, CoreError> {
        let full_path = self.resolve(path)?;

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::Internal(format!("Failed to create upload dir: {e}")))?;
        }

        tokio::fs::write(&full_path, bytes)
            .await
            .map_err(|e| CoreError::Internal(format!("Failed to write upload: {e}")))?;

        tracing::debug!(path, size = bytes.len(), "Stored uploaded document");

        Ok(format!(
            "{}/uploads/{path}",
            self.public_base_url.trim_end_matches('/')
        ))
    }

    async fn delete(&self, path: &str) -> Result<(), CoreError> {
        let full_path = self.resolve(path)?;
        match tokio::fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::Internal(format!("Failed to delete upload: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> LocalStorage {
        LocalStorage::new(
            std::env::temp_dir().join("regportal-storage-tests"),
            "http://localhost:3000",
        )
    }

    #[tokio::test]
    async fn test_put_and_delete_roundtrip() {
        let storage = storage();
        let path = "photos/1_test.png";

        let url = storage
            .put(path, b"not-really-a-png")
            .await
            .expect("put should succeed");
        assert_eq!(url, "http://localhost:3000/uploads/photos/1_test.png");

        storage.delete(path).await.expect("delete should succeed");
        // Deleting again is a no-op.
        storage.delete(path).await.expect("repeat delete is ok");
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let storage = storage();
        let result = storage.put("../escape.txt", b"nope").await;
        assert!(result.is_err(), "parent-dir components must be rejected");
    }

    #[tokio::test]
    async fn test_empty_path_rejected() {
        let storage = storage();
        assert!(storage.put("", b"nope").await.is_err());
    }
}
