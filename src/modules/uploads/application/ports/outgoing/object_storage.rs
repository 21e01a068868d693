use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectStorageError {
    #[error("Object storage is not configured")]
    NotConfigured,

    #[error("Object storage error: {0}")]
    Backend(String),
}

/// Public object store for uploaded media.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `bytes` at `path` and returns the object's public URL.
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ObjectStorageError>;

    async fn delete(&self, path: &str) -> Result<(), ObjectStorageError>;
}
