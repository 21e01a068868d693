use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::project::application::domain::entities::MediaType;
use crate::modules::uploads::application::domain::storage_path::UploadFolder;
use crate::modules::uploads::application::ports::outgoing::ObjectStorageError;

//
// ──────────────────────────────────────────────────────────
// Command / Result
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UploadMediaCommand {
    pub folder: UploadFolder,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedMedia {
    /// Object path inside the bucket, needed to delete it later
    pub path: String,
    pub url: String,
    pub media_type: MediaType,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadMediaError {
    #[error("File name is required")]
    MissingFileName,

    #[error("File is empty")]
    EmptyFile,

    #[error("Only objects under projects/ or resumes/ can be deleted")]
    UnmanagedPath,

    #[error("Object storage is not configured")]
    NotConfigured,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<ObjectStorageError> for UploadMediaError {
    fn from(err: ObjectStorageError) -> Self {
        match err {
            ObjectStorageError::NotConfigured => UploadMediaError::NotConfigured,
            ObjectStorageError::Backend(msg) => UploadMediaError::Storage(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UploadMediaUseCase: Send + Sync {
    async fn upload(
        &self,
        session: &AdminSession,
        command: UploadMediaCommand,
    ) -> Result<UploadedMedia, UploadMediaError>;

    async fn delete(&self, session: &AdminSession, path: &str) -> Result<(), UploadMediaError>;
}
