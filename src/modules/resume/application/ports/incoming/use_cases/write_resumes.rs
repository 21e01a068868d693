use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::resume::application::ports::outgoing::{
    NewResume, ResumePatch, ResumeStoreError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WriteResumeError {
    #[error("Resume store is not configured")]
    NotConfigured,

    #[error("Resume not found")]
    NotFound,

    #[error("Resume write failed: {0}")]
    Backend(String),
}

impl From<ResumeStoreError> for WriteResumeError {
    fn from(err: ResumeStoreError) -> Self {
        match err {
            ResumeStoreError::NotConfigured => WriteResumeError::NotConfigured,
            ResumeStoreError::NotFound => WriteResumeError::NotFound,
            ResumeStoreError::Decode(msg) | ResumeStoreError::Backend(msg) => {
                WriteResumeError::Backend(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait WriteResumesUseCase: Send + Sync {
    async fn create(
        &self,
        session: &AdminSession,
        resume: NewResume,
    ) -> Result<String, WriteResumeError>;

    async fn update(
        &self,
        session: &AdminSession,
        id: &str,
        patch: ResumePatch,
    ) -> Result<(), WriteResumeError>;

    async fn delete(&self, session: &AdminSession, id: &str) -> Result<(), WriteResumeError>;
}
