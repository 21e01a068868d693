use async_trait::async_trait;

use crate::modules::resume::application::domain::entities::{Resume, ResumeDomain, SourceType};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResumeStoreError {
    #[error("Resume store is not configured")]
    NotConfigured,

    #[error("Resume not found")]
    NotFound,

    #[error("Stored resume could not be decoded: {0}")]
    Decode(String),

    #[error("Resume store error: {0}")]
    Backend(String),
}

//
// ──────────────────────────────────────────────────────────
// Write DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct NewResume {
    pub title: String,
    pub domain: ResumeDomain,
    pub description: String,
    pub source_type: SourceType,
    pub file_url: String,
    pub file_name: String,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumePatch {
    pub title: PatchField<String>,
    pub domain: PatchField<ResumeDomain>,
    pub description: PatchField<String>,
    pub source_type: PatchField<SourceType>,
    pub file_url: PatchField<String>,
    pub file_name: PatchField<String>,
    pub updated_at: PatchField<i64>,
}

impl ResumePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.domain.is_unset()
            && self.description.is_unset()
            && self.source_type.is_unset()
            && self.file_url.is_unset()
            && self.file_name.is_unset()
            && self.updated_at.is_unset()
    }
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Remote collection of resumes, listed most recently updated first.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Resume>, ResumeStoreError>;

    async fn get(&self, id: &str) -> Result<Option<Resume>, ResumeStoreError>;

    async fn create(&self, resume: NewResume) -> Result<String, ResumeStoreError>;

    async fn update(&self, id: &str, patch: ResumePatch) -> Result<(), ResumeStoreError>;

    async fn delete(&self, id: &str) -> Result<(), ResumeStoreError>;
}
