use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{
    NewProject, ProjectPatch, ProjectStoreError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WriteProjectError {
    #[error("Project store is not configured")]
    NotConfigured,

    #[error("Project not found")]
    NotFound,

    #[error("Project write failed: {0}")]
    Backend(String),
}

impl From<ProjectStoreError> for WriteProjectError {
    fn from(err: ProjectStoreError) -> Self {
        match err {
            ProjectStoreError::NotConfigured => WriteProjectError::NotConfigured,
            ProjectStoreError::NotFound => WriteProjectError::NotFound,
            ProjectStoreError::Decode(msg) | ProjectStoreError::Backend(msg) => {
                WriteProjectError::Backend(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Operator-only writes. Every call requires a verified session.
#[async_trait]
pub trait WriteProjectsUseCase: Send + Sync {
    async fn create(
        &self,
        session: &AdminSession,
        project: NewProject,
    ) -> Result<String, WriteProjectError>;

    async fn update(
        &self,
        session: &AdminSession,
        id: &str,
        patch: ProjectPatch,
    ) -> Result<(), WriteProjectError>;

    async fn delete(&self, session: &AdminSession, id: &str) -> Result<(), WriteProjectError>;

    /// Flips `featured`. A newly featured project goes to the end of the
    /// featured order; an unfeatured one has its order reset to 0.
    async fn toggle_featured(
        &self,
        session: &AdminSession,
        id: &str,
    ) -> Result<Project, WriteProjectError>;
}
