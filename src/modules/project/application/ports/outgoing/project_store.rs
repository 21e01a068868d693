use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{MediaItem, Project};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectStoreError {
    #[error("Project store is not configured")]
    NotConfigured,

    #[error("Project not found")]
    NotFound,

    #[error("Stored project could not be decoded: {0}")]
    Decode(String),

    #[error("Project store error: {0}")]
    Backend(String),
}

//
// ──────────────────────────────────────────────────────────
// Write DTOs
// ──────────────────────────────────────────────────────────
//

/// A project as written on creation. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub github_urls: Vec<String>,
    pub live_url: Option<String>,
    pub tags: Vec<String>,
    pub technologies: Vec<String>,
    pub media: Vec<MediaItem>,
    pub thumbnail_index: Option<usize>,
    pub featured: bool,
    pub featured_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Partial update. Only fields that are not `Unset` are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub short_description: PatchField<String>,
    pub github_urls: PatchField<Vec<String>>,
    pub live_url: PatchField<String>,
    pub tags: PatchField<Vec<String>>,
    pub technologies: PatchField<Vec<String>>,
    pub media: PatchField<Vec<MediaItem>>,
    pub thumbnail_index: PatchField<usize>,
    pub featured: PatchField<bool>,
    pub featured_order: PatchField<i64>,
    pub updated_at: PatchField<i64>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.description.is_unset()
            && self.short_description.is_unset()
            && self.github_urls.is_unset()
            && self.live_url.is_unset()
            && self.tags.is_unset()
            && self.technologies.is_unset()
            && self.media.is_unset()
            && self.thumbnail_index.is_unset()
            && self.featured.is_unset()
            && self.featured_order.is_unset()
            && self.updated_at.is_unset()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    pub featured_only: bool,
}

impl ProjectListFilter {
    pub fn featured() -> Self {
        Self {
            featured_only: true,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Remote collection of projects.
///
/// `list` returns projects newest first (`created_at` descending), restricted
/// to featured ones when the filter asks for it.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectStoreError>;

    async fn get(&self, id: &str) -> Result<Option<Project>, ProjectStoreError>;

    /// Returns the id assigned to the new project.
    async fn create(&self, project: NewProject) -> Result<String, ProjectStoreError>;

    async fn update(&self, id: &str, patch: ProjectPatch) -> Result<(), ProjectStoreError>;

    async fn delete(&self, id: &str) -> Result<(), ProjectStoreError>;
}
