use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::project::application::domain::entities::{sort_by_featured_order, Project};
use crate::modules::project::application::ports::incoming::use_cases::{
    ReadProjectsUseCase, WriteProjectError, WriteProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    NewProject, ProjectListFilter, ProjectPatch, ProjectStore,
};
use crate::shared::live::{ChangeFeed, Collection, LiveSubscription};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Front door to the project collection.
///
/// Reads degrade to empty results when the store is unavailable; writes
/// surface store errors and announce every successful change on the feed.
pub struct ProjectGatewayService<S>
where
    S: ProjectStore,
{
    store: Arc<S>,
    feed: ChangeFeed,
}

impl<S> ProjectGatewayService<S>
where
    S: ProjectStore,
{
    pub fn new(store: Arc<S>, feed: ChangeFeed) -> Self {
        Self { store, feed }
    }
}

async fn list_projects<S: ProjectStore>(store: &S, filter: ProjectListFilter) -> Vec<Project> {
    match store.list(filter).await {
        Ok(mut projects) => {
            if filter.featured_only {
                sort_by_featured_order(&mut projects);
            }
            projects
        }
        Err(e) => {
            warn!("Listing projects failed, serving empty list: {}", e);
            Vec::new()
        }
    }
}

#[async_trait]
impl<S> ReadProjectsUseCase for ProjectGatewayService<S>
where
    S: ProjectStore + 'static,
{
    async fn list(&self, filter: ProjectListFilter) -> Vec<Project> {
        list_projects(&*self.store, filter).await
    }

    async fn get(&self, id: &str) -> Option<Project> {
        match self.store.get(id).await {
            Ok(project) => project,
            Err(e) => {
                warn!(project_id = %id, "Reading project failed, treating as absent: {}", e);
                None
            }
        }
    }

    fn subscribe(&self, filter: ProjectListFilter) -> LiveSubscription<Vec<Project>> {
        let store = self.store.clone();
        LiveSubscription::spawn(&self.feed, Collection::Projects, move || {
            let store = store.clone();
            async move { list_projects(&*store, filter).await }
        })
    }
}

#[async_trait]
impl<S> WriteProjectsUseCase for ProjectGatewayService<S>
where
    S: ProjectStore + 'static,
{
    async fn create(
        &self,
        session: &AdminSession,
        project: NewProject,
    ) -> Result<String, WriteProjectError> {
        let id = self.store.create(project).await?;

        info!(project_id = %id, operator = %session.email(), "Project created");
        self.feed.publish(Collection::Projects);
        Ok(id)
    }

    async fn update(
        &self,
        session: &AdminSession,
        id: &str,
        patch: ProjectPatch,
    ) -> Result<(), WriteProjectError> {
        self.store.update(id, patch).await?;

        info!(project_id = %id, operator = %session.email(), "Project updated");
        self.feed.publish(Collection::Projects);
        Ok(())
    }

    async fn delete(&self, session: &AdminSession, id: &str) -> Result<(), WriteProjectError> {
        self.store.delete(id).await?;

        info!(project_id = %id, operator = %session.email(), "Project deleted");
        self.feed.publish(Collection::Projects);
        Ok(())
    }

    async fn toggle_featured(
        &self,
        session: &AdminSession,
        id: &str,
    ) -> Result<Project, WriteProjectError> {
        let mut project = self
            .store
            .get(id)
            .await?
            .ok_or(WriteProjectError::NotFound)?;

        let featured = !project.featured;
        let featured_order = if featured {
            self.store.list(ProjectListFilter::featured()).await?.len() as i64
        } else {
            0
        };

        let patch = ProjectPatch {
            featured: PatchField::Value(featured),
            featured_order: PatchField::Value(featured_order),
            ..Default::default()
        };
        self.update(session, id, patch).await?;

        project.featured = featured;
        project.featured_order = featured_order;
        Ok(project)
    }
}
