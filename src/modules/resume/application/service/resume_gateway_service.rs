use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::resume::application::domain::entities::Resume;
use crate::modules::resume::application::ports::incoming::use_cases::{
    ReadResumesUseCase, WriteResumeError, WriteResumesUseCase,
};
use crate::modules::resume::application::ports::outgoing::{NewResume, ResumePatch, ResumeStore};
use crate::shared::live::{ChangeFeed, Collection, LiveSubscription};

pub struct ResumeGatewayService<S>
where
    S: ResumeStore,
{
    store: Arc<S>,
    feed: ChangeFeed,
}

impl<S> ResumeGatewayService<S>
where
    S: ResumeStore,
{
    pub fn new(store: Arc<S>, feed: ChangeFeed) -> Self {
        Self { store, feed }
    }
}

async fn list_resumes<S: ResumeStore>(store: &S) -> Vec<Resume> {
    store.list().await.unwrap_or_else(|e| {
        warn!("Listing resumes failed, serving empty list: {}", e);
        Vec::new()
    })
}

#[async_trait]
impl<S> ReadResumesUseCase for ResumeGatewayService<S>
where
    S: ResumeStore + 'static,
{
    async fn list(&self) -> Vec<Resume> {
        list_resumes(&*self.store).await
    }

    async fn get(&self, id: &str) -> Option<Resume> {
        self.store.get(id).await.unwrap_or_else(|e| {
            warn!(resume_id = %id, "Reading resume failed, treating as absent: {}", e);
            None
        })
    }

    fn subscribe(&self) -> LiveSubscription<Vec<Resume>> {
        let store = self.store.clone();
        LiveSubscription::spawn(&self.feed, Collection::Resumes, move || {
            let store = store.clone();
            async move { list_resumes(&*store).await }
        })
    }
}

#[async_trait]
impl<S> WriteResumesUseCase for ResumeGatewayService<S>
where
    S: ResumeStore + 'static,
{
    async fn create(
        &self,
        session: &AdminSession,
        resume: NewResume,
    ) -> Result<String, WriteResumeError> {
        let id = self.store.create(resume).await?;

        info!(resume_id = %id, operator = %session.email(), "Resume created");
        self.feed.publish(Collection::Resumes);
        Ok(id)
    }

    async fn update(
        &self,
        session: &AdminSession,
        id: &str,
        patch: ResumePatch,
    ) -> Result<(), WriteResumeError> {
        self.store.update(id, patch).await?;

        info!(resume_id = %id, operator = %session.email(), "Resume updated");
        self.feed.publish(Collection::Resumes);
        Ok(())
    }

    async fn delete(&self, session: &AdminSession, id: &str) -> Result<(), WriteResumeError> {
        self.store.delete(id).await?;

        info!(resume_id = %id, operator = %session.email(), "Resume deleted");
        self.feed.publish(Collection::Resumes);
        Ok(())
    }
}
