use async_trait::async_trait;

use crate::modules::resume::application::domain::entities::Resume;
use crate::shared::live::LiveSubscription;

/// Public read side. An unavailable store yields an empty list or `None`.
#[async_trait]
pub trait ReadResumesUseCase: Send + Sync {
    async fn list(&self) -> Vec<Resume>;

    async fn get(&self, id: &str) -> Option<Resume>;

    fn subscribe(&self) -> LiveSubscription<Vec<Resume>>;
}
