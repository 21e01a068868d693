use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::ProjectListFilter;
use crate::shared::live::LiveSubscription;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Public read side. Reads never fail: an unavailable store yields an empty
/// list or `None`.
#[async_trait]
pub trait ReadProjectsUseCase: Send + Sync {
    async fn list(&self, filter: ProjectListFilter) -> Vec<Project>;

    async fn get(&self, id: &str) -> Option<Project>;

    /// Live view of `list(filter)`, re-sent after every project write.
    fn subscribe(&self, filter: ProjectListFilter) -> LiveSubscription<Vec<Project>>;
}
