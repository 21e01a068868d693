use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::ports::outgoing::{SessionStore, SessionStoreError};
use crate::auth::application::services::token_hasher::hash_token;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogoutError {
    #[error("Session store is not configured")]
    NotConfigured,

    #[error("Failed to revoke session: {0}")]
    Failed(String),
}

#[async_trait]
pub trait LogoutAdminUseCase: Send + Sync {
    async fn execute(&self, session: &AdminSession) -> Result<(), LogoutError>;
}

pub struct LogoutAdminService {
    sessions: Arc<dyn SessionStore>,
}

impl LogoutAdminService {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl LogoutAdminUseCase for LogoutAdminService {
    async fn execute(&self, session: &AdminSession) -> Result<(), LogoutError> {
        let session_hash = hash_token(session.session_id());

        match self
            .sessions
            .revoke(session_hash, session.expires_at())
            .await
        {
            Ok(()) => Ok(()),
            // Nothing left to revoke.
            Err(SessionStoreError::AlreadyExpired) => Ok(()),
            Err(SessionStoreError::NotConfigured) => Err(LogoutError::NotConfigured),
            Err(SessionStoreError::Backend(msg)) => Err(LogoutError::Failed(msg)),
        }
    }
}
