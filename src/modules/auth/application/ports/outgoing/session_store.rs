use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store is not configured")]
    NotConfigured,

    #[error("Session has already expired")]
    AlreadyExpired,

    #[error("Session store error: {0}")]
    Backend(String),
}

/// Revocation list for issued sessions.
///
/// Keys are `sha256(jti)`; an entry lives exactly as long as the session it
/// revokes would have.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn revoke(
        &self,
        session_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionStoreError>;

    async fn is_revoked(&self, session_hash: &str) -> Result<bool, SessionStoreError>;
}
