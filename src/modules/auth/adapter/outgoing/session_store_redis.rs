use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};

use std::sync::Arc;

use crate::auth::application::ports::outgoing::session_store::{SessionStore, SessionStoreError};

/// Redis-backed revocation list for admin sessions.
///
/// ## Redis data model
/// ```text
/// auth:revoked:session:{sha256(jti)} -> "1"
/// ```
/// - Exists ⇒ session is revoked
/// - TTL = remaining lifetime of the session, so Redis does the cleanup
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Option<Arc<Pool>>,
}

impl RedisSessionStore {
    pub fn new(pool: Option<Arc<Pool>>) -> Self {
        Self { pool }
    }

    fn session_key(session_hash: &str) -> String {
        format!("auth:revoked:session:{session_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionStoreError> {
        let pool = self.pool.as_ref().ok_or(SessionStoreError::NotConfigured)?;
        pool.get()
            .await
            .map_err(|e| SessionStoreError::Backend(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    /// ```text
    /// SET auth:revoked:session:{hash} "1" EX <ttl>
    /// ```
    async fn revoke(
        &self,
        session_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionStoreError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Err(SessionStoreError::AlreadyExpired);
        }

        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(Self::session_key(&session_hash), "1", ttl as u64)
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))?;

        Ok(())
    }

    async fn is_revoked(&self, session_hash: &str) -> Result<bool, SessionStoreError> {
        let mut conn = self.get_conn().await?;

        conn.exists(Self::session_key(session_hash))
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))
    }
}
