use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use tracing::{debug, warn};

use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::ports::outgoing::token_provider::SESSION_TOKEN_TYPE;
use crate::auth::application::ports::outgoing::{
    SessionStore, SessionStoreError, TokenError, TokenProvider,
};
use crate::auth::application::services::token_hasher::hash_token;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifySessionError {
    #[error("Invalid or expired session")]
    InvalidToken,

    #[error("Session has been revoked")]
    Revoked,

    #[error("Session check unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait VerifySessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<AdminSession, VerifySessionError>;
}

/// Turns a bearer token into an [`AdminSession`].
///
/// A token is accepted only if it verifies, belongs to the configured operator
/// and has not been revoked. When the revocation list cannot be consulted the
/// token is refused.
pub struct VerifySessionService {
    token_provider: Arc<dyn TokenProvider>,
    sessions: Arc<dyn SessionStore>,
    operator_email: Option<String>,
}

impl VerifySessionService {
    pub fn new(
        token_provider: Arc<dyn TokenProvider>,
        sessions: Arc<dyn SessionStore>,
        operator_email: Option<String>,
    ) -> Self {
        Self {
            token_provider,
            sessions,
            operator_email,
        }
    }
}

#[async_trait]
impl VerifySessionUseCase for VerifySessionService {
    async fn execute(&self, token: &str) -> Result<AdminSession, VerifySessionError> {
        let claims = self
            .token_provider
            .verify_session(token)
            .map_err(|e| match e {
                TokenError::NotConfigured => VerifySessionError::Unavailable(e.to_string()),
                _ => {
                    debug!(error = %e, "Session token rejected");
                    VerifySessionError::InvalidToken
                }
            })?;

        if claims.token_type != SESSION_TOKEN_TYPE {
            return Err(VerifySessionError::InvalidToken);
        }

        match self.operator_email.as_deref() {
            Some(email) if email == claims.sub => {}
            _ => {
                warn!(subject = %claims.sub, "Session subject is not the configured operator");
                return Err(VerifySessionError::InvalidToken);
            }
        }

        match self.sessions.is_revoked(&hash_token(&claims.jti)).await {
            Ok(false) => {}
            Ok(true) => return Err(VerifySessionError::Revoked),
            Err(SessionStoreError::NotConfigured) => {
                return Err(VerifySessionError::Unavailable(
                    "session store is not configured".to_string(),
                ))
            }
            Err(e) => return Err(VerifySessionError::Unavailable(e.to_string())),
        }

        let expires_at =
            DateTime::from_timestamp(claims.exp, 0).ok_or(VerifySessionError::InvalidToken)?;

        Ok(AdminSession::new(claims.sub, claims.jti, expires_at))
    }
}
