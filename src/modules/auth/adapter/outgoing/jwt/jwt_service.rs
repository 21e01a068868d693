use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use tracing;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    IssuedSession, SessionClaims, TokenError, TokenProvider, SESSION_TOKEN_TYPE,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
struct SigningKeys {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

/// HS256 session tokens. Without a configured secret every call fails with
/// [`TokenError::NotConfigured`].
#[derive(Clone)]
pub struct JwtTokenService {
    keys: Option<SigningKeys>,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.keys.as_ref().map(|k| k.config.issuer.as_str()))
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: Option<JwtConfig>) -> Self {
        let keys = config.map(|config| {
            let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
            let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());
            SigningKeys {
                config,
                encoding_key,
                decoding_key,
            }
        });

        Self { keys }
    }

    fn keys(&self) -> Result<&SigningKeys, TokenError> {
        self.keys.as_ref().ok_or(TokenError::NotConfigured)
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_session(&self, email: &str) -> Result<IssuedSession, TokenError> {
        let keys = self.keys()?;
        let now = Utc::now();
        let expires_at = now + Duration::seconds(keys.config.session_expiry);
        let session_id = Uuid::new_v4().to_string();

        let claims = SessionClaims {
            sub: email.to_string(),
            jti: session_id.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: keys.config.issuer.clone(),
            token_type: SESSION_TOKEN_TYPE.to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))?;

        Ok(IssuedSession {
            token,
            session_id,
            expires_at,
        })
    }

    fn verify_session(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let keys = self.keys()?;
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[keys.config.issuer.as_str()]);

        let decoded =
            decode::<SessionClaims>(token, &keys.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Session verification failed: token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Session verification failed: token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Session verification failed: foreign issuer");
                        TokenError::InvalidIssuer
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Session verification failed: malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        if decoded.claims.token_type != SESSION_TOKEN_TYPE {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                SESSION_TOKEN_TYPE,
                decoded.claims.token_type
            );
            return Err(TokenError::InvalidTokenType(SESSION_TOKEN_TYPE.to_string()));
        }

        Ok(decoded.claims)
    }
}
