use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use tracing::{error, warn};

use crate::auth::application::domain::entities::OperatorIdentity;
use crate::auth::application::ports::outgoing::{
    LoginThrottle, LoginThrottleError, PasswordHasher, TokenError, TokenProvider,
};

// ========================= Login Request =========================
/// Validated login request
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            LoginRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = Self::validate_email(email)?;
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    /// Lowercased and trimmed.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate_email(email: String) -> Result<String, LoginRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }
}

// ====================== Login Error =============================
/// Sign-in failures as the operator sees them.
///
/// Whatever goes wrong underneath, the UI only ever shows one of three
/// messages (see [`LoginError::user_message`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    InvalidCredentials,
    TooManyAttempts,
    NotConfigured,
    Failed(String),
}

impl LoginError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LoginError::InvalidCredentials => "Invalid email or password.",
            LoginError::TooManyAttempts => "Too many attempts. Try again later.",
            LoginError::NotConfigured | LoginError::Failed(_) => "Login failed.",
        }
    }
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginError::TooManyAttempts => write!(f, "Too many failed attempts"),
            LoginError::NotConfigured => write!(f, "Admin login is not configured"),
            LoginError::Failed(msg) => write!(f, "Login failed: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<TokenError> for LoginError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::NotConfigured => LoginError::NotConfigured,
            other => LoginError::Failed(other.to_string()),
        }
    }
}

impl From<LoginThrottleError> for LoginError {
    fn from(err: LoginThrottleError) -> Self {
        match err {
            LoginThrottleError::NotConfigured => LoginError::NotConfigured,
            LoginThrottleError::Backend(msg) => LoginError::Failed(msg),
        }
    }
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub email: String,
    /// Unix seconds
    pub expires_at: i64,
}

// ============================ Login Use Case =============================
#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError>;
}

pub struct LoginAdminService {
    operator: Option<OperatorIdentity>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
    throttle: Arc<dyn LoginThrottle>,
}

impl LoginAdminService {
    pub fn new(
        operator: Option<OperatorIdentity>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
        throttle: Arc<dyn LoginThrottle>,
    ) -> Self {
        Self {
            operator,
            password_hasher,
            token_provider,
            throttle,
        }
    }

    async fn reject(&self, email: &str) -> LoginError {
        match self.throttle.record_failure(email).await {
            Ok(failures) => {
                warn!(email = %email, failures, "Rejected admin login");
                LoginError::InvalidCredentials
            }
            Err(e) => {
                error!(error = %e, "Could not record failed login");
                LoginError::from(e)
            }
        }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        let operator = self.operator.as_ref().ok_or(LoginError::NotConfigured)?;

        if self.throttle.is_blocked(request.email()).await? {
            warn!(email = %request.email(), "Admin login throttled");
            return Err(LoginError::TooManyAttempts);
        }

        if !operator.matches_email(request.email()) {
            return Err(self.reject(request.email()).await);
        }

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), operator.password_hash())
            .await
            .map_err(|e| LoginError::Failed(e.to_string()))?;

        if !is_valid {
            return Err(self.reject(request.email()).await);
        }

        self.throttle.reset(request.email()).await?;

        let issued = self
            .token_provider
            .issue_session(operator.email())
            .map_err(|e| {
                error!(error = %e, "Could not issue admin session");
                LoginError::from(e)
            })?;

        Ok(LoginResponse {
            access_token: issued.token,
            email: operator.email().to_string(),
            expires_at: issued.expires_at.timestamp(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{HashError, IssuedSession, SessionClaims};
    use chrono::{Duration, Utc};
    use std::sync::Mutex;

    // ========================================================================
    // Fakes
    // ========================================================================

    struct FakeHasher {
        result: Result<bool, HashError>,
    }

    #[async_trait]
    impl PasswordHasher for FakeHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            unimplemented!("not used in login tests")
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct FakeTokens {
        unconfigured: bool,
    }

    impl TokenProvider for FakeTokens {
        fn issue_session(&self, email: &str) -> Result<IssuedSession, TokenError> {
            if self.unconfigured {
                return Err(TokenError::NotConfigured);
            }
            Ok(IssuedSession {
                token: format!("token-for-{email}"),
                session_id: "jti-1".to_string(),
                expires_at: Utc::now() + Duration::hours(1),
            })
        }

        fn verify_session(&self, _token: &str) -> Result<SessionClaims, TokenError> {
            unimplemented!("not used in login tests")
        }
    }

    #[derive(Default)]
    struct FakeThrottle {
        blocked: bool,
        unconfigured: bool,
        failures: Mutex<u32>,
        resets: Mutex<u32>,
    }

    #[async_trait]
    impl LoginThrottle for FakeThrottle {
        async fn is_blocked(&self, _account: &str) -> Result<bool, LoginThrottleError> {
            if self.unconfigured {
                return Err(LoginThrottleError::NotConfigured);
            }
            Ok(self.blocked)
        }

        async fn record_failure(&self, _account: &str) -> Result<u32, LoginThrottleError> {
            let mut failures = self.failures.lock().unwrap();
            *failures += 1;
            Ok(*failures)
        }

        async fn reset(&self, _account: &str) -> Result<(), LoginThrottleError> {
            *self.resets.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn operator() -> Option<OperatorIdentity> {
        Some(OperatorIdentity::new("admin@example.com", "$argon2id$fake"))
    }

    fn service(
        operator: Option<OperatorIdentity>,
        password_ok: bool,
        throttle: Arc<FakeThrottle>,
    ) -> LoginAdminService {
        LoginAdminService::new(
            operator,
            Arc::new(FakeHasher {
                result: Ok(password_ok),
            }),
            Arc::new(FakeTokens::default()),
            throttle,
        )
    }

    fn request(email: &str) -> LoginRequest {
        LoginRequest::new(email.to_string(), "secret".to_string()).unwrap()
    }

    // ========================================================================
    // LoginRequest
    // ========================================================================

    #[test]
    fn request_normalizes_email() {
        let req = LoginRequest::new("  Admin@Example.com ".into(), "pw".into()).unwrap();
        assert_eq!(req.email(), "admin@example.com");
    }

    #[test]
    fn request_rejects_bad_input() {
        assert_eq!(
            LoginRequest::new("".into(), "pw".into()).unwrap_err(),
            LoginRequestError::EmptyEmail
        );
        assert_eq!(
            LoginRequest::new("nope".into(), "pw".into()).unwrap_err(),
            LoginRequestError::InvalidEmailFormat
        );
        assert_eq!(
            LoginRequest::new("a@b.com".into(), "".into()).unwrap_err(),
            LoginRequestError::EmptyPassword
        );
    }

    // ========================================================================
    // Service
    // ========================================================================

    #[tokio::test]
    async fn login_success_resets_throttle() {
        let throttle = Arc::new(FakeThrottle::default());
        let svc = service(operator(), true, throttle.clone());

        let response = svc.execute(request("Admin@example.com")).await.unwrap();

        assert_eq!(response.email, "admin@example.com");
        assert_eq!(response.access_token, "token-for-admin@example.com");
        assert_eq!(*throttle.resets.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let throttle = Arc::new(FakeThrottle::default());
        let svc = service(operator(), false, throttle.clone());

        let err = svc.execute(request("admin@example.com")).await.unwrap_err();

        assert_eq!(err, LoginError::InvalidCredentials);
        assert_eq!(err.user_message(), "Invalid email or password.");
        assert_eq!(*throttle.failures.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let throttle = Arc::new(FakeThrottle::default());
        let svc = service(operator(), true, throttle.clone());

        let err = svc.execute(request("someone@example.com")).await.unwrap_err();

        assert_eq!(err, LoginError::InvalidCredentials);
        assert_eq!(*throttle.failures.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn blocked_account_is_rate_limited() {
        let throttle = Arc::new(FakeThrottle {
            blocked: true,
            ..Default::default()
        });
        let svc = service(operator(), true, throttle);

        let err = svc.execute(request("admin@example.com")).await.unwrap_err();

        assert_eq!(err, LoginError::TooManyAttempts);
        assert_eq!(err.user_message(), "Too many attempts. Try again later.");
    }

    #[tokio::test]
    async fn missing_operator_is_not_configured() {
        let svc = service(None, true, Arc::new(FakeThrottle::default()));

        let err = svc.execute(request("admin@example.com")).await.unwrap_err();

        assert_eq!(err, LoginError::NotConfigured);
        assert_eq!(err.user_message(), "Login failed.");
    }

    #[tokio::test]
    async fn unconfigured_throttle_is_not_configured() {
        let throttle = Arc::new(FakeThrottle {
            unconfigured: true,
            ..Default::default()
        });
        let svc = service(operator(), true, throttle);

        let err = svc.execute(request("admin@example.com")).await.unwrap_err();
        assert_eq!(err, LoginError::NotConfigured);
    }

    #[tokio::test]
    async fn hasher_failure_is_generic() {
        let svc = LoginAdminService::new(
            operator(),
            Arc::new(FakeHasher {
                result: Err(HashError::VerifyFailed),
            }),
            Arc::new(FakeTokens::default()),
            Arc::new(FakeThrottle::default()),
        );

        let err = svc.execute(request("admin@example.com")).await.unwrap_err();

        assert!(matches!(err, LoginError::Failed(_)));
        assert_eq!(err.user_message(), "Login failed.");
    }

    #[tokio::test]
    async fn missing_signing_key_is_not_configured() {
        let throttle = Arc::new(FakeThrottle::default());
        let svc = LoginAdminService::new(
            operator(),
            Arc::new(FakeHasher { result: Ok(true) }),
            Arc::new(FakeTokens { unconfigured: true }),
            throttle,
        );

        let err = svc.execute(request("admin@example.com")).await.unwrap_err();

        assert_eq!(err, LoginError::NotConfigured);
        assert_eq!(err.user_message(), "Login failed.");
    }
}
