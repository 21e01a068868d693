use chrono::{DateTime, Utc};
use std::fmt;

/// A verified admin session.
///
/// Every operation that writes content takes one of these explicitly, so the
/// authorization context is visible in the signature instead of being read
/// from ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    email: String,
    session_id: String,
    expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn new(email: String, session_id: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            email,
            session_id,
            expires_at,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The token's `jti`; stable for the lifetime of the session.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// The single operator allowed into the admin panel.
#[derive(Clone)]
pub struct OperatorIdentity {
    email: String,
    password_hash: String,
}

impl OperatorIdentity {
    pub fn new(email: &str, password_hash: &str) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password_hash: password_hash.trim().to_string(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn matches_email(&self, email: &str) -> bool {
        self.email == email.trim().to_lowercase()
    }
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for OperatorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorIdentity")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_email_is_normalized() {
        let operator = OperatorIdentity::new("  Admin@Example.COM ", "hash");
        assert_eq!(operator.email(), "admin@example.com");
        assert!(operator.matches_email("ADMIN@example.com"));
        assert!(!operator.matches_email("other@example.com"));
    }

    #[test]
    fn debug_hides_password_hash() {
        let operator = OperatorIdentity::new("admin@example.com", "$argon2id$secret");
        let printed = format!("{operator:?}");
        assert!(!printed.contains("secret"));
    }
}
