use chrono::{TimeZone, Utc};

use crate::auth::application::domain::entities::AdminSession;

/// Bearer token the default `StubVerifySession` accepts.
pub const ADMIN_TOKEN: &str = "test-admin-token";

pub const ADMIN_EMAIL: &str = "admin@example.com";

pub fn admin_bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {ADMIN_TOKEN}"))
}

pub fn test_admin_session() -> AdminSession {
    admin_session_for(ADMIN_EMAIL)
}

pub fn admin_session_for(email: &str) -> AdminSession {
    let expires_at = Utc
        .with_ymd_and_hms(2100, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    AdminSession::new(email.to_string(), format!("session-{email}"), expires_at)
}
