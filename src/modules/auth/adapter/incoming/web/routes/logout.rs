use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::use_cases::logout_admin::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Operator logout
///
/// Revokes the presented session; the token stops working immediately.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Session revoked"),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 503, description = "Session store not configured", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(session: AdminSession, data: web::Data<AppState>) -> impl Responder {
    match data.auth.logout.execute(&session).await {
        Ok(()) => {
            info!(email = %session.email(), "Admin logged out");
            ApiResponse::no_content()
        }
        Err(LogoutError::NotConfigured) => ApiResponse::service_unavailable(
            "SESSION_STORE_NOT_CONFIGURED",
            "Sessions cannot be revoked on this server",
        ),
        Err(LogoutError::Failed(msg)) => {
            error!(error = %msg, "Failed to revoke session");
            ApiResponse::internal_error()
        }
    }
}
