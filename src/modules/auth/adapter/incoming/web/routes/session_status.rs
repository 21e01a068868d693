use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionStatusDto {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Current session
///
/// Lets the admin UI choose between the login form and the panel. Never fails:
/// any problem with the token reads as "not signed in".
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    responses(
        (status = 200, description = "Session state", body = inline(SuccessResponse<SessionStatusDto>)),
    )
)]
#[get("/api/auth/session")]
pub async fn session_status_handler(session: Option<AdminSession>) -> impl Responder {
    ApiResponse::success(SessionStatusDto {
        authenticated: session.is_some(),
        email: session.map(|s| s.email().to_string()),
    })
}
