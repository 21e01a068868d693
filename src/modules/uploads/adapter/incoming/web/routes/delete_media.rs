use actix_web::{delete, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use super::upload_error_response;
use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct DeleteMediaQuery {
    /// Object path returned by the upload, e.g. `projects/1700_a.png`
    pub path: String,
}

/// Delete an uploaded object
#[utoipa::path(
    delete,
    path = "/api/admin/uploads",
    tag = "uploads",
    security(("bearer_auth" = [])),
    params(DeleteMediaQuery),
    responses(
        (status = 204, description = "Object deleted"),
        (status = 400, description = "Path outside managed folders", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 503, description = "Object storage not configured", body = ErrorResponse),
    )
)]
#[delete("/api/admin/uploads")]
pub async fn delete_media_handler(
    session: AdminSession,
    query: web::Query<DeleteMediaQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.uploads.delete(&session, &query.path).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => upload_error_response(e),
    }
}
