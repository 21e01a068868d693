use actix_web::{delete, web, Responder};

use super::write_error_response;
use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project
#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 503, description = "Store not configured", body = ErrorResponse),
    )
)]
#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.write.delete(&session, &path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => write_error_response(e),
    }
}
