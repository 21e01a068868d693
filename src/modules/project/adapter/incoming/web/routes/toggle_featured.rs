use actix_web::{post, web, Responder};

use super::write_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::modules::project::application::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Feature or unfeature a project
///
/// A newly featured project is placed after the existing featured ones.
#[utoipa::path(
    post,
    path = "/api/admin/projects/{id}/featured",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Updated project", body = inline(SuccessResponse<Project>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 503, description = "Store not configured", body = ErrorResponse),
    )
)]
#[post("/api/admin/projects/{id}/featured")]
pub async fn toggle_featured_handler(
    session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .project
        .write
        .toggle_featured(&session, &path.into_inner())
        .await
    {
        Ok(project) => ApiResponse::success(project),
        Err(e) => write_error_response(e),
    }
}
