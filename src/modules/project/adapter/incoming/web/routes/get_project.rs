use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get one project
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = inline(SuccessResponse<Project>)),
        (status = 404, description = "Project not found or store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.read.get(&path.into_inner()).await {
        Some(project) => ApiResponse::success(project),
        None => ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found"),
    }
}
