use actix_web::{get, web, Responder};

use super::list_resumes::ResumeDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get one resume
#[utoipa::path(
    get,
    path = "/api/resumes/{id}",
    tag = "resumes",
    params(("id" = String, Path, description = "Resume id")),
    responses(
        (status = 200, description = "Resume", body = inline(SuccessResponse<ResumeDto>)),
        (status = 404, description = "Resume not found or store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/resumes/{id}")]
pub async fn get_resume_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resume.read.get(&path.into_inner()).await {
        Some(resume) => ApiResponse::success(ResumeDto::from(resume)),
        None => ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found"),
    }
}
