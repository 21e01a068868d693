use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::warn;

use super::write_error_response;
use crate::auth::application::domain::entities::AdminSession;
use crate::modules::resume::application::ports::incoming::use_cases::{
    ResumeEditorCommand, ResumeEditorError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/editor/resumes")]
pub async fn get_resume_editor_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.resume.editor.current(&session).await)
}

#[post("/api/admin/editor/resumes")]
pub async fn apply_resume_editor_handler(
    session: AdminSession,
    command: web::Json<ResumeEditorCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .resume
        .editor
        .apply(&session, command.into_inner())
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(err) => editor_error_response(err),
    }
}

fn editor_error_response(err: ResumeEditorError) -> HttpResponse {
    match err {
        ResumeEditorError::NotEditing => {
            ApiResponse::bad_request("NOT_EDITING", "No resume is being edited")
        }
        ResumeEditorError::NotFound => ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found"),
        ResumeEditorError::Invalid(e) => {
            warn!("Resume save blocked: {}", e);
            ApiResponse::unprocessable("VALIDATION_ERROR", &e.to_string())
        }
        ResumeEditorError::Save(e) => write_error_response(e),
    }
}
