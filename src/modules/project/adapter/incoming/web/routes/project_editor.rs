use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::warn;

use super::write_error_response;
use crate::auth::application::domain::entities::AdminSession;
use crate::modules::project::application::domain::project_form::ProjectFormError;
use crate::modules::project::application::ports::incoming::use_cases::{
    ProjectEditorCommand, ProjectEditorError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/editor/projects")]
pub async fn get_project_editor_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.project.editor.current(&session).await)
}

/// Applies one editor command and returns the resulting editor state.
#[post("/api/admin/editor/projects")]
pub async fn apply_project_editor_handler(
    session: AdminSession,
    command: web::Json<ProjectEditorCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .project
        .editor
        .apply(&session, command.into_inner())
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(err) => editor_error_response(err),
    }
}

fn editor_error_response(err: ProjectEditorError) -> HttpResponse {
    match err {
        ProjectEditorError::NotEditing => {
            ApiResponse::bad_request("NOT_EDITING", "No project is being edited")
        }
        ProjectEditorError::NotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        ProjectEditorError::Form(e @ ProjectFormError::MediaIndexOutOfRange { .. }) => {
            ApiResponse::bad_request("MEDIA_INDEX_OUT_OF_RANGE", &e.to_string())
        }
        ProjectEditorError::Form(e @ ProjectFormError::TitleRequired) => {
            warn!("Project save blocked: {}", e);
            ApiResponse::unprocessable("VALIDATION_ERROR", &e.to_string())
        }
        ProjectEditorError::Save(e) => write_error_response(e),
    }
}
