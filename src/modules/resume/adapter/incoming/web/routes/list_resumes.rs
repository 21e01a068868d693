use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::modules::resume::application::domain::download::resolve_download_url;
use crate::modules::resume::application::domain::entities::Resume;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A resume with its viewer links resolved.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDto {
    #[serde(flatten)]
    pub resume: Resume,
    /// Embeddable preview, Google Doc resumes only
    pub preview_url: Option<String>,
    pub download_url: String,
}

impl From<Resume> for ResumeDto {
    fn from(resume: Resume) -> Self {
        Self {
            preview_url: resume.preview_url(),
            download_url: resolve_download_url(&resume),
            resume,
        }
    }
}

/// List resumes
///
/// Most recently updated first. An unavailable store yields an empty list.
#[utoipa::path(
    get,
    path = "/api/resumes",
    tag = "resumes",
    responses(
        (status = 200, description = "Resumes", body = inline(SuccessResponse<Vec<ResumeDto>>)),
    )
)]
#[get("/api/resumes")]
pub async fn list_resumes_handler(data: web::Data<AppState>) -> impl Responder {
    let resumes = data.resume.read.list().await;

    ApiResponse::success(resumes.into_iter().map(ResumeDto::from).collect::<Vec<_>>())
}
