use actix_web::{get, http::header, web, HttpResponse, Responder};

use crate::api::schemas::ErrorResponse;
use crate::modules::resume::application::ports::incoming::use_cases::DownloadOutcome;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Download a resume as PDF
///
/// Streams the document as an attachment named after the owner and domain.
/// When the document cannot be fetched server-side the visitor is redirected
/// to the document URL instead.
#[utoipa::path(
    get,
    path = "/api/resumes/{id}/download",
    tag = "resumes",
    params(("id" = String, Path, description = "Resume id")),
    responses(
        (status = 200, description = "PDF attachment", content_type = "application/pdf"),
        (status = 302, description = "Redirect to the document URL"),
        (status = 404, description = "Resume not found", body = ErrorResponse),
    )
)]
#[get("/api/resumes/{id}/download")]
pub async fn download_resume_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resume.download.execute(&path.into_inner()).await {
        DownloadOutcome::Ready { bytes, file_name } => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name.replace('"', "")),
            ))
            .body(bytes),
        DownloadOutcome::Fallback { url, .. } => HttpResponse::Found()
            .insert_header((header::LOCATION, url))
            .finish(),
        DownloadOutcome::NotFound => ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found"),
    }
}
