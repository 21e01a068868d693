mod delete_resume;
mod download_resume;
mod get_resume;
mod list_resumes;
mod live_resumes;
mod resume_editor;

pub use delete_resume::delete_resume_handler;
pub use download_resume::download_resume_handler;
pub use get_resume::get_resume_handler;
pub use list_resumes::{list_resumes_handler, ResumeDto};
pub use live_resumes::live_resumes_handler;
pub use resume_editor::{apply_resume_editor_handler, get_resume_editor_handler};
pub use delete_resume::__path_delete_resume_handler;
pub use download_resume::__path_download_resume_handler;
pub use get_resume::__path_get_resume_handler;
pub use list_resumes::__path_list_resumes_handler;
pub use live_resumes::__path_live_resumes_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::modules::resume::application::ports::incoming::use_cases::WriteResumeError;
use crate::shared::api::ApiResponse;

pub(crate) fn write_error_response(err: WriteResumeError) -> HttpResponse {
    match err {
        WriteResumeError::NotConfigured => ApiResponse::service_unavailable(
            "STORE_NOT_CONFIGURED",
            "Resume storage is not configured on this server",
        ),
        WriteResumeError::NotFound => ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found"),
        WriteResumeError::Backend(msg) => {
            error!("Resume write failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
