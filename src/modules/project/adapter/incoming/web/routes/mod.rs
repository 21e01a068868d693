mod delete_project;
mod get_project;
mod list_projects;
mod live_projects;
mod project_editor;
mod toggle_featured;

pub use delete_project::delete_project_handler;
pub use get_project::get_project_handler;
pub use list_projects::{list_projects_handler, ProjectCardDto, ProjectListQuery};
pub use live_projects::live_projects_handler;
pub use project_editor::{apply_project_editor_handler, get_project_editor_handler};
pub use toggle_featured::toggle_featured_handler;
pub use delete_project::__path_delete_project_handler;
pub use get_project::__path_get_project_handler;
pub use list_projects::__path_list_projects_handler;
pub use live_projects::__path_live_projects_handler;
pub use toggle_featured::__path_toggle_featured_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::WriteProjectError;
use crate::shared::api::ApiResponse;

pub(crate) fn write_error_response(err: WriteProjectError) -> HttpResponse {
    match err {
        WriteProjectError::NotConfigured => ApiResponse::service_unavailable(
            "STORE_NOT_CONFIGURED",
            "Project storage is not configured on this server",
        ),
        WriteProjectError::NotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        WriteProjectError::Backend(msg) => {
            error!("Project write failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
