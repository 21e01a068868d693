mod delete_media;
mod upload_media;

pub use delete_media::{delete_media_handler, DeleteMediaQuery};
pub use upload_media::{upload_media_handler, upload_payload_config, UploadQuery};
pub use delete_media::__path_delete_media_handler;
pub use upload_media::__path_upload_media_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::modules::uploads::application::ports::incoming::use_cases::UploadMediaError;
use crate::shared::api::ApiResponse;

fn upload_error_response(err: UploadMediaError) -> HttpResponse {
    match err {
        UploadMediaError::MissingFileName => {
            ApiResponse::bad_request("MISSING_FILE_NAME", &err.to_string())
        }
        UploadMediaError::EmptyFile => ApiResponse::bad_request("EMPTY_FILE", &err.to_string()),
        UploadMediaError::UnmanagedPath => {
            ApiResponse::bad_request("UNMANAGED_PATH", &err.to_string())
        }
        UploadMediaError::NotConfigured => ApiResponse::service_unavailable(
            "STORAGE_NOT_CONFIGURED",
            "Object storage is not configured on this server",
        ),
        UploadMediaError::Storage(msg) => {
            error!("Object storage call failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
