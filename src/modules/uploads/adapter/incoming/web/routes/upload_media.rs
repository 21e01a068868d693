use actix_web::{http::header, post, web, HttpRequest, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use super::upload_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::modules::uploads::application::domain::storage_path::UploadFolder;
use crate::modules::uploads::application::ports::incoming::use_cases::{
    UploadMediaCommand, UploadedMedia,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Upper bound for a single uploaded file.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

pub fn upload_payload_config() -> web::PayloadConfig {
    web::PayloadConfig::new(MAX_UPLOAD_BYTES)
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct UploadQuery {
    /// Original name of the uploaded file
    #[serde(default)]
    pub file_name: String,
}

/// Upload a media file
///
/// The raw request body is stored under `{folder}/{timestamp}_{name}`; the
/// request `Content-Type` is kept on the object and decides whether the
/// result is an image or a video.
#[utoipa::path(
    post,
    path = "/api/admin/uploads/{folder}",
    tag = "uploads",
    security(("bearer_auth" = [])),
    params(
        ("folder" = String, Path, description = "`projects` or `resumes`"),
        UploadQuery,
    ),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Uploaded", body = inline(SuccessResponse<UploadedMedia>)),
        (status = 400, description = "Unknown folder, missing name or empty file", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 503, description = "Object storage not configured", body = ErrorResponse),
    )
)]
#[post("/api/admin/uploads/{folder}")]
pub async fn upload_media_handler(
    session: AdminSession,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(folder) = UploadFolder::parse(&path.into_inner()) else {
        return ApiResponse::bad_request(
            "INVALID_FOLDER",
            "Uploads go to either 'projects' or 'resumes'",
        );
    };

    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    let command = UploadMediaCommand {
        folder,
        file_name: query.into_inner().file_name,
        content_type,
        bytes: body.to_vec(),
    };

    match data.uploads.upload(&session, command).await {
        Ok(uploaded) => ApiResponse::created(uploaded),
        Err(e) => upload_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::uploads::application::ports::incoming::use_cases::UploadMediaError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::admin_bearer;
    use crate::tests::support::stubs::StubUploads;

    async fn post_upload(
        uploads: StubUploads,
        uri: &str,
        content_type: &str,
        body: &'static [u8],
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default().with_uploads(uploads).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(upload_payload_config())
                .service(upload_media_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(admin_bearer())
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_upload_created() {
        let resp = post_upload(
            StubUploads::succeeding(),
            "/api/admin/uploads/projects?file_name=demo.mp4",
            "video/mp4",
            b"frames",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["path"], "projects/1_demo.mp4");
        assert_eq!(body["data"]["mediaType"], "video");
    }

    #[actix_web::test]
    async fn test_unknown_folder() {
        let resp = post_upload(
            StubUploads::succeeding(),
            "/api/admin/uploads/blog?file_name=a.png",
            "image/png",
            b"png",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_FOLDER");
    }

    #[actix_web::test]
    async fn test_empty_file_is_rejected() {
        let resp = post_upload(
            StubUploads::failing(UploadMediaError::EmptyFile),
            "/api/admin/uploads/resumes?file_name=cv.pdf",
            "application/pdf",
            b"",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_storage_not_configured() {
        let resp = post_upload(
            StubUploads::failing(UploadMediaError::NotConfigured),
            "/api/admin/uploads/resumes?file_name=cv.pdf",
            "application/pdf",
            b"%PDF",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "STORAGE_NOT_CONFIGURED");
    }
}
