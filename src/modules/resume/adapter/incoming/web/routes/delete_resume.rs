use actix_web::{delete, web, Responder};

use super::write_error_response;
use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a resume
#[utoipa::path(
    delete,
    path = "/api/admin/resumes/{id}",
    tag = "resumes",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Resume id")),
    responses(
        (status = 204, description = "Resume deleted"),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "Resume not found", body = ErrorResponse),
        (status = 503, description = "Store not configured", body = ErrorResponse),
    )
)]
#[delete("/api/admin/resumes/{id}")]
pub async fn delete_resume_handler(
    session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resume.write.delete(&session, &path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => write_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::resume::application::ports::incoming::use_cases::WriteResumeError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::admin_bearer;
    use crate::tests::support::stubs::StubResumeWrites;

    async fn call(writes: StubResumeWrites, bearer: bool) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_resume_write(writes)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(delete_resume_handler)).await;

        let mut req = test::TestRequest::delete().uri("/api/admin/resumes/r1");
        if bearer {
            req = req.insert_header(admin_bearer());
        }
        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn test_delete_success() {
        let resp = call(StubResumeWrites::succeeding(), true).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_delete_requires_session() {
        let resp = call(StubResumeWrites::succeeding(), false).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_delete_missing_resume() {
        let resp = call(StubResumeWrites::failing(WriteResumeError::NotFound), true).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "RESUME_NOT_FOUND");
    }
}
