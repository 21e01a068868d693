use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::warn;

use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::use_cases::verify_session::VerifySessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Admin handlers take `AdminSession` as an argument; requests without a live
/// session never reach the handler body.
///
/// Handlers that only want to know whether someone is signed in can take
/// `Option<AdminSession>` instead.
impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let verifier = req
            .app_data::<web::Data<AppState>>()
            .map(|state| state.auth.verify_session.clone());
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let verifier = verifier.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))
            })?;

            verifier.execute(&token).await.map_err(|e| match e {
                VerifySessionError::InvalidToken => create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                )),
                VerifySessionError::Revoked => create_api_error(ApiResponse::unauthorized(
                    "SESSION_REVOKED",
                    "Session has been signed out",
                )),
                VerifySessionError::Unavailable(msg) => {
                    warn!(error = %msg, "Cannot verify admin session");
                    create_api_error(ApiResponse::service_unavailable(
                        "SESSION_STORE_UNAVAILABLE",
                        "Sessions cannot be verified right now",
                    ))
                }
            })
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
