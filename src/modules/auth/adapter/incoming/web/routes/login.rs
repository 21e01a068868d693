use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Login request from the admin panel
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "owner@example.com")]
    pub email: String,

    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    /// Bearer token for the admin API
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    #[schema(example = "owner@example.com")]
    email: String,

    /// Unix seconds
    #[schema(example = 1767225600)]
    expires_at: i64,
}

/// Operator login
///
/// Signs the single configured operator in and returns a session token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponseDto>)),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password." }
            })
        ),
        (status = 429, description = "Too many failed attempts", body = ErrorResponse),
        (status = 503, description = "Operator identity not configured", body = ErrorResponse),
        (status = 500, description = "Login failed", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => {
            // Malformed input gets the same answer as a wrong password
            warn!(reason = %e, "Login rejected before authentication");
            return ApiResponse::unauthorized(
                "INVALID_CREDENTIALS",
                LoginError::InvalidCredentials.user_message(),
            );
        }
    };

    info!(email = %request.email(), "Admin login attempt");

    match data.auth.login.execute(request).await {
        Ok(response) => {
            info!(email = %response.email, "Admin logged in");
            ApiResponse::success(LoginResponseDto {
                access_token: response.access_token,
                email: response.email,
                expires_at: response.expires_at,
            })
        }

        Err(e @ LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", e.user_message())
        }

        Err(e @ LoginError::TooManyAttempts) => {
            warn!("Login failed: too many attempts");
            ApiResponse::too_many_requests("TOO_MANY_ATTEMPTS", e.user_message())
        }

        Err(e @ LoginError::NotConfigured) => {
            error!("Login failed: admin login is not fully configured");
            ApiResponse::service_unavailable("AUTH_NOT_CONFIGURED", e.user_message())
        }

        Err(e @ LoginError::Failed(_)) => {
            error!(error = %e, "Login failed");
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "LOGIN_FAILED",
                e.user_message(),
            )
        }
    }
}
