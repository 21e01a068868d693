use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponseDto, SessionStatusDto,
};
// Content
use crate::home::HomeDto;
use crate::modules::project::adapter::incoming::web::routes::ProjectCardDto;
use crate::modules::project::application::domain::entities::{MediaItem, MediaType, Project};
use crate::modules::resume::adapter::incoming::web::routes::ResumeDto;
use crate::modules::resume::application::domain::entities::{Resume, ResumeDomain, SourceType};
use crate::modules::uploads::application::ports::incoming::use_cases::UploadedMedia;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public read paths and admin endpoints of the portfolio backend"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_handler,
        crate::auth::adapter::incoming::web::routes::logout_handler,
        crate::auth::adapter::incoming::web::routes::session_status_handler,

        // Home
        crate::home::home_handler,

        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::list_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::live_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_handler,
        crate::modules::project::adapter::incoming::web::routes::toggle_featured_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Resume endpoints
        crate::modules::resume::adapter::incoming::web::routes::list_resumes_handler,
        crate::modules::resume::adapter::incoming::web::routes::live_resumes_handler,
        crate::modules::resume::adapter::incoming::web::routes::get_resume_handler,
        crate::modules::resume::adapter::incoming::web::routes::download_resume_handler,
        crate::modules::resume::adapter::incoming::web::routes::delete_resume_handler,

        // Media endpoints
        crate::modules::uploads::adapter::incoming::web::routes::upload_media_handler,
        crate::modules::uploads::adapter::incoming::web::routes::delete_media_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LoginResponseDto,
            SessionStatusDto,

            // Content
            Project,
            MediaItem,
            MediaType,
            ProjectCardDto,
            Resume,
            ResumeDomain,
            SourceType,
            ResumeDto,
            HomeDto,
            UploadedMedia
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Operator sign-in and session endpoints"),
        (name = "home", description = "Landing page content"),
        (name = "projects", description = "Project read and admin endpoints"),
        (name = "resumes", description = "Resume read, download and admin endpoints"),
        (name = "uploads", description = "Media upload endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token returned by /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
