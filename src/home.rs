use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::modules::project::adapter::incoming::web::routes::ProjectCardDto;
use crate::modules::project::application::ports::outgoing::ProjectListFilter;
use crate::modules::resume::adapter::incoming::web::routes::ResumeDto;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Featured cards shown on the landing page.
pub const HOME_FEATURED_LIMIT: usize = 3;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeDto {
    pub featured_projects: Vec<ProjectCardDto>,
    pub resumes: Vec<ResumeDto>,
}

/// Landing page content
///
/// The first featured projects in featured order plus every resume. Either
/// list is empty when its store is unavailable.
#[utoipa::path(
    get,
    path = "/api/home",
    tag = "home",
    responses(
        (status = 200, description = "Landing page content", body = inline(SuccessResponse<HomeDto>)),
    )
)]
#[get("/api/home")]
pub async fn home_handler(data: web::Data<AppState>) -> impl Responder {
    let (projects, resumes) = tokio::join!(
        data.project.read.list(ProjectListFilter {
            featured_only: true
        }),
        data.resume.read.list(),
    );

    ApiResponse::success(HomeDto {
        featured_projects: projects
            .into_iter()
            .take(HOME_FEATURED_LIMIT)
            .map(ProjectCardDto::from)
            .collect(),
        resumes: resumes.into_iter().map(ResumeDto::from).collect(),
    })
}
