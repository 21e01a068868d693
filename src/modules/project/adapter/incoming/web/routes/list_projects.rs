use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::SuccessResponse;
use crate::modules::project::application::domain::entities::{MediaItem, Project};
use crate::modules::project::application::ports::outgoing::ProjectListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ProjectListQuery {
    /// Only featured projects, in featured order
    #[serde(default)]
    pub featured: bool,
}

impl From<ProjectListQuery> for ProjectListFilter {
    fn from(query: ProjectListQuery) -> Self {
        ProjectListFilter {
            featured_only: query.featured,
        }
    }
}

/// A project as shown on cards, with its thumbnail already resolved.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectCardDto {
    #[serde(flatten)]
    pub project: Project,
    pub thumbnail: Option<MediaItem>,
}

impl From<Project> for ProjectCardDto {
    fn from(project: Project) -> Self {
        Self {
            thumbnail: project.thumbnail().cloned(),
            project,
        }
    }
}

/// List projects
///
/// Newest first, or in featured order with `featured=true`. An unavailable
/// store yields an empty list.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(ProjectListQuery),
    responses(
        (status = 200, description = "Projects", body = inline(SuccessResponse<Vec<ProjectCardDto>>)),
    )
)]
#[get("/api/projects")]
pub async fn list_projects_handler(
    query: web::Query<ProjectListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let projects = data.project.read.list(query.into_inner().into()).await;

    ApiResponse::success(
        projects
            .into_iter()
            .map(ProjectCardDto::from)
            .collect::<Vec<_>>(),
    )
}
