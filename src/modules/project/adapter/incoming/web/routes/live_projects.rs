use actix_web::{get, web, Responder};

use super::list_projects::{ProjectCardDto, ProjectListQuery};
use crate::shared::api::sse::snapshot_stream;
use crate::AppState;

/// Live project list
///
/// Server-sent events: one `snapshot` event with the full list on connect and
/// again after every project change. Changing the filter means opening a new
/// stream.
#[utoipa::path(
    get,
    path = "/api/projects/live",
    tag = "projects",
    params(ProjectListQuery),
    responses(
        (status = 200, description = "Stream of project list snapshots", content_type = "text/event-stream"),
    )
)]
#[get("/api/projects/live")]
pub async fn live_projects_handler(
    query: web::Query<ProjectListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let subscription = data.project.read.subscribe(query.into_inner().into());

    snapshot_stream(subscription, |projects| {
        projects
            .into_iter()
            .map(ProjectCardDto::from)
            .collect::<Vec<_>>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_project;
    use crate::tests::support::stubs::StubProjectReads;

    #[actix_web::test]
    async fn test_streams_snapshot_frames() {
        let app_state = TestAppStateBuilder::default()
            .with_project_read(StubProjectReads::with(vec![sample_project("p1")]))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(live_projects_handler))
                .await;

        let req = test::TestRequest::get()
            .uri("/api/projects/live")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/event-stream"
        );

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.starts_with("event: snapshot\ndata: [{"));
        assert!(text.contains("\"id\":\"p1\""));
        assert!(text.ends_with("\n\n"));
    }
}
