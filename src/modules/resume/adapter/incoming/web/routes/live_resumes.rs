use actix_web::{get, web, Responder};

use super::list_resumes::ResumeDto;
use crate::shared::api::sse::snapshot_stream;
use crate::AppState;

/// Live resume list
///
/// Server-sent events: a `snapshot` event with the full list on connect and
/// after every resume change.
#[utoipa::path(
    get,
    path = "/api/resumes/live",
    tag = "resumes",
    responses(
        (status = 200, description = "Stream of resume list snapshots", content_type = "text/event-stream"),
    )
)]
#[get("/api/resumes/live")]
pub async fn live_resumes_handler(data: web::Data<AppState>) -> impl Responder {
    snapshot_stream(data.resume.read.subscribe(), |resumes| {
        resumes.into_iter().map(ResumeDto::from).collect::<Vec<_>>()
    })
}
