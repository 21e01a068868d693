use std::convert::Infallible;

use actix_web::{http::header, web::Bytes, HttpResponse};
use futures::StreamExt;
use serde::Serialize;

use crate::shared::live::LiveSubscription;

/// Formats one server-sent event frame carrying a JSON snapshot.
pub fn snapshot_frame<T: Serialize>(snapshot: &T) -> Bytes {
    match serde_json::to_string(snapshot) {
        Ok(payload) => Bytes::from(format!("event: snapshot\ndata: {payload}\n\n")),
        Err(e) => {
            tracing::error!("Failed to serialize live snapshot: {}", e);
            Bytes::from_static(b"event: error\ndata: {\"code\":\"SERIALIZATION_FAILED\"}\n\n")
        }
    }
}

/// Streams every snapshot of `subscription` to the client.
///
/// The subscription moves into the response body; when the client goes away
/// actix drops the body and with it the subscription, which stops its task.
pub fn snapshot_stream<T, V, M>(subscription: LiveSubscription<T>, to_view: M) -> HttpResponse
where
    T: Send + 'static,
    V: Serialize,
    M: Fn(T) -> V + 'static,
{
    let body = subscription
        .map(move |snapshot| Ok::<_, Infallible>(snapshot_frame(&to_view(snapshot))));

    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/event-stream"))
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(body)
}
