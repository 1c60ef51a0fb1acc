//! Per-request tracing spans with generated request IDs.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::{Instrument, debug, info, warn};
use ulid::Ulid;

/// Tags each request with a fresh ULID.
///
/// The ID lives on a span wrapping the whole request and is echoed back in
/// an `X-Request-Id` response header so clients can quote it when reporting
/// a failure. The response is logged at a severity matching its status
/// class, with 4xx kept below `warn` since a bad client request is routine.
pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    let id = Ulid::new().to_string();
    let span = tracing::info_span!("request", req_id = %id);

    async move {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();
        let start = Instant::now();

        let mut response = next.run(req).await;

        let status = response.status().as_u16();
        let duration_ms = start.elapsed().as_millis() as u64;
        match status {
            200..=399 => debug!(%method, path, status, duration_ms, "Response"),
            400..=499 => info!(%method, path, status, duration_ms, "Response"),
            _ => warn!(%method, path, status, duration_ms, "Response"),
        }

        if let Ok(value) = HeaderValue::from_str(&id) {
            response.headers_mut().insert("x-request-id", value);
        }
        response
    }
    .instrument(span)
    .await
}
