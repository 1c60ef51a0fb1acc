//! Root and health handlers.

use axum::response::Json;
use serde_json::{Value, json};
use tracing::trace;

/// `GET /`
pub(super) async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to Feddit API" }))
}

/// `GET /healthz`
pub(super) async fn healthz() -> Json<Value> {
    trace!("health check requested");
    Json(json!({ "status": "ok", "service": "feddit" }))
}
