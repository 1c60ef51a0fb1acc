//! Web API router construction.

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer};

use crate::state::AppState;
use crate::web::middleware::request_id_middleware;
use crate::web::{comments, sentiment, status};

/// Creates the web server router.
pub fn create_router(app_state: AppState) -> Router {
    let api_router = Router::new()
        .route(
            "/subfeddit/{name}/comments",
            get(comments::subfeddit_comments),
        )
        .route("/sentiment/analyze", post(sentiment::analyze))
        .with_state(app_state);

    Router::new()
        .route("/", get(status::root))
        .route("/healthz", get(status::healthz))
        .nest("/api", api_router)
        .layer((
            // Outermost: per-request ID span + severity-proportional response logging.
            from_fn(request_id_middleware),
            CompressionLayer::new()
                .gzip(true)
                .quality(tower_http::CompressionLevel::Fastest),
            TimeoutLayer::new(Duration::from_secs(60)),
        ))
}
