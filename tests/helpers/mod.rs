//! Shared test helpers: an in-process double of the upstream Feddit API.
#![allow(dead_code)]

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use feddit::config::Config;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

/// Instrumented upstream double. Counts hits per endpoint and can be told
/// to stall, fail, or answer with the wrong shape, so tests can observe
/// deduplication and error paths.
#[derive(Clone, Default)]
pub struct MockUpstream {
    pub subfeddits_hits: Arc<AtomicUsize>,
    pub subfeddit_hits: Arc<AtomicUsize>,
    pub comments_hits: Arc<AtomicUsize>,
    /// Artificial handler latency, to widen race windows.
    pub delay_ms: Arc<AtomicU64>,
    /// When set, every endpoint answers 500.
    pub fail: Arc<AtomicBool>,
    /// When set, the comments endpoint answers 200 with a wrong-shape body.
    pub malformed: Arc<AtomicBool>,
}

impl MockUpstream {
    async fn stall_or_fail(&self) -> Option<Response> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Some(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "boom" })),
                )
                    .into_response(),
            );
        }
        None
    }
}

fn comment_fixtures() -> Vec<serde_json::Value> {
    vec![
        json!({ "id": 1, "username": "user1", "text": "This is a great comment!", "created_at": 100 }),
        json!({ "id": 2, "username": "user2", "text": "This is a terrible comment.", "created_at": 200 }),
        json!({ "id": 3, "username": "user3", "text": "This is a comment.", "created_at": 300 }),
    ]
}

async fn list_subfeddits(State(mock): State<MockUpstream>) -> Response {
    mock.subfeddits_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(response) = mock.stall_or_fail().await {
        return response;
    }
    Json(json!({
        "subfeddits": [
            { "id": 1, "title": "Cooking", "description": "All things food" },
            { "id": 2, "title": "Gaming", "description": "Video games" },
        ]
    }))
    .into_response()
}

#[derive(Deserialize)]
struct DetailParams {
    subfeddit_id: i64,
}

async fn subfeddit_detail(
    State(mock): State<MockUpstream>,
    Query(params): Query<DetailParams>,
) -> Response {
    mock.subfeddit_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(response) = mock.stall_or_fail().await {
        return response;
    }
    let title = if params.subfeddit_id == 1 {
        "Cooking"
    } else {
        "Gaming"
    };
    Json(json!({
        "id": params.subfeddit_id,
        "title": title,
        "description": "detail record"
    }))
    .into_response()
}

#[derive(Deserialize)]
struct CommentsQuery {
    subfeddit_id: i64,
    limit: usize,
    #[serde(default)]
    skip: usize,
}

async fn comments(
    State(mock): State<MockUpstream>,
    Query(params): Query<CommentsQuery>,
) -> Response {
    mock.comments_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(response) = mock.stall_or_fail().await {
        return response;
    }
    if mock.malformed.load(Ordering::SeqCst) {
        return Json(json!({ "detail": "wrong shape" })).into_response();
    }
    let page: Vec<_> = comment_fixtures()
        .into_iter()
        .skip(params.skip)
        .take(params.limit)
        .collect();
    Json(json!({ "subfeddit_id": params.subfeddit_id, "comments": page })).into_response()
}

/// Bind the mock on an ephemeral port; returns its handles and base URL.
pub async fn spawn() -> (MockUpstream, String) {
    let mock = MockUpstream::default();
    let router = Router::new()
        .route("/api/v1/subfeddits/", get(list_subfeddits))
        .route("/api/v1/subfeddit/", get(subfeddit_detail))
        .route("/api/v1/comments/", get(comments))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let addr = listener.local_addr().expect("mock upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock upstream serve");
    });
    (mock, format!("http://{addr}"))
}

/// Config pointing at the mock, with a short timeout.
pub fn test_config(base_url: &str) -> Config {
    Config {
        feddit_api_url: base_url.to_owned(),
        timeout: 5,
        ..Config::default()
    }
}
