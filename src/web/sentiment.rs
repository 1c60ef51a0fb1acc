//! Standalone sentiment analysis endpoint.

use axum::response::Json;
use serde::Deserialize;

use crate::sentiment::{self, Sentiment};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// `POST /api/sentiment/analyze`
///
/// A malformed or field-missing body is rejected by the `Json` extractor
/// before this handler runs.
pub(super) async fn analyze(Json(request): Json<AnalyzeRequest>) -> Json<Sentiment> {
    Json(sentiment::analyze(&request.text))
}
