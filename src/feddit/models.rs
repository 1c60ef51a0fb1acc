//! Typed models for the upstream Feddit API surface.
//!
//! Upstream payloads may carry fields beyond these; unknown fields are
//! ignored on deserialization. A *missing* required field is a contract
//! violation and surfaces as a decode error.

use serde::{Deserialize, Serialize};

/// A subfeddit (topic category) as returned by the listing and detail
/// endpoints. Read-only from this service's perspective.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Subfeddit {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response shape of `GET /api/v1/subfeddits/`.
#[derive(Debug, Deserialize)]
pub struct SubfedditListing {
    pub subfeddits: Vec<Subfeddit>,
}

/// A single comment under a subfeddit. `created_at` is an epoch timestamp
/// assigned upstream; this service never rewrites it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Comment {
    pub id: i64,
    pub username: String,
    pub text: String,
    pub created_at: i64,
}

/// Response shape of `GET /api/v1/comments/`.
#[derive(Debug, Deserialize)]
pub struct CommentsPage {
    pub subfeddit_id: i64,
    pub comments: Vec<Comment>,
}
