//! Subfeddit comment listing with sentiment enrichment.

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::feddit::models::Comment;
use crate::sentiment::{self, Classification, Sentiment};
use crate::state::AppState;
use crate::web::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Polarity,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Deserialize)]
pub struct CommentsParams {
    pub limit: Option<u32>,
    #[serde(default)]
    pub skip: u32,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub filter_by: Option<Classification>,
}

/// A raw upstream comment plus its freshly computed sentiment.
#[derive(Serialize)]
pub struct EnrichedComment {
    pub id: i64,
    pub username: String,
    pub text: String,
    pub created_at: i64,
    pub sentiment: Sentiment,
}

#[derive(Serialize)]
pub struct CommentsResponse {
    pub subfeddit_id: i64,
    pub subfeddit_name: String,
    pub limit: u32,
    pub skip: u32,
    pub sort_by: Option<SortBy>,
    pub sort_order: SortOrder,
    pub filter_by: Option<Classification>,
    pub comments: Vec<EnrichedComment>,
}

/// `GET /api/subfeddit/{name}/comments?limit=25&skip=0&sort_by=polarity&sort_order=desc&filter_by=positive`
pub(super) async fn subfeddit_comments(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<CommentsParams>,
) -> Result<Json<CommentsResponse>, ApiError> {
    let limit = params
        .limit
        .unwrap_or(state.default_comment_limit)
        .clamp(1, 100);
    let sort_order = params.sort_order.unwrap_or(SortOrder::Desc);

    let subfeddit = state.feddit.resolve_subfeddit(&name).await?;
    let page = state
        .feddit
        .get_comments(subfeddit.id, limit, params.skip)
        .await?;

    // Sentiment is computed fresh per request; it never rides along in the
    // upstream response cache.
    let mut comments: Vec<EnrichedComment> = page.comments.into_iter().map(enrich).collect();

    if let Some(filter) = params.filter_by {
        comments.retain(|c| c.sentiment.classification == filter);
    }

    match params.sort_by {
        Some(SortBy::Polarity) => {
            comments.sort_by(|a, b| a.sentiment.polarity.total_cmp(&b.sentiment.polarity));
        }
        Some(SortBy::CreatedAt) => comments.sort_by_key(|c| c.created_at),
        None => {}
    }
    if params.sort_by.is_some() && sort_order == SortOrder::Desc {
        comments.reverse();
    }

    Ok(Json(CommentsResponse {
        subfeddit_id: subfeddit.id,
        subfeddit_name: name,
        limit,
        skip: params.skip,
        sort_by: params.sort_by,
        sort_order,
        filter_by: params.filter_by,
        comments,
    }))
}

fn enrich(comment: Comment) -> EnrichedComment {
    let sentiment = sentiment::analyze(&comment.text);
    EnrichedComment {
        id: comment.id,
        username: comment.username,
        text: comment.text,
        created_at: comment.created_at,
        sentiment,
    }
}
