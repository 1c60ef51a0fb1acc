//! API error type shared by all handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::feddit::errors::FedditApiError;

/// Machine-readable error codes surfaced in JSON error bodies.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    SubfedditNotFound,
    UpstreamUnavailable,
    UpstreamInvalid,
}

#[derive(Debug)]
pub struct ApiError {
    code: ApiErrorCode,
    message: String,
}

impl ApiError {
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self.code {
            ApiErrorCode::SubfedditNotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::UpstreamUnavailable | ApiErrorCode::UpstreamInvalid => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl From<FedditApiError> for ApiError {
    fn from(err: FedditApiError) -> Self {
        match &err {
            FedditApiError::NotFound(name) => Self::new(
                ApiErrorCode::SubfedditNotFound,
                format!("Subfeddit with name '{name}' not found"),
            ),
            FedditApiError::Unavailable { path, .. } => {
                error!(error = ?err, "upstream request failed");
                Self::new(
                    ApiErrorCode::UpstreamUnavailable,
                    format!("Upstream request to {path} failed"),
                )
            }
            FedditApiError::InvalidResponse { path, .. } => {
                error!(error = ?err, "upstream returned malformed payload");
                Self::new(
                    ApiErrorCode::UpstreamInvalid,
                    format!("Upstream response from {path} was malformed"),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorBody {
            code: ApiErrorCode,
            message: String,
        }

        (
            self.status(),
            Json(ErrorBody {
                code: self.code,
                message: self.message,
            }),
        )
            .into_response()
    }
}
