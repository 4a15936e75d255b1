//! Mapping of handler failures to HTTP responses.
//!
//! # Design
//! Client mistakes carry their message back to the caller. Store and template
//! failures are logged with their source and answered with a generic 500, so
//! a failed write is never reported as success.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::store::StoreError;

pub const NOT_FOUND_MESSAGE: &str = "Todo not found";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed body or missing title.
    #[error("{0}")]
    BadRequest(String),

    #[error("Todo not found")]
    NotFound,

    #[error("store failure: {0}")]
    Store(#[source] sqlx::Error),

    #[error("template failure: {0}")]
    Template(#[from] tera::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound,
            StoreError::Database(e) => AppError::Store(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": NOT_FOUND_MESSAGE })),
            )
                .into_response(),
            AppError::Store(_) | AppError::Template(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
