//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `Rejected` get dedicated variants because callers act on
//! them: the todo is gone, or the input was refused. Every other non-success
//! status lands in `HttpError` with the raw status and body.

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404; the todo does not exist or was deleted.
    #[error("todo not found")]
    NotFound,

    /// The server returned 400 with the given reason.
    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
