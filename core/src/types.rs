//! DTOs for the todo API.
//!
//! # Design
//! These mirror the server's JSON but are defined independently, so the
//! client carries no database or web-framework dependencies. Timestamps the
//! server adds are ignored on decode. The integration test catches schema
//! drift between the two crates.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Pending,
    Completed,
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub status: TodoStatus,
}

/// Request payload for creating a new todo. The server always starts it as
/// pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// `{"message": ...}` body of delete confirmations and 404s.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessageBody {
    pub message: String,
}

/// `{"error": ...}` body of 400 and 500 answers.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
