//! The todo entity and its request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion state of a todo. Stored as lowercase TEXT.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TodoStatus {
    Pending,
    Completed,
}

/// A row of the `todos` table.
///
/// `deleted_at` is the soft-delete marker. It never leaves the server, and
/// rows where it is set are invisible to every `TodoStore` operation.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub status: TodoStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Body of the delete confirmation and of 404 answers.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
