//! SQLite-backed persistence for todos.
//!
//! # Design
//! `TodoStore` wraps a pool capped at a single connection, so the process
//! talks to the database through exactly one handle. The store is built once
//! by the caller and handed to the router as state; nothing here is global.
//! Every operation is one statement with no surrounding transaction.
//!
//! Deletion is soft: `delete_by_id` stamps `deleted_at` and leaves the row in
//! place. All reads and writes filter on `deleted_at IS NULL`.

use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::model::{Todo, TodoStatus};

const COLUMNS: &str = "id, title, status, created_at, updated_at, deleted_at";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Clone, Debug)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    /// Open (creating if absent) the database at `url` and sync the schema.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        Self::open(options).await
    }

    /// A private in-memory database, gone once the store is dropped.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        Self::open(options).await
    }

    async fn open(options: SqliteConnectOptions) -> Result<Self, StoreError> {
        // The connection must never be recycled: an in-memory database lives
        // and dies with it.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Create the `todos` table and its index if they do not exist yet.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                status TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                deleted_at TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_todos_deleted_at ON todos (deleted_at)")
            .execute(&self.pool)
            .await?;
        tracing::debug!("todos schema ready");
        Ok(())
    }

    /// Every live todo. No ordering is applied.
    pub async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = sqlx::query_as::<_, Todo>(&format!(
            "SELECT {COLUMNS} FROM todos WHERE deleted_at IS NULL"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(todos)
    }

    /// Insert a pending todo and return it with its assigned id.
    pub async fn create(&self, title: &str) -> Result<Todo, StoreError> {
        let now = Utc::now();
        let todo = sqlx::query_as::<_, Todo>(&format!(
            "INSERT INTO todos (title, status, created_at, updated_at) \
             VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(title)
        .bind(TodoStatus::Pending)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(todo)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Todo, StoreError> {
        sqlx::query_as::<_, Todo>(&format!(
            "SELECT {COLUMNS} FROM todos WHERE id = ? AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    /// Overwrite the stored title and status of `todo` and bump `updated_at`.
    pub async fn save(&self, todo: &Todo) -> Result<Todo, StoreError> {
        sqlx::query_as::<_, Todo>(&format!(
            "UPDATE todos SET title = ?, status = ?, updated_at = ? \
             WHERE id = ? AND deleted_at IS NULL RETURNING {COLUMNS}"
        ))
        .bind(&todo.title)
        .bind(todo.status)
        .bind(Utc::now())
        .bind(todo.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(todo.id))
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Soft-delete the todo with `id`.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let result =
            sqlx::query("UPDATE todos SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
                .bind(Utc::now())
                .bind(id)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
