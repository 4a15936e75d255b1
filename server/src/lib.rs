//! HTTP backend for a single-table todo list stored in SQLite.
//!
//! # Design
//! - `TodoStore` is constructed by the caller and injected as router state.
//! - Handlers make exactly one store round trip per request (two for
//!   completion: find, then save).
//! - `GET /` renders the page shell; `/static` serves the script that drives
//!   the JSON API from the browser.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod store;

use std::path::Path;

use axum::{
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub use config::Config;
pub use error::AppError;
pub use handlers::AppState;
pub use model::{CreateTodo, Message, Todo, TodoStatus};
pub use store::{StoreError, TodoStore};

pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            put(handlers::complete_todo).delete(handlers::delete_todo),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}
