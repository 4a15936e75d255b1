//! One handler per route. Each decodes the request, checks what little needs
//! checking, makes one store call and encodes the answer.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tera::{Context, Tera};

use crate::error::AppError;
use crate::model::{CreateTodo, Message, Todo, TodoStatus};
use crate::store::TodoStore;

const INDEX_TEMPLATE: &str = "index.html";
const PAGE_TITLE: &str = "Todo List";

/// Shared handler state: the store plus the compiled page templates.
#[derive(Clone)]
pub struct AppState {
    pub store: TodoStore,
    templates: Arc<Tera>,
}

impl AppState {
    pub fn new(store: TodoStore) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
        Ok(Self {
            store,
            templates: Arc::new(tera),
        })
    }
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("title", PAGE_TITLE);
    let page = state.templates.render(INDEX_TEMPLATE, &context)?;
    Ok(Html(page))
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.store.list_all().await?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::warn!(%rejection, "rejected create request");
        AppError::BadRequest(rejection.body_text())
    })?;

    if input.title.trim().is_empty() {
        tracing::warn!("rejected create request with blank title");
        return Err(AppError::BadRequest("title is required".to_string()));
    }

    let todo = state.store.create(&input.title).await?;
    tracing::info!(id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Mark a todo completed. Any request body is ignored.
pub async fn complete_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Todo>, AppError> {
    let Path(id) = id.map_err(|_| AppError::NotFound)?;

    let mut todo = state.store.find_by_id(id).await?;
    todo.status = TodoStatus::Completed;
    let todo = state.store.save(&todo).await?;
    tracing::info!(id, "todo completed");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Message>, AppError> {
    let Path(id) = id.map_err(|_| AppError::NotFound)?;

    state.store.delete_by_id(id).await?;
    tracing::info!(id, "todo deleted");
    Ok(Json(Message::new("Todo deleted")))
}
