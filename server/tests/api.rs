use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use todo_server::{app, AppState, Todo, TodoStatus, TodoStore};
use tower::ServiceExt;

async fn test_app() -> Router {
    let store = TodoStore::in_memory().await.unwrap();
    app(AppState::new(store).unwrap(), "static")
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

async fn send(app: &Router, request: Request<String>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn create(app: &Router, title: &str) -> Todo {
    let body = serde_json::json!({ "title": title }).to_string();
    let resp = send(app, json_request("POST", "/todos", &body)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

async fn list(app: &Router) -> Vec<Todo> {
    let resp = send(app, empty_request("GET", "/todos")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let app = test_app().await;
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn list_returns_every_created_todo() {
    let app = test_app().await;
    let mut created = Vec::new();
    for title in ["one", "two", "three", "four"] {
        created.push(create(&app, title).await.id);
    }

    let mut listed: Vec<i64> = list(&app).await.into_iter().map(|t| t.id).collect();
    listed.sort();
    created.sort();
    assert_eq!(listed, created);
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201_pending() {
    let app = test_app().await;
    let resp = send(&app, json_request("POST", "/todos", r#"{"title":"Buy milk"}"#)).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json: serde_json::Value = body_json(resp).await;
    assert!(json["id"].is_i64());
    assert_eq!(json["title"], "Buy milk");
    assert_eq!(json["status"], "pending");
}

#[tokio::test]
async fn create_keeps_title_as_sent() {
    let app = test_app().await;
    let created = create(&app, "  Buy milk  ").await;
    assert_eq!(created.title, "  Buy milk  ");

    let listed = list(&app).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "  Buy milk  ");
}

#[tokio::test]
async fn create_assigns_unique_ids() {
    let app = test_app().await;
    let a = create(&app, "a").await;
    let b = create(&app, "a").await;
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn create_ignores_client_status() {
    let app = test_app().await;
    let resp = send(
        &app,
        json_request("POST", "/todos", r#"{"title":"Sneaky","status":"completed"}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.status, TodoStatus::Pending);
}

#[tokio::test]
async fn create_todo_empty_title_returns_400() {
    let app = test_app().await;
    for body in [r#"{"title":""}"#, r#"{"title":"   "}"#] {
        let resp = send(&app, json_request("POST", "/todos", body)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");
        let json: serde_json::Value = body_json(resp).await;
        assert!(json["error"].is_string());
    }
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn create_todo_missing_title_returns_400() {
    let app = test_app().await;
    let resp = send(&app, json_request("POST", "/todos", r#"{"not_title":1}"#)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = body_json(resp).await;
    assert!(json["error"].is_string());
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn create_todo_malformed_json_returns_400() {
    let app = test_app().await;
    let resp = send(&app, json_request("POST", "/todos", "{title:")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn create_todo_without_content_type_returns_400() {
    let app = test_app().await;
    let resp = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/todos")
            .body(r#"{"title":"x"}"#.to_string())
            .unwrap(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- complete ---

#[tokio::test]
async fn complete_todo_sets_completed_and_keeps_title() {
    let app = test_app().await;
    let todo = create(&app, "Walk dog").await;

    let resp = send(&app, empty_request("PUT", &format!("/todos/{}", todo.id))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.id, todo.id);
    assert_eq!(updated.title, "Walk dog");
    assert_eq!(updated.status, TodoStatus::Completed);

    let listed = list(&app).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, TodoStatus::Completed);
}

#[tokio::test]
async fn complete_ignores_request_body() {
    let app = test_app().await;
    let todo = create(&app, "Original").await;

    let resp = send(
        &app,
        json_request("PUT", &format!("/todos/{}", todo.id), r#"{"title":"Changed"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.title, "Original");
}

#[tokio::test]
async fn complete_todo_not_found() {
    let app = test_app().await;
    let existing = create(&app, "Untouched").await;

    let resp = send(&app, empty_request("PUT", "/todos/999")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json: serde_json::Value = body_json(resp).await;
    assert_eq!(json, serde_json::json!({ "message": "Todo not found" }));

    let listed = list(&app).await;
    assert_eq!(listed[0].id, existing.id);
    assert_eq!(listed[0].status, TodoStatus::Pending);
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let app = test_app().await;
    for method in ["PUT", "DELETE"] {
        let resp = send(&app, empty_request(method, "/todos/not-a-number")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{method}");
    }
}

// --- delete ---

#[tokio::test]
async fn delete_todo_not_found() {
    let app = test_app().await;
    let resp = send(&app, empty_request("DELETE", "/todos/1")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json: serde_json::Value = body_json(resp).await;
    assert_eq!(json["message"], "Todo not found");
}

#[tokio::test]
async fn completing_a_deleted_todo_is_not_found() {
    let app = test_app().await;
    let todo = create(&app, "Gone").await;
    let uri = format!("/todos/{}", todo.id);

    assert_eq!(send(&app, empty_request("DELETE", &uri)).await.status(), StatusCode::OK);
    assert_eq!(
        send(&app, empty_request("PUT", &uri)).await.status(),
        StatusCode::NOT_FOUND
    );
}

// --- index and static ---

#[tokio::test]
async fn index_renders_page() {
    let app = test_app().await;
    let resp = send(&app, empty_request("GET", "/")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[http::header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    let body = String::from_utf8(body_bytes(resp).await.to_vec()).unwrap();
    assert!(body.contains("<title>Todo List</title>"));
    assert!(body.contains("/static/js/app.js"));
}

#[tokio::test]
async fn static_script_is_served() {
    let app = test_app().await;
    let resp = send(&app, empty_request("GET", "/static/js/app.js")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(body_bytes(resp).await.to_vec()).unwrap();
    assert!(body.contains("fetch(\"/todos\")"));
}

// --- full lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    let app = test_app().await;

    // create
    let resp = send(&app, json_request("POST", "/todos", r#"{"title":"Buy milk"}"#)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Todo = body_json(resp).await;
    assert_eq!(created.title, "Buy milk");
    assert_eq!(created.status, TodoStatus::Pending);
    let id = created.id;

    // complete
    let resp = send(&app, empty_request("PUT", &format!("/todos/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.title, "Buy milk");
    assert_eq!(updated.status, TodoStatus::Completed);

    // delete
    let resp = send(&app, empty_request("DELETE", &format!("/todos/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = body_json(resp).await;
    assert_eq!(json, serde_json::json!({ "message": "Todo deleted" }));

    // list after delete — empty
    assert!(list(&app).await.is_empty());

    // delete again — 404
    let resp = send(&app, empty_request("DELETE", &format!("/todos/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // ids keep increasing after a delete
    let next = create(&app, "Next").await;
    assert!(next.id > id);
}
