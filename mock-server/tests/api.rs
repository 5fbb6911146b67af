use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Deleted, ErrorBody, Todo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/get-todo")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

// --- add ---

#[tokio::test]
async fn add_todo_returns_201_with_timestamps() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/api/add-todo", r#"{"value":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.value, "Buy milk");
    assert!(!todo.is_completed);
    assert_eq!(todo.created_at, todo.updated_at);
}

#[tokio::test]
async fn add_todo_with_is_completed_true() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/add-todo",
            r#"{"value":"Already done","isCompleted":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert!(todo.is_completed);
}

#[tokio::test]
async fn add_todo_missing_value_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/api/add-todo", r#"{"isCompleted":true}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- update status ---

#[tokio::test]
async fn update_todo_not_found_carries_message() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/update-todo/00000000-0000-0000-0000-000000000000",
            "",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.message, "Todo not found");
}

#[tokio::test]
async fn update_todo_bad_id_returns_400() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/api/update-todo/not-a-uuid", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_todo_not_found_carries_message() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/del-todo/00000000-0000-0000-0000-000000000000",
            "",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.message, "Todo not found");
}

// --- full lifecycle ---

#[tokio::test]
async fn lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // add
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/add-todo", r#"{"value":"Walk dog"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Todo = body_json(resp).await;
    assert_eq!(created.value, "Walk dog");
    assert!(!created.is_completed);
    let id = created.id;

    // list — should contain the one todo
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri("/api/get-todo")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, id);

    // update — toggles to completed, refreshes updatedAt
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", &format!("/api/update-todo/{id}"), ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert!(updated.is_completed);
    assert_eq!(updated.created_at, created.created_at);

    // update again — toggles back
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", &format!("/api/update-todo/{id}"), ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert!(!updated.is_completed);

    // delete — returns confirmation with the removed todo
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", &format!("/api/del-todo/{id}"), ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: Deleted = body_json(resp).await;
    assert_eq!(deleted.message, "Todo deleted successfully");
    assert_eq!(deleted.todo.id, id);

    // delete again — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", &format!("/api/del-todo/{id}"), ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list — empty again
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri("/api/get-todo")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}
