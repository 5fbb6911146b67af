use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub value: String,
    pub is_completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub value: String,
    #[serde(default)]
    pub is_completed: bool,
}

/// Error body shape the client's gateway knows how to read.
#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct Deleted {
    pub message: String,
    pub todo: Todo,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Todo>>>;

/// Build the router. All routes live under the `/api` prefix, matching the
/// deployed backend.
pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    let api = Router::new()
        .route("/get-todo", get(list_todos))
        .route("/add-todo", post(add_todo))
        .route("/update-todo/{id}", post(update_todo_status))
        .route("/del-todo/{id}", post(delete_todo))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: "Todo not found".to_string(),
        }),
    )
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.values().cloned().collect())
}

async fn add_todo(State(db): State<Db>, Json(input): Json<NewTodo>) -> (StatusCode, Json<Todo>) {
    let now = Utc::now().to_rfc3339();
    let todo = Todo {
        id: Uuid::new_v4(),
        value: input.value,
        is_completed: input.is_completed,
        created_at: now.clone(),
        updated_at: now,
    };
    db.write().await.insert(todo.id, todo.clone());
    (StatusCode::CREATED, Json(todo))
}

/// Toggle the completion flag. The wire contract sends no status value, so
/// the semantics are owned here.
async fn update_todo_status(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Todo>, (StatusCode, Json<ErrorBody>)> {
    let mut todos = db.write().await;
    let todo = todos.get_mut(&id).ok_or_else(not_found)?;
    todo.is_completed = !todo.is_completed;
    todo.updated_at = Utc::now().to_rfc3339();
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Deleted>, (StatusCode, Json<ErrorBody>)> {
    let mut todos = db.write().await;
    let todo = todos.remove(&id).ok_or_else(not_found)?;
    Ok(Json(Deleted {
        message: "Todo deleted successfully".to_string(),
        todo,
    }))
}
