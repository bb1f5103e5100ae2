//! Request handlers: typed extraction in, store call, JSON out.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use todo_core::{CreateTodo, Todo, UpdateTodo};

use crate::error::ApiError;
use crate::SharedStore;

/// Query parameters for the list route. A negative or non-numeric
/// `first_n` fails typed extraction and is rejected with a 400 before the
/// handler runs.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub first_n: Option<u64>,
}

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "todo service is running" }))
}

pub async fn list_todos(
    State(store): State<SharedStore>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Todo>> {
    let store = store.read().await;
    let first_n = params.first_n.map(|n| n as usize);
    Json(store.list(first_n).to_vec())
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, ApiError> {
    let store = store.read().await;
    Ok(Json(store.get(id)?.clone()))
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let mut store = store.write().await;
    let todo = store.create(input)?;
    tracing::info!(id = todo.id, name = %todo.name, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let mut store = store.write().await;
    let todo = store.update(id, input)?;
    tracing::info!(id, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, ApiError> {
    let mut store = store.write().await;
    let todo = store.delete(id)?;
    tracing::info!(id, "deleted todo");
    Ok(Json(todo))
}
