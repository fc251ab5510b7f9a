//! Todo endpoints
//!
//! # Endpoints
//!
//! - `GET /api/todos` - List todos in creation order
//! - `GET /api/todos/:id` - Fetch one todo
//! - `POST /api/todos` - Create a todo
//! - `PUT /api/todos/:id` - Replace task and completion flag
//! - `DELETE /api/todos/:id` - Delete a todo
//!
//! Request bodies are validated by [`ValidatedJson`] before the handler
//! runs. Missing todos are reported by the service as `None`/`false` and
//! turned into 404 here.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{TodoId, ValidatedJson},
};
use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_shared::models::todo::{Todo, TodoInput};
use tracing::warn;
use validator::Validate;

const NOT_FOUND_MESSAGE: &str = "Todo not found";

/// Create / update request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TodoRequest {
    /// Task description
    #[validate(length(min = 1, message = "Task must not be empty"))]
    pub task: String,

    /// Completion flag, `false` when omitted or null
    #[serde(default)]
    pub completed: Option<bool>,
}

impl From<TodoRequest> for TodoInput {
    fn from(req: TodoRequest) -> Self {
        TodoInput {
            task: req.task,
            completed: req.completed,
        }
    }
}

/// Todo as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: i64,
    pub task: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        TodoResponse {
            id: todo.id,
            task: todo.task,
            completed: todo.completed,
            created_at: todo.created_at,
        }
    }
}

fn not_found(operation: &str, id: i64) -> ApiError {
    warn!(id, operation, "Todo not found");
    ApiError::NotFound(NOT_FOUND_MESSAGE.to_string())
}

/// List todos
///
/// # Response
///
/// ```json
/// [
///   {"id": 1, "task": "Buy milk", "completed": false, "createdAt": "2025-01-03T12:00:00Z"}
/// ]
/// ```
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<TodoResponse>>> {
    let todos = state.todos.get_all_todos().await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Fetch one todo
///
/// # Errors
///
/// - `404 Not Found`: No todo with this id
pub async fn get_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> ApiResult<Json<TodoResponse>> {
    let todo = state
        .todos
        .get_todo_by_id(id)
        .await?
        .ok_or_else(|| not_found("get", id))?;

    Ok(Json(todo.into()))
}

/// Create a todo
///
/// # Endpoint
///
/// ```text
/// POST /api/todos
/// Content-Type: application/json
///
/// {"task": "Buy milk", "completed": false}
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: `task` missing, empty or not a string
pub async fn create_todo(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<TodoRequest>,
) -> ApiResult<(StatusCode, Json<TodoResponse>)> {
    let todo = state.todos.create_todo(req.into()).await?;

    Ok((StatusCode::CREATED, Json(todo.into())))
}

/// Replace task and completion flag
///
/// # Errors
///
/// - `404 Not Found`: No todo with this id
/// - `422 Unprocessable Entity`: Invalid body (checked before the lookup)
pub async fn update_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
    ValidatedJson(req): ValidatedJson<TodoRequest>,
) -> ApiResult<Json<TodoResponse>> {
    let todo = state
        .todos
        .update_todo(id, req.into())
        .await?
        .ok_or_else(|| not_found("update", id))?;

    Ok(Json(todo.into()))
}

/// Delete a todo
///
/// # Errors
///
/// - `404 Not Found`: No todo with this id (including already deleted)
pub async fn delete_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> ApiResult<StatusCode> {
    if !state.todos.delete_todo(id).await? {
        return Err(not_found("delete", id));
    }

    Ok(StatusCode::NO_CONTENT)
}
