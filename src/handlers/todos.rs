use crate::errors::AppError;
use crate::handlers::require_text;
use crate::models::{new_id, ApiResponse, NewTodo, ProfileQuery, Todo, UpdateTodo};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::extract::{Json, Path, Query};
use axum::extract::State;
use chrono::Utc;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ApiResponse<Vec<Todo>>>, AppError> {
    let data = state.data.lock().await;
    let mut todos: Vec<Todo> = data
        .todos
        .iter()
        .filter(|todo| todo.profile == query.profile)
        .cloned()
        .collect();
    todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(Json(ApiResponse::ok(todos)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewTodo>,
) -> Result<Json<ApiResponse<Todo>>, AppError> {
    let content = require_text(&payload.content, "content")?;
    let todo = Todo {
        id: new_id(),
        profile: payload.profile,
        content,
        completed: false,
        created_at: Utc::now(),
    };

    let mut data = state.data.lock().await;
    data.todos.push(todo.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(todo)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateTodo>,
) -> Result<Json<ApiResponse<Todo>>, AppError> {
    let mut data = state.data.lock().await;
    let todo = data
        .todos
        .iter_mut()
        .find(|todo| todo.id == id)
        .ok_or_else(|| AppError::not_found("todo not found"))?;

    if let Some(content) = patch.content {
        todo.content = require_text(&content, "content")?;
    }
    if let Some(completed) = patch.completed {
        todo.completed = completed;
    }
    let updated = todo.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let before = data.todos.len();
    data.todos.retain(|todo| todo.id != id);
    if data.todos.len() != before {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(ApiResponse::success()))
}
