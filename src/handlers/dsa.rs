use crate::errors::AppError;
use crate::handlers::require_text;
use crate::models::{
    new_id, A2zProgress, ApiResponse, Blind75Question, NewBlind75, UpdateBlind75,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::extract::{Json, Path};
use axum::extract::State;

pub async fn get_a2z(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<A2zProgress>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(ApiResponse::ok(data.a2z_progress.clone())))
}

/// Full six-counter replace; bounds are enforced by the controls, not here.
pub async fn put_a2z(
    State(state): State<AppState>,
    Json(payload): Json<A2zProgress>,
) -> Result<Json<ApiResponse<A2zProgress>>, AppError> {
    let mut data = state.data.lock().await;
    data.a2z_progress = payload;
    let updated = data.a2z_progress.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn list_blind75(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Blind75Question>>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(ApiResponse::ok(data.blind75.clone())))
}

pub async fn create_blind75(
    State(state): State<AppState>,
    Json(payload): Json<NewBlind75>,
) -> Result<Json<ApiResponse<Blind75Question>>, AppError> {
    let question = Blind75Question {
        id: new_id(),
        question_name: require_text(&payload.question_name, "question_name")?,
        solution_link: payload.solution_link,
        completed: false,
    };

    let mut data = state.data.lock().await;
    data.blind75.push(question.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(question)))
}

pub async fn update_blind75(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateBlind75>,
) -> Result<Json<ApiResponse<Blind75Question>>, AppError> {
    let mut data = state.data.lock().await;
    let question = data
        .blind75
        .iter_mut()
        .find(|question| question.id == id)
        .ok_or_else(|| AppError::not_found("question not found"))?;

    if let Some(completed) = patch.completed {
        question.completed = completed;
    }
    if let Some(solution_link) = patch.solution_link {
        question.solution_link = Some(solution_link);
    }
    let updated = question.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(updated)))
}
