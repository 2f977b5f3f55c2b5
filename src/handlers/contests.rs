use crate::errors::AppError;
use crate::handlers::{normalize_notes, require_text};
use crate::models::{
    new_id, ApiResponse, ContestLog, CpRating, NewContestLog, UpdateContestLog, UpdateRating,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::extract::{Json, Path};
use axum::extract::State;
use chrono::Local;

pub async fn list_ratings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CpRating>>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(ApiResponse::ok(data.cp_ratings.clone())))
}

/// Upsert by platform name; platforms are matched case-insensitively and
/// stored lowercased.
pub async fn upsert_rating(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Json(payload): Json<UpdateRating>,
) -> Result<Json<ApiResponse<CpRating>>, AppError> {
    let platform = require_text(&platform, "platform")?.to_lowercase();
    let today = Local::now().date_naive();

    let mut data = state.data.lock().await;
    let rating = match data
        .cp_ratings
        .iter_mut()
        .find(|rating| rating.platform == platform)
    {
        Some(existing) => {
            existing.rating = payload.rating;
            existing.updated_at = today;
            existing.clone()
        }
        None => {
            let rating = CpRating {
                id: new_id(),
                platform,
                rating: payload.rating,
                updated_at: today,
            };
            data.cp_ratings.push(rating.clone());
            rating
        }
    };
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(rating)))
}

pub async fn list_logs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ContestLog>>>, AppError> {
    let data = state.data.lock().await;
    let mut logs = data.contest_logs.clone();
    logs.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(Json(ApiResponse::ok(logs)))
}

pub async fn create_log(
    State(state): State<AppState>,
    Json(payload): Json<NewContestLog>,
) -> Result<Json<ApiResponse<ContestLog>>, AppError> {
    let log = ContestLog {
        id: new_id(),
        platform: require_text(&payload.platform, "platform")?,
        contest_name: require_text(&payload.contest_name, "contest_name")?,
        date: payload.date,
        problems_solved: payload.problems_solved,
        total_problems: payload.total_problems,
        notes: normalize_notes(payload.notes),
    };

    let mut data = state.data.lock().await;
    data.contest_logs.push(log.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(log)))
}

pub async fn update_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateContestLog>,
) -> Result<Json<ApiResponse<ContestLog>>, AppError> {
    let mut data = state.data.lock().await;
    let log = data
        .contest_logs
        .iter_mut()
        .find(|log| log.id == id)
        .ok_or_else(|| AppError::not_found("contest log not found"))?;

    if let Some(platform) = patch.platform {
        log.platform = require_text(&platform, "platform")?;
    }
    if let Some(contest_name) = patch.contest_name {
        log.contest_name = require_text(&contest_name, "contest_name")?;
    }
    if let Some(date) = patch.date {
        log.date = date;
    }
    if let Some(problems_solved) = patch.problems_solved {
        log.problems_solved = problems_solved;
    }
    if let Some(total_problems) = patch.total_problems {
        log.total_problems = total_problems;
    }
    if let Some(notes) = patch.notes {
        log.notes = normalize_notes(Some(notes));
    }
    let updated = log.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn remove_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let before = data.contest_logs.len();
    data.contest_logs.retain(|log| log.id != id);
    if data.contest_logs.len() != before {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(ApiResponse::success()))
}
