use crate::errors::AppError;
use crate::models::{ApiResponse, DsaSummary, HabitSummary, LogTotals, Profile, ProfileQuery};
use crate::state::AppState;
use crate::stats::{build_dsa_summary, build_habit_summary, build_log_totals};
use crate::extract::{Json, Path, Query};
use axum::extract::State;

pub async fn habits(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ApiResponse<HabitSummary>>, AppError> {
    let data = state.data.lock().await;
    let habits: Vec<_> = data
        .habits
        .iter()
        .filter(|habit| habit.profile == query.profile)
        .cloned()
        .collect();

    Ok(Json(ApiResponse::ok(build_habit_summary(
        &habits,
        &data.habit_entries,
    ))))
}

pub async fn daily_logs(
    State(state): State<AppState>,
    Path(profile): Path<Profile>,
) -> Result<Json<ApiResponse<LogTotals>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(ApiResponse::ok(build_log_totals(
        profile,
        &data.daily_logs,
    ))))
}

pub async fn dsa(State(state): State<AppState>) -> Result<Json<ApiResponse<DsaSummary>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(ApiResponse::ok(build_dsa_summary(&data.a2z_progress))))
}
