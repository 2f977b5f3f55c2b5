use crate::errors::AppError;
use crate::handlers::require_text;
use crate::models::{
    new_id, ApiResponse, EntryRangeQuery, Habit, HabitEntry, NewHabit, NewHabitEntry,
    ProfileQuery, ToggleHabitEntry, UpdateHabitEntry,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::extract::{Json, Path, Query};
use axum::extract::State;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ApiResponse<Vec<Habit>>>, AppError> {
    let data = state.data.lock().await;
    let mut habits: Vec<Habit> = data
        .habits
        .iter()
        .filter(|habit| habit.profile == query.profile)
        .cloned()
        .collect();
    habits.sort_by_key(|habit| habit.sort_order);

    Ok(Json(ApiResponse::ok(habits)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewHabit>,
) -> Result<Json<ApiResponse<Habit>>, AppError> {
    let name = require_text(&payload.name, "name")?;
    let habit = Habit {
        id: new_id(),
        profile: payload.profile,
        name,
        sort_order: payload.sort_order,
    };

    let mut data = state.data.lock().await;
    data.habits.push(habit.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(habit)))
}

/// Deleting a habit discards its tracking entries with it.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let before = data.habits.len();
    data.habits.retain(|habit| habit.id != id);
    if data.habits.len() != before {
        data.habit_entries.retain(|entry| entry.habit_id != id);
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(ApiResponse::success()))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<EntryRangeQuery>,
) -> Result<Json<ApiResponse<Vec<HabitEntry>>>, AppError> {
    let data = state.data.lock().await;
    let entries: Vec<HabitEntry> = data
        .habit_entries
        .iter()
        .filter(|entry| {
            entry.date >= query.from
                && entry.date <= query.to
                && data
                    .habits
                    .iter()
                    .any(|habit| habit.id == entry.habit_id && habit.profile == query.profile)
        })
        .cloned()
        .collect();

    Ok(Json(ApiResponse::ok(entries)))
}

/// Create-or-set: the sparse join holds at most one entry per (habit, date),
/// so posting an existing pair overwrites its completed flag.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewHabitEntry>,
) -> Result<Json<ApiResponse<HabitEntry>>, AppError> {
    let mut data = state.data.lock().await;
    if !data.habits.iter().any(|habit| habit.id == payload.habit_id) {
        return Err(AppError::not_found("habit not found"));
    }

    let entry = match data
        .habit_entries
        .iter_mut()
        .find(|entry| entry.habit_id == payload.habit_id && entry.date == payload.date)
    {
        Some(existing) => {
            existing.completed = payload.completed;
            existing.clone()
        }
        None => {
            let entry = HabitEntry {
                id: new_id(),
                habit_id: payload.habit_id,
                date: payload.date,
                completed: payload.completed,
            };
            data.habit_entries.push(entry.clone());
            entry
        }
    };
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(entry)))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateHabitEntry>,
) -> Result<Json<ApiResponse<HabitEntry>>, AppError> {
    let mut data = state.data.lock().await;
    let entry = data
        .habit_entries
        .iter_mut()
        .find(|entry| entry.id == id)
        .ok_or_else(|| AppError::not_found("habit entry not found"))?;

    entry.completed = patch.completed;
    let updated = entry.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(updated)))
}

/// Flip the (habit, date) cell, creating it as completed when absent.
pub async fn toggle_entry(
    State(state): State<AppState>,
    Json(payload): Json<ToggleHabitEntry>,
) -> Result<Json<ApiResponse<HabitEntry>>, AppError> {
    let mut data = state.data.lock().await;
    if !data.habits.iter().any(|habit| habit.id == payload.habit_id) {
        return Err(AppError::not_found("habit not found"));
    }

    let entry = match data
        .habit_entries
        .iter_mut()
        .find(|entry| entry.habit_id == payload.habit_id && entry.date == payload.date)
    {
        Some(existing) => {
            existing.completed = !existing.completed;
            existing.clone()
        }
        None => {
            let entry = HabitEntry {
                id: new_id(),
                habit_id: payload.habit_id,
                date: payload.date,
                completed: true,
            };
            data.habit_entries.push(entry.clone());
            entry
        }
    };
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(entry)))
}
