use crate::errors::AppError;
use crate::handlers::normalize_notes;
use crate::models::{
    new_id, ApiResponse, DailyLog, IncrementLog, LogPlatform, NewPiyushLog, NewShrutiLog,
    PiyushDailyLog, Profile, ShrutiDailyLog,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::extract::{Json, Path};
use axum::extract::State;

pub async fn list(
    State(state): State<AppState>,
    Path(profile): Path<Profile>,
) -> Result<Json<ApiResponse<Vec<DailyLog>>>, AppError> {
    let data = state.data.lock().await;
    let mut logs: Vec<DailyLog> = data
        .daily_logs
        .iter()
        .filter(|log| log.profile() == profile)
        .cloned()
        .collect();
    logs.sort_by(|a, b| b.date().cmp(&a.date()));

    Ok(Json(ApiResponse::ok(logs)))
}

/// The request body shape depends on the path profile, so the payload is
/// decoded explicitly after branching instead of via one extractor type.
pub async fn create(
    State(state): State<AppState>,
    Path(profile): Path<Profile>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<DailyLog>>, AppError> {
    let log = match profile {
        Profile::Piyush => {
            let payload: NewPiyushLog = serde_json::from_value(body)
                .map_err(|err| AppError::bad_request(err.to_string()))?;
            let mut log = PiyushDailyLog {
                id: new_id(),
                date: payload.date,
                striver: payload.striver,
                leetcode: payload.leetcode,
                codeforces: payload.codeforces,
                codechef: payload.codechef,
                others: payload.others,
                total: 0,
                notes: normalize_notes(payload.notes),
            };
            log.total = log.platform_sum();
            DailyLog::Piyush(log)
        }
        Profile::Shruti => {
            let payload: NewShrutiLog = serde_json::from_value(body)
                .map_err(|err| AppError::bad_request(err.to_string()))?;
            DailyLog::Shruti(ShrutiDailyLog {
                id: new_id(),
                date: payload.date,
                python_questions: payload.python_questions,
                sql_questions: payload.sql_questions,
                notes: normalize_notes(payload.notes),
            })
        }
    };

    let mut data = state.data.lock().await;
    data.daily_logs.push(log.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(log)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path((profile, id)): Path<(Profile, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let before = data.daily_logs.len();
    data.daily_logs
        .retain(|log| !(log.profile() == profile && log.id() == id));
    if data.daily_logs.len() != before {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(ApiResponse::success()))
}

/// Bump a single platform counter on a piyush log; the stored total is
/// recomputed here and returned with the record.
pub async fn increment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<IncrementLog>,
) -> Result<Json<ApiResponse<DailyLog>>, AppError> {
    let mut data = state.data.lock().await;
    let log = data
        .daily_logs
        .iter_mut()
        .find_map(|log| match log {
            DailyLog::Piyush(inner) if inner.id == id => Some(inner),
            _ => None,
        })
        .ok_or_else(|| AppError::not_found("daily log not found"))?;

    match payload.platform {
        LogPlatform::Striver => log.striver += 1,
        LogPlatform::Leetcode => log.leetcode += 1,
        LogPlatform::Codeforces => log.codeforces += 1,
        LogPlatform::Codechef => log.codechef += 1,
        LogPlatform::Others => log.others += 1,
    }
    log.total = log.platform_sum();

    let updated = DailyLog::Piyush(log.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(updated)))
}
