use crate::errors::AppError;
use crate::handlers::require_text;
use crate::models::{new_id, ApiResponse, Course, NewCourse, ProfileQuery, UpdateCourse};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::extract::{Json, Path, Query};
use axum::extract::State;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ApiResponse<Vec<Course>>>, AppError> {
    let data = state.data.lock().await;
    let courses: Vec<Course> = data
        .courses
        .iter()
        .filter(|course| course.profile == query.profile)
        .cloned()
        .collect();

    Ok(Json(ApiResponse::ok(courses)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewCourse>,
) -> Result<Json<ApiResponse<Course>>, AppError> {
    let course = Course {
        id: new_id(),
        profile: payload.profile,
        course_name: require_text(&payload.course_name, "course_name")?,
        platform: require_text(&payload.platform, "platform")?,
        total_content: payload.total_content,
        completed_content: payload.completed_content,
    };

    let mut data = state.data.lock().await;
    data.courses.push(course.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(course)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateCourse>,
) -> Result<Json<ApiResponse<Course>>, AppError> {
    let mut data = state.data.lock().await;
    let course = data
        .courses
        .iter_mut()
        .find(|course| course.id == id)
        .ok_or_else(|| AppError::not_found("course not found"))?;

    if let Some(course_name) = patch.course_name {
        course.course_name = require_text(&course_name, "course_name")?;
    }
    if let Some(platform) = patch.platform {
        course.platform = require_text(&platform, "platform")?;
    }
    if let Some(total_content) = patch.total_content {
        course.total_content = total_content;
    }
    if let Some(completed_content) = patch.completed_content {
        course.completed_content = completed_content;
    }
    let updated = course.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let before = data.courses.len();
    data.courses.retain(|course| course.id != id);
    if data.courses.len() != before {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(ApiResponse::success()))
}
