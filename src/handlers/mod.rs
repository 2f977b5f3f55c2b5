pub mod cases;
pub mod contests;
pub mod courses;
pub mod daily_logs;
pub mod dsa;
pub mod habits;
pub mod portfolio;
pub mod summary;
pub mod todos;

use crate::errors::AppError;
use crate::ui::render_index;
use axum::response::Html;

pub async fn index() -> Html<String> {
    Html(render_index())
}

/// Required text fields must be non-blank; returns the trimmed value.
pub(crate) fn require_text(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

/// Free-text notes collapse to None when blank.
pub(crate) fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
