use crate::errors::AppError;
use crate::handlers::{normalize_notes, require_text};
use crate::models::{
    new_id, ApiResponse, CaseCompetition, CaseStudy, Guesstimate, NewCaseCompetition,
    NewCaseStudy, NewGuesstimate, UpdateCaseCompetition, UpdateCaseStudy, UpdateGuesstimate,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::extract::{Json, Path};
use axum::extract::State;

pub async fn list_case_studies(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CaseStudy>>>, AppError> {
    let data = state.data.lock().await;
    let mut studies = data.case_studies.clone();
    studies.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(Json(ApiResponse::ok(studies)))
}

pub async fn create_case_study(
    State(state): State<AppState>,
    Json(payload): Json<NewCaseStudy>,
) -> Result<Json<ApiResponse<CaseStudy>>, AppError> {
    let study = CaseStudy {
        id: new_id(),
        title: require_text(&payload.title, "title")?,
        notes: payload.notes.trim().to_string(),
        date: payload.date,
    };

    let mut data = state.data.lock().await;
    data.case_studies.push(study.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(study)))
}

pub async fn update_case_study(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateCaseStudy>,
) -> Result<Json<ApiResponse<CaseStudy>>, AppError> {
    let mut data = state.data.lock().await;
    let study = data
        .case_studies
        .iter_mut()
        .find(|study| study.id == id)
        .ok_or_else(|| AppError::not_found("case study not found"))?;

    if let Some(title) = patch.title {
        study.title = require_text(&title, "title")?;
    }
    if let Some(notes) = patch.notes {
        study.notes = notes.trim().to_string();
    }
    if let Some(date) = patch.date {
        study.date = date;
    }
    let updated = study.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn remove_case_study(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let before = data.case_studies.len();
    data.case_studies.retain(|study| study.id != id);
    if data.case_studies.len() != before {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(ApiResponse::success()))
}

pub async fn list_guesstimates(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Guesstimate>>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(ApiResponse::ok(data.guesstimates.clone())))
}

pub async fn create_guesstimate(
    State(state): State<AppState>,
    Json(payload): Json<NewGuesstimate>,
) -> Result<Json<ApiResponse<Guesstimate>>, AppError> {
    let guesstimate = Guesstimate {
        id: new_id(),
        topic: require_text(&payload.topic, "topic")?,
        learnings: normalize_notes(payload.learnings),
        notes: normalize_notes(payload.notes),
    };

    let mut data = state.data.lock().await;
    data.guesstimates.push(guesstimate.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(guesstimate)))
}

pub async fn update_guesstimate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateGuesstimate>,
) -> Result<Json<ApiResponse<Guesstimate>>, AppError> {
    let mut data = state.data.lock().await;
    let guesstimate = data
        .guesstimates
        .iter_mut()
        .find(|guesstimate| guesstimate.id == id)
        .ok_or_else(|| AppError::not_found("guesstimate not found"))?;

    if let Some(topic) = patch.topic {
        guesstimate.topic = require_text(&topic, "topic")?;
    }
    if let Some(learnings) = patch.learnings {
        guesstimate.learnings = normalize_notes(Some(learnings));
    }
    if let Some(notes) = patch.notes {
        guesstimate.notes = normalize_notes(Some(notes));
    }
    let updated = guesstimate.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn remove_guesstimate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let before = data.guesstimates.len();
    data.guesstimates.retain(|guesstimate| guesstimate.id != id);
    if data.guesstimates.len() != before {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(ApiResponse::success()))
}

pub async fn list_case_competitions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CaseCompetition>>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(ApiResponse::ok(data.case_competitions.clone())))
}

pub async fn create_case_competition(
    State(state): State<AppState>,
    Json(payload): Json<NewCaseCompetition>,
) -> Result<Json<ApiResponse<CaseCompetition>>, AppError> {
    let competition = CaseCompetition {
        id: new_id(),
        competition_name: require_text(&payload.competition_name, "competition_name")?,
        notes: payload.notes.trim().to_string(),
        document_url: payload.document_url,
    };

    let mut data = state.data.lock().await;
    data.case_competitions.push(competition.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(competition)))
}

pub async fn update_case_competition(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateCaseCompetition>,
) -> Result<Json<ApiResponse<CaseCompetition>>, AppError> {
    let mut data = state.data.lock().await;
    let competition = data
        .case_competitions
        .iter_mut()
        .find(|competition| competition.id == id)
        .ok_or_else(|| AppError::not_found("case competition not found"))?;

    if let Some(competition_name) = patch.competition_name {
        competition.competition_name = require_text(&competition_name, "competition_name")?;
    }
    if let Some(notes) = patch.notes {
        competition.notes = notes.trim().to_string();
    }
    if let Some(document_url) = patch.document_url {
        competition.document_url = Some(document_url);
    }
    let updated = competition.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn remove_case_competition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let before = data.case_competitions.len();
    data.case_competitions
        .retain(|competition| competition.id != id);
    if data.case_competitions.len() != before {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(ApiResponse::success()))
}
