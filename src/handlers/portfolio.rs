use crate::errors::AppError;
use crate::handlers::{normalize_notes, require_text};
use crate::models::{
    new_id, ApiResponse, Certificate, NewCertificate, NewProject, NewSkill, ProfileQuery,
    Project, ResumeSection, Skill, UpdateProject, UpdateResumeSection, UpdateSkill,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::extract::{Json, Path, Query};
use axum::extract::State;

pub async fn list_certificates(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ApiResponse<Vec<Certificate>>>, AppError> {
    let data = state.data.lock().await;
    let mut certificates: Vec<Certificate> = data
        .certificates
        .iter()
        .filter(|certificate| certificate.profile == query.profile)
        .cloned()
        .collect();
    certificates.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(Json(ApiResponse::ok(certificates)))
}

pub async fn create_certificate(
    State(state): State<AppState>,
    Json(payload): Json<NewCertificate>,
) -> Result<Json<ApiResponse<Certificate>>, AppError> {
    let certificate = Certificate {
        id: new_id(),
        profile: payload.profile,
        title: require_text(&payload.title, "title")?,
        issuer: require_text(&payload.issuer, "issuer")?,
        date: payload.date,
        file_url: payload.file_url,
    };

    let mut data = state.data.lock().await;
    data.certificates.push(certificate.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(certificate)))
}

pub async fn remove_certificate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let before = data.certificates.len();
    data.certificates.retain(|certificate| certificate.id != id);
    if data.certificates.len() != before {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(ApiResponse::success()))
}

pub async fn list_resume_sections(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ResumeSection>>>, AppError> {
    let data = state.data.lock().await;
    let mut sections = data.resume_sections.clone();
    sections.sort_by_key(|section| section.sort_order);

    Ok(Json(ApiResponse::ok(sections)))
}

pub async fn update_resume_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateResumeSection>,
) -> Result<Json<ApiResponse<ResumeSection>>, AppError> {
    let content = require_text(&patch.content, "content")?;

    let mut data = state.data.lock().await;
    let section = data
        .resume_sections
        .iter_mut()
        .find(|section| section.id == id)
        .ok_or_else(|| AppError::not_found("resume section not found"))?;

    section.content = content;
    let updated = section.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn list_skills(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ApiResponse<Vec<Skill>>>, AppError> {
    let data = state.data.lock().await;
    let skills: Vec<Skill> = data
        .skills
        .iter()
        .filter(|skill| skill.profile == query.profile)
        .cloned()
        .collect();

    Ok(Json(ApiResponse::ok(skills)))
}

pub async fn create_skill(
    State(state): State<AppState>,
    Json(payload): Json<NewSkill>,
) -> Result<Json<ApiResponse<Skill>>, AppError> {
    let skill = Skill {
        id: new_id(),
        profile: payload.profile,
        skill_name: require_text(&payload.skill_name, "skill_name")?,
        notes: normalize_notes(payload.notes),
    };

    let mut data = state.data.lock().await;
    data.skills.push(skill.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(skill)))
}

pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateSkill>,
) -> Result<Json<ApiResponse<Skill>>, AppError> {
    let mut data = state.data.lock().await;
    let skill = data
        .skills
        .iter_mut()
        .find(|skill| skill.id == id)
        .ok_or_else(|| AppError::not_found("skill not found"))?;

    if let Some(skill_name) = patch.skill_name {
        skill.skill_name = require_text(&skill_name, "skill_name")?;
    }
    if let Some(notes) = patch.notes {
        skill.notes = normalize_notes(Some(notes));
    }
    let updated = skill.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn remove_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let before = data.skills.len();
    data.skills.retain(|skill| skill.id != id);
    if data.skills.len() != before {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(ApiResponse::success()))
}

pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ApiResponse<Vec<Project>>>, AppError> {
    let data = state.data.lock().await;
    let projects: Vec<Project> = data
        .projects
        .iter()
        .filter(|project| project.profile == query.profile)
        .cloned()
        .collect();

    Ok(Json(ApiResponse::ok(projects)))
}

pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<NewProject>,
) -> Result<Json<ApiResponse<Project>>, AppError> {
    let project = Project {
        id: new_id(),
        profile: payload.profile,
        project_name: require_text(&payload.project_name, "project_name")?,
        description: normalize_notes(payload.description),
        notes: normalize_notes(payload.notes),
    };

    let mut data = state.data.lock().await;
    data.projects.push(project.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(project)))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateProject>,
) -> Result<Json<ApiResponse<Project>>, AppError> {
    let mut data = state.data.lock().await;
    let project = data
        .projects
        .iter_mut()
        .find(|project| project.id == id)
        .ok_or_else(|| AppError::not_found("project not found"))?;

    if let Some(project_name) = patch.project_name {
        project.project_name = require_text(&project_name, "project_name")?;
    }
    if let Some(description) = patch.description {
        project.description = normalize_notes(Some(description));
    }
    if let Some(notes) = patch.notes {
        project.notes = normalize_notes(Some(notes));
    }
    let updated = project.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn remove_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let before = data.projects.len();
    data.projects.retain(|project| project.id != id);
    if data.projects.len() != before {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(ApiResponse::success()))
}
