//! Editing handlers. Each one is a single store operation under the write
//! lock; the response is the resulting snapshot (or the created item).
//!
//! Update and remove of an unknown id answer 200 with the unchanged snapshot.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::skills::{skills_from_input, skills_to_input};
use crate::models::{
    EducationItem, EducationPatch, ExperienceItem, ExperiencePatch, ItemId, NewEducation,
    NewExperience, NewProject, PersonalInfoPatch, ProjectItem, ProjectPatch, ResumeData,
};
use crate::state::AppState;
use crate::store::ResumeStore;

fn current(store: &ResumeStore) -> Json<ResumeData> {
    Json(store.snapshot().as_ref().clone())
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeData> {
    current(&*state.session.read().await)
}

/// DELETE /api/v1/resume
pub async fn handle_reset_resume(State(state): State<AppState>) -> Json<ResumeData> {
    let mut store = state.session.write().await;
    store.reset_resume_data();
    current(&store)
}

/// PATCH /api/v1/resume/personal-info
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    Json(patch): Json<PersonalInfoPatch>,
) -> Json<ResumeData> {
    let mut store = state.session.write().await;
    store.update_personal_info(patch);
    current(&store)
}

#[derive(Debug, Deserialize)]
pub struct ObjectiveBody {
    pub objective: String,
}

/// PUT /api/v1/resume/objective
pub async fn handle_update_objective(
    State(state): State<AppState>,
    Json(body): Json<ObjectiveBody>,
) -> Json<ResumeData> {
    let mut store = state.session.write().await;
    store.update_objective(body.objective);
    current(&store)
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Json(item): Json<NewEducation>,
) -> (StatusCode, Json<EducationItem>) {
    let created = state.session.write().await.add_education(item);
    (StatusCode::CREATED, Json(created))
}

/// PATCH /api/v1/resume/education/:id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(patch): Json<EducationPatch>,
) -> Json<ResumeData> {
    let mut store = state.session.write().await;
    store.update_education(&id, patch);
    current(&store)
}

/// DELETE /api/v1/resume/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Json<ResumeData> {
    let mut store = state.session.write().await;
    store.remove_education(&id);
    current(&store)
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Json(item): Json<NewExperience>,
) -> (StatusCode, Json<ExperienceItem>) {
    let created = state.session.write().await.add_experience(item);
    (StatusCode::CREATED, Json(created))
}

/// PATCH /api/v1/resume/experience/:id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(patch): Json<ExperiencePatch>,
) -> Json<ResumeData> {
    let mut store = state.session.write().await;
    store.update_experience(&id, patch);
    current(&store)
}

/// DELETE /api/v1/resume/experience/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Json<ResumeData> {
    let mut store = state.session.write().await;
    store.remove_experience(&id);
    current(&store)
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
    Json(item): Json<NewProject>,
) -> (StatusCode, Json<ProjectItem>) {
    let created = state.session.write().await.add_project(item);
    (StatusCode::CREATED, Json(created))
}

/// PATCH /api/v1/resume/projects/:id
pub async fn handle_update_project(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(patch): Json<ProjectPatch>,
) -> Json<ResumeData> {
    let mut store = state.session.write().await;
    store.update_project(&id, patch);
    current(&store)
}

/// DELETE /api/v1/resume/projects/:id
pub async fn handle_remove_project(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Json<ResumeData> {
    let mut store = state.session.write().await;
    store.remove_project(&id);
    current(&store)
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SkillsBody {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SkillsText {
    pub text: String,
}

/// PUT /api/v1/resume/skills
pub async fn handle_update_skills(
    State(state): State<AppState>,
    Json(body): Json<SkillsBody>,
) -> Json<ResumeData> {
    let mut store = state.session.write().await;
    store.update_skills(body.skills);
    current(&store)
}

/// GET /api/v1/resume/skills/text
pub async fn handle_get_skills_text(State(state): State<AppState>) -> Json<SkillsText> {
    let snapshot = state.session.read().await.snapshot();
    Json(SkillsText {
        text: skills_to_input(&snapshot.skills),
    })
}

/// PUT /api/v1/resume/skills/text
pub async fn handle_update_skills_text(
    State(state): State<AppState>,
    Json(body): Json<SkillsText>,
) -> Json<ResumeData> {
    let mut store = state.session.write().await;
    store.update_skills(skills_from_input(&body.text));
    current(&store)
}
