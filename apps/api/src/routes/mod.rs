pub mod export;
pub mod health;
pub mod resume;
pub mod template;

use axum::{
    http::Uri,
    routing::{get, patch, post, put},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session and template selection
        .route("/api/v1/session", get(template::handle_session))
        .route("/api/v1/templates", get(template::handle_list_templates))
        .route(
            "/api/v1/template",
            get(template::handle_get_template).put(template::handle_set_template),
        )
        // Resume editing
        .route(
            "/api/v1/resume",
            get(resume::handle_get_resume).delete(resume::handle_reset_resume),
        )
        .route(
            "/api/v1/resume/personal-info",
            patch(resume::handle_update_personal_info),
        )
        .route("/api/v1/resume/objective", put(resume::handle_update_objective))
        .route("/api/v1/resume/education", post(resume::handle_add_education))
        .route(
            "/api/v1/resume/education/:id",
            patch(resume::handle_update_education).delete(resume::handle_remove_education),
        )
        .route("/api/v1/resume/experience", post(resume::handle_add_experience))
        .route(
            "/api/v1/resume/experience/:id",
            patch(resume::handle_update_experience).delete(resume::handle_remove_experience),
        )
        .route("/api/v1/resume/projects", post(resume::handle_add_project))
        .route(
            "/api/v1/resume/projects/:id",
            patch(resume::handle_update_project).delete(resume::handle_remove_project),
        )
        .route("/api/v1/resume/skills", put(resume::handle_update_skills))
        .route(
            "/api/v1/resume/skills/text",
            get(resume::handle_get_skills_text).put(resume::handle_update_skills_text),
        )
        // Rendering and export
        .route("/api/v1/preview", get(export::handle_preview))
        .route("/api/v1/export/document", get(export::handle_export_document))
        .route("/api/v1/export", get(export::handle_export))
        .fallback(not_found)
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
