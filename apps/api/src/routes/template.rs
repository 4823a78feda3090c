use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::TemplateKind;
use crate::state::AppState;
use crate::store::SessionInfo;

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateKind,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateSelection {
    pub template: String,
}

#[derive(Debug, Serialize)]
pub struct SelectedTemplate {
    pub template: TemplateKind,
}

/// GET /api/v1/session
pub async fn handle_session(State(state): State<AppState>) -> Json<SessionInfo> {
    Json(state.session.read().await.session_info())
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(
        TemplateKind::ALL
            .into_iter()
            .map(|kind| TemplateInfo {
                id: kind,
                name: kind.display_name(),
                description: kind.description(),
            })
            .collect(),
    )
}

/// GET /api/v1/template
pub async fn handle_get_template(State(state): State<AppState>) -> Json<SelectedTemplate> {
    Json(SelectedTemplate {
        template: state.session.read().await.selected_template(),
    })
}

/// PUT /api/v1/template
pub async fn handle_set_template(
    State(state): State<AppState>,
    Json(body): Json<TemplateSelection>,
) -> Result<Json<SelectedTemplate>, AppError> {
    let template: TemplateKind = body.template.parse()?;
    state.session.write().await.set_template(template);
    Ok(Json(SelectedTemplate { template }))
}
