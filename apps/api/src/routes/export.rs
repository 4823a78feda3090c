//! Read-only views of the current snapshot: the visual tree and exports.
//!
//! Handlers clone the snapshot `Arc` under the read lock and lay it out
//! after releasing it, on the blocking pool.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::export::{
    build_document, export, summarize_page_fill, ExportDocument, ExportFormat, PageFillSummary,
};
use crate::models::{ResumeData, TemplateKind};
use crate::render::{render, VisualTree};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TemplateQuery {
    pub template: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    pub template: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: ExportDocument,
    pub fill: PageFillSummary,
}

/// Snapshot plus the requested template, falling back to the selected one.
async fn snapshot_for(
    state: &AppState,
    template: Option<&str>,
) -> Result<(Arc<ResumeData>, TemplateKind), AppError> {
    let store = state.session.read().await;
    let template = match template {
        Some(raw) => raw.parse()?,
        None => store.selected_template(),
    };
    Ok((store.snapshot(), template))
}

async fn blocking<T, F>(job: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let value = tokio::task::spawn_blocking(job)
        .await
        .context("layout task failed")?;
    Ok(value)
}

/// GET /api/v1/preview?template=
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(query): Query<TemplateQuery>,
) -> Result<Json<VisualTree>, AppError> {
    let (snapshot, template) = snapshot_for(&state, query.template.as_deref()).await?;
    Ok(Json(render(&snapshot, template)))
}

/// GET /api/v1/export/document?template=
pub async fn handle_export_document(
    State(state): State<AppState>,
    Query(query): Query<TemplateQuery>,
) -> Result<Json<DocumentResponse>, AppError> {
    let (snapshot, template) = snapshot_for(&state, query.template.as_deref()).await?;
    let response = blocking(move || {
        let document = build_document(&snapshot, template);
        let fill = summarize_page_fill(&document);
        DocumentResponse { document, fill }
    })
    .await?;
    Ok(Json(response))
}

/// GET /api/v1/export?template=&format=
pub async fn handle_export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let format = match query.format.as_deref() {
        Some(raw) => raw.parse()?,
        None => ExportFormat::default(),
    };
    let (snapshot, template) = snapshot_for(&state, query.template.as_deref()).await?;
    let file = blocking(move || export(&snapshot, template, format)).await??;

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&file.file_name)),
        ],
        file.bytes,
    ))
}

/// Attachment header with an ASCII fallback name and the exact UTF-8 name.
fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let encoded: String = file_name
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || b"._-".contains(&b) {
                char::from(b).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect();
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
