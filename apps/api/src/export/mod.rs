//! Document export: paginated A4 layout plus the painters that turn it into
//! a download.
//!
//! Layout is CPU-bound but small (one resume); callers on the async runtime
//! run it on a cloned snapshot outside the session lock.

pub mod document;
pub mod font_metrics;
pub mod page;
pub mod page_fill;
pub mod painter;
pub mod pdf;
pub mod wrap;

use bytes::Bytes;
use tracing::info;

use crate::models::{ResumeData, TemplateKind};

pub use document::{build_document, ExportDocument};
pub use page_fill::{summarize_page_fill, PageFillSummary, PageFillVerdict};
pub use painter::{painter_for, DocumentPainter, ExportFormat, UnknownFormat};
pub use pdf::PdfPainter;

/// A painted document ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
}

/// `{fullName}_{template}.{extension}`. The name is trimmed and each inner
/// whitespace run becomes `_`; a blank name becomes `Resume`.
pub fn export_file_name(data: &ResumeData, template: TemplateKind, extension: &str) -> String {
    let words: Vec<&str> = data.personal_info.full_name.split_whitespace().collect();
    let stem = if words.is_empty() {
        "Resume".to_string()
    } else {
        words.join("_")
    };
    format!("{stem}_{template}.{extension}")
}

/// Lays out and paints a snapshot.
pub fn export(
    data: &ResumeData,
    template: TemplateKind,
    format: ExportFormat,
) -> anyhow::Result<ExportFile> {
    let document = build_document(data, template);
    let painter = painter_for(format);
    let bytes = painter.paint(&document)?;
    let file_name = export_file_name(data, template, format.extension());

    info!(
        template = %template,
        format = %format,
        pages = document.pages.len(),
        bytes = bytes.len(),
        file_name = %file_name,
        "Exported resume"
    );

    Ok(ExportFile {
        file_name,
        content_type: painter.content_type(),
        bytes,
    })
}
