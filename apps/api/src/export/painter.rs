//! Turns an `ExportDocument` into downloadable bytes.
//!
//! Painters only see the laid-out document, so a new output format never
//! touches the store or the renderer.

use std::fmt;
use std::str::FromStr;

use anyhow::Context;
use bytes::Bytes;
use serde::Serialize;

use crate::export::document::{ColumnSlot, ExportDocument, PlacedLine, TextStyle};
use crate::export::pdf::PdfPainter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Txt,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Pdf, ExportFormat::Txt, ExportFormat::Json];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown export format '{0}' (expected pdf, txt or json)")]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "txt" | "text" => Ok(ExportFormat::Txt),
            "json" => Ok(ExportFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

pub trait DocumentPainter: Send + Sync {
    fn format(&self) -> ExportFormat;

    fn content_type(&self) -> &'static str;

    fn paint(&self, document: &ExportDocument) -> anyhow::Result<Bytes>;
}

pub fn painter_for(format: ExportFormat) -> &'static dyn DocumentPainter {
    match format {
        ExportFormat::Pdf => &PdfPainter,
        ExportFormat::Txt => &TextPainter,
        ExportFormat::Json => &JsonPainter,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Plain text
// ────────────────────────────────────────────────────────────────────────────

/// Plain text in reading order: full-width lines, then main, then side.
///
/// Pages are separated by a form feed and end with a `-- page N of M --`
/// footer.
pub struct TextPainter;

/// Separates a line's text from its right-aligned aside.
const ASIDE_SEPARATOR: &str = "  |  ";

impl DocumentPainter for TextPainter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Txt
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn paint(&self, document: &ExportDocument) -> anyhow::Result<Bytes> {
        let total = document.pages.len();
        let mut out = String::new();

        for (index, page) in document.pages.iter().enumerate() {
            if index > 0 {
                out.push('\u{000C}');
            }
            let page_start = out.len();
            for column in [ColumnSlot::Full, ColumnSlot::Main, ColumnSlot::Side] {
                for line in page.lines.iter().filter(|l| l.column == column) {
                    if line.style == TextStyle::SectionTitle && out.len() > page_start {
                        out.push('\n');
                    }
                    out.push_str(&text_line(line));
                    out.push('\n');
                }
            }
            out.push_str(&format!("\n-- page {} of {} --\n", page.number, total));
        }
        Ok(Bytes::from(out))
    }
}

fn text_line(line: &PlacedLine) -> String {
    let mut text = match line.bullet {
        Some(marker) => format!("{marker} {}", line.text),
        // Wrapped bullet text keeps the indent of its first line.
        None if line.indent_pt > 0.0 => format!("  {}", line.text),
        None => line.text.clone(),
    };
    if let Some(aside) = &line.aside {
        if !text.is_empty() {
            text.push_str(ASIDE_SEPARATOR);
        }
        text.push_str(&aside.text);
    }
    text
}

// ────────────────────────────────────────────────────────────────────────────
// JSON
// ────────────────────────────────────────────────────────────────────────────

/// The laid-out document itself, for clients that draw their own pages.
pub struct JsonPainter;

impl DocumentPainter for JsonPainter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn paint(&self, document: &ExportDocument) -> anyhow::Result<Bytes> {
        let json = serde_json::to_vec_pretty(document).context("serializing export document")?;
        Ok(Bytes::from(json))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::document::build_document;
    use crate::models::{ItemId, NewExperience, ResumeData, TemplateKind};

    fn acme(extra_entries: usize) -> ResumeData {
        let mut data = ResumeData::default();
        data.personal_info.full_name = "Ada Lovelace".to_string();
        data.personal_info.email = "ada@example.com".to_string();
        data.personal_info.phone = "555-0100".to_string();
        for i in 0..=extra_entries {
            data.experience.push(
                NewExperience {
                    company: "Acme".to_string(),
                    position: "Engineer".to_string(),
                    start_date: "Jan 2020".to_string(),
                    end_date: "Present".to_string(),
                    location: None,
                    description: "• Did X\nDid Y".to_string(),
                }
                .with_id(ItemId::new(format!("e{i}"))),
            );
        }
        data
    }

    fn paint_text(data: &ResumeData, kind: TemplateKind) -> String {
        let bytes = TextPainter
            .paint(&build_document(data, kind))
            .expect("text painting never fails");
        String::from_utf8(bytes.to_vec()).expect("utf-8")
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
        assert_eq!(" JSON ".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!("docx".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::default(), ExportFormat::Pdf);
    }

    #[test]
    fn test_painter_for_matches_format() {
        for format in ExportFormat::ALL {
            assert_eq!(painter_for(format).format(), format);
        }
        assert_eq!(painter_for(ExportFormat::Json).content_type(), "application/json");
        assert_eq!(painter_for(ExportFormat::Pdf).content_type(), "application/pdf");
    }

    #[test]
    fn test_text_painter_reading_order() {
        let text = paint_text(&acme(0), TemplateKind::Modern);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Ada Lovelace");
        assert_eq!(lines[1], "ada@example.com | 555-0100");
        assert!(lines.contains(&"Professional Experience"));
        assert!(lines.contains(&"Engineer  |  Jan 2020 - Present"));
        assert!(lines.contains(&"• Did X"));
        assert!(lines.contains(&"Did Y"));
        assert!(text.ends_with("-- page 1 of 1 --\n"));
        assert!(!text.contains('\u{000C}'), "single page has no form feed");
    }

    #[test]
    fn test_text_painter_separates_pages() {
        let data = acme(60);
        let document = build_document(&data, TemplateKind::Classic);
        let pages = document.pages.len();
        assert!(pages > 1);

        let text = paint_text(&data, TemplateKind::Classic);
        assert_eq!(text.matches('\u{000C}').count(), pages - 1);
        assert!(text.contains(&format!("-- page {pages} of {pages} --")));
    }

    #[test]
    fn test_json_painter_emits_document() {
        let document = build_document(&acme(0), TemplateKind::Creative);
        let bytes = JsonPainter.paint(&document).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["template"], "creative");
        assert_eq!(value["font"], "sans");
        assert_eq!(value["pages"][0]["number"], 1);
        assert!(value["pageSize"]["widthPt"].as_f64().unwrap() > 595.0);
    }
}
