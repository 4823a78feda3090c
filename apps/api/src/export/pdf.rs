//! PDF output set in the standard Type 1 fonts the layout was measured with.
//!
//! Every laid-out page becomes one PDF page. Positions are copied from the
//! `ExportDocument` as-is; only the y axis flips, since PDF measures from the
//! bottom edge.

use anyhow::Context;
use bytes::Bytes;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

use crate::export::document::{DocumentPage, ExportDocument, PlacedLine};
use crate::export::font_metrics::FontFamily;
use crate::export::painter::{DocumentPainter, ExportFormat};

const REGULAR: &str = "F1";
const BOLD: &str = "F2";

pub struct PdfPainter;

impl DocumentPainter for PdfPainter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn paint(&self, document: &ExportDocument) -> anyhow::Result<Bytes> {
        let mut pdf = Document::with_version("1.5");
        let pages_id = pdf.new_object_id();

        let (regular, bold) = base_fonts(document.font);
        let regular_id = pdf.add_object(font_dictionary(regular));
        let bold_id = pdf.add_object(font_dictionary(bold));
        let resources_id = pdf.add_object(dictionary! {
            "Font" => dictionary! {
                REGULAR => regular_id,
                BOLD => bold_id,
            },
        });

        let page_height = document.page_size.height_pt;
        let mut kids: Vec<Object> = Vec::with_capacity(document.pages.len());
        for page in &document.pages {
            let content = page_content(page, page_height)
                .encode()
                .with_context(|| format!("encoding content of page {}", page.number))?;
            let content_id = pdf.add_object(Stream::new(dictionary! {}, content));
            let page_id: ObjectId = pdf.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let media_box: Vec<Object> = vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(document.page_size.width_pt),
            Object::Real(page_height),
        ];
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        };
        pdf.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        pdf.trailer.set("Root", catalog_id);
        pdf.compress();

        let mut out = Vec::new();
        pdf.save_to(&mut out).context("writing PDF document")?;
        Ok(Bytes::from(out))
    }
}

fn base_fonts(font: FontFamily) -> (&'static str, &'static str) {
    match font {
        FontFamily::Sans => ("Helvetica", "Helvetica-Bold"),
        FontFamily::Serif => ("Times-Roman", "Times-Bold"),
    }
}

fn font_dictionary(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn page_content(page: &DocumentPage, page_height: f32) -> Content {
    let mut operations = Vec::new();
    for line in &page.lines {
        let baseline = page_height - line.y_pt - line.size_pt;
        if let Some(marker) = line.bullet {
            let x = line.x_pt - line.indent_pt;
            show_text(&mut operations, REGULAR, line.size_pt, x, baseline, &marker.to_string());
        }
        if !line.text.is_empty() {
            let font = line_font(line);
            show_text(&mut operations, font, line.size_pt, line.x_pt, baseline, &line.text);
        }
        if let Some(aside) = &line.aside {
            show_text(&mut operations, REGULAR, line.size_pt, aside.x_pt, baseline, &aside.text);
        }
    }
    Content { operations }
}

fn line_font(line: &PlacedLine) -> &'static str {
    if line.style.is_bold() {
        BOLD
    } else {
        REGULAR
    }
}

fn show_text(operations: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, text: &str) {
    operations.extend([
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![font.into(), size.into()]),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new("Tj", vec![Object::string_literal(win_ansi(text))]),
        Operation::new("ET", vec![]),
    ]);
}

/// Encodes text for the WinAnsi base fonts. Characters outside the encoding
/// print as `?`.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '€' => 0x80,
            _ => b'?',
        })
        .collect()
}
