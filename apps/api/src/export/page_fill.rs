//! Page fill summary for an export document.
//!
//! Flags a resume that spills only a few lines onto an extra page so the
//! form can suggest trimming it back.

use serde::Serialize;

use crate::export::document::ExportDocument;
use crate::export::page::page_config;

/// A last page filled below this fraction counts as sparse.
pub const SPARSE_LAST_PAGE_FILL: f32 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageFillVerdict {
    /// Everything fits on one page.
    SinglePage,
    /// Several pages, the last one reasonably used.
    Balanced,
    /// Several pages, the last one nearly empty.
    SparseLastPage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFillSummary {
    pub page_count: usize,
    /// Fraction of the last page's usable height taken by content, 0.0..=1.0.
    pub last_page_fill: f32,
    pub verdict: PageFillVerdict,
}

/// Summarizes how the document's content is spread over its pages.
pub fn summarize_page_fill(document: &ExportDocument) -> PageFillSummary {
    let config = page_config(document.template);
    let page_count = document.pages.len().max(1);

    let last_page_fill = document
        .pages
        .last()
        .and_then(|page| page.content_bottom_pt())
        .map(|bottom| ((bottom - config.content_top()) / config.usable_height()).clamp(0.0, 1.0))
        .unwrap_or(0.0);

    let verdict = if page_count == 1 {
        PageFillVerdict::SinglePage
    } else if last_page_fill < SPARSE_LAST_PAGE_FILL {
        PageFillVerdict::SparseLastPage
    } else {
        PageFillVerdict::Balanced
    };

    PageFillSummary {
        page_count,
        last_page_fill,
        verdict,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
