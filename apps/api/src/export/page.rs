//! Page geometry and per-template typography for the export document.

use serde::Serialize;

use crate::export::font_metrics::FontFamily;
use crate::models::TemplateKind;

/// ISO A4 in PostScript points.
pub const A4: PageSize = PageSize {
    width_pt: 595.28,
    height_pt: 841.89,
};

/// Space between the Creative columns.
pub const COLUMN_GUTTER_PT: f32 = 10.0;

/// Share of the content width given to the Creative main column.
pub const MAIN_COLUMN_SHARE: f32 = 0.65;

/// Minimum space between wrapped text and a right-aligned aside.
pub const ASIDE_GAP_PT: f32 = 6.0;

/// Indent of bullet text relative to its marker.
pub const BULLET_INDENT_PT: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

/// Layout parameters for one template's export pages.
///
/// All lengths are in points. Line boxes are `size * line_height` tall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub size: PageSize,
    pub font: FontFamily,
    pub margin_pt: f32,
    pub name_size_pt: f32,
    pub section_title_size_pt: f32,
    pub entry_title_size_pt: f32,
    pub body_size_pt: f32,
    pub line_height: f32,
    pub header_gap_pt: f32,
    pub section_gap_pt: f32,
    pub entry_gap_pt: f32,
}

impl PageConfig {
    pub fn content_width(&self) -> f32 {
        self.size.width_pt - 2.0 * self.margin_pt
    }

    pub fn content_top(&self) -> f32 {
        self.margin_pt
    }

    pub fn content_bottom(&self) -> f32 {
        self.size.height_pt - self.margin_pt
    }

    pub fn usable_height(&self) -> f32 {
        self.content_bottom() - self.content_top()
    }
}

/// Returns the page config for the given template.
///
/// Every template prints on A4 with 9 pt body text at 1.5 line height.
pub fn page_config(kind: TemplateKind) -> PageConfig {
    let base = PageConfig {
        size: A4,
        font: FontFamily::for_template(kind),
        margin_pt: 30.0,
        name_size_pt: 20.0,
        section_title_size_pt: 14.0,
        entry_title_size_pt: 11.0,
        body_size_pt: 9.0,
        line_height: 1.5,
        header_gap_pt: 20.0,
        section_gap_pt: 15.0,
        entry_gap_pt: 10.0,
    };
    match kind {
        TemplateKind::Modern => base,
        TemplateKind::Classic => PageConfig {
            name_size_pt: 18.0,
            section_title_size_pt: 12.0,
            entry_title_size_pt: 10.0,
            ..base
        },
        TemplateKind::Minimal => PageConfig {
            margin_pt: 40.0,
            section_title_size_pt: 12.0,
            entry_title_size_pt: 10.0,
            header_gap_pt: 25.0,
            entry_gap_pt: 8.0,
            ..base
        },
        TemplateKind::Creative => PageConfig {
            margin_pt: 20.0,
            header_gap_pt: 15.0,
            ..base
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_prints_on_a4() {
        for kind in TemplateKind::ALL {
            let config = page_config(kind);
            assert_eq!(config.size, A4);
            assert_eq!(config.body_size_pt, 9.0);
            assert!(config.usable_height() > 700.0, "{kind}: usable height");
        }
    }

    #[test]
    fn test_content_box_respects_margins() {
        let config = page_config(TemplateKind::Minimal);
        assert!((config.content_width() - (595.28 - 80.0)).abs() < 1e-3);
        assert_eq!(config.content_top(), 40.0);
        assert!((config.content_bottom() - (841.89 - 40.0)).abs() < 1e-3);
    }

    #[test]
    fn test_classic_uses_serif() {
        assert_eq!(page_config(TemplateKind::Classic).font, FontFamily::Serif);
        assert_eq!(page_config(TemplateKind::Modern).font, FontFamily::Sans);
    }
}
