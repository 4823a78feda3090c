//! Paginated export document.
//!
//! The same `ResumeContent` projection that feeds the visual tree is turned
//! into rows, word-wrapped with the static metric tables, and flowed down A4
//! pages. Creative flows its two columns independently below a full-width
//! header; every other layout uses one column.

use serde::Serialize;

use crate::export::font_metrics::{get_metrics, FontFamily, FontMetricTable};
use crate::export::page::{
    page_config, PageConfig, PageSize, ASIDE_GAP_PT, BULLET_INDENT_PT, COLUMN_GUTTER_PT,
    MAIN_COLUMN_SHARE,
};
use crate::export::wrap::wrap_text;
use crate::models::{ResumeData, TemplateKind};
use crate::render::content::{
    DescriptionLine, EducationEntry, ExperienceEntry, ProjectEntry, ResumeContent,
};
use crate::render::layouts::{
    layout_for, ContactArrangement, EducationStyle, SectionKind, SectionLabels,
};

/// Separator between contacts sharing a header row.
const CONTACT_SEPARATOR: &str = " | ";

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSlot {
    /// Spans the whole content width.
    Full,
    Main,
    Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Name,
    Contact,
    SectionTitle,
    EntryTitle,
    EntrySubtitle,
    Meta,
    Body,
}

impl TextStyle {
    pub fn is_bold(self) -> bool {
        matches!(
            self,
            TextStyle::Name | TextStyle::SectionTitle | TextStyle::EntryTitle
        )
    }

    fn size_pt(self, config: &PageConfig) -> f32 {
        match self {
            TextStyle::Name => config.name_size_pt,
            TextStyle::SectionTitle => config.section_title_size_pt,
            TextStyle::EntryTitle => config.entry_title_size_pt,
            TextStyle::Contact | TextStyle::EntrySubtitle | TextStyle::Meta | TextStyle::Body => {
                config.body_size_pt
            }
        }
    }
}

/// Right-aligned text sharing a line with the main text (dates, locations).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aside {
    pub text: String,
    pub x_pt: f32,
}

/// One printed line.
///
/// `y_pt` is the top of the line box measured from the top edge of the page.
/// `indent_pt` is the offset of `x_pt` from the column edge; when `bullet` is
/// set the marker sits on that edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedLine {
    pub column: ColumnSlot,
    pub style: TextStyle,
    pub x_pt: f32,
    pub y_pt: f32,
    pub size_pt: f32,
    pub height_pt: f32,
    pub indent_pt: f32,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aside: Option<Aside>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<char>,
}

impl PlacedLine {
    pub fn bottom_pt(&self) -> f32 {
        self.y_pt + self.height_pt
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPage {
    /// 1-based.
    pub number: usize,
    pub lines: Vec<PlacedLine>,
}

impl DocumentPage {
    /// Lowest point reached by any line, or `None` for an empty page.
    pub fn content_bottom_pt(&self) -> Option<f32> {
        self.lines.iter().map(PlacedLine::bottom_pt).reduce(f32::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub template: TemplateKind,
    pub page_size: PageSize,
    pub font: FontFamily,
    /// Always at least one page.
    pub pages: Vec<DocumentPage>,
}

impl ExportDocument {
    /// Every line text and aside in page order.
    pub fn texts(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|page| &page.lines)
            .flat_map(|line| {
                std::iter::once(line.text.as_str())
                    .chain(line.aside.as_ref().map(|a| a.text.as_str()))
            })
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Lays a snapshot out as a paginated document for the given template.
///
/// Never fails: blank fields simply produce no lines.
pub fn build_document(data: &ResumeData, template: TemplateKind) -> ExportDocument {
    let content = ResumeContent::project(data);
    let layout = layout_for(template);
    let config = page_config(template);
    let metrics = get_metrics(config.font);
    let theme = layout.theme();
    let labels = layout.labels();
    let plan = layout.plan();

    let mut header = Flow::new(
        &config,
        metrics,
        ColumnSlot::Full,
        config.margin_pt,
        config.content_width(),
        config.content_top(),
    );
    header.place_all(&header_rows(&content, theme.contacts));

    let body_top = if header.placed.is_empty() {
        config.content_top()
    } else {
        header.y + config.header_gap_pt
    };

    let mut flows = vec![header];
    if plan.is_two_column() {
        let inner = config.content_width() - COLUMN_GUTTER_PT;
        let main_width = inner * MAIN_COLUMN_SHARE;
        let side_width = inner - main_width;
        let mut main = Flow::new(
            &config,
            metrics,
            ColumnSlot::Main,
            config.margin_pt,
            main_width,
            body_top,
        );
        main.place_all(&section_rows(plan.main, &content, &labels, theme.education, &config));
        let mut side = Flow::new(
            &config,
            metrics,
            ColumnSlot::Side,
            config.margin_pt + main_width + COLUMN_GUTTER_PT,
            side_width,
            body_top,
        );
        side.place_all(&section_rows(plan.side, &content, &labels, theme.education, &config));
        flows.push(main);
        flows.push(side);
    } else {
        let mut body = Flow::new(
            &config,
            metrics,
            ColumnSlot::Full,
            config.margin_pt,
            config.content_width(),
            body_top,
        );
        body.place_all(&section_rows(plan.main, &content, &labels, theme.education, &config));
        flows.push(body);
    }

    let page_count = flows.iter().map(|f| f.page + 1).max().unwrap_or(1);
    let mut pages: Vec<DocumentPage> = (1..=page_count)
        .map(|number| DocumentPage {
            number,
            lines: Vec::new(),
        })
        .collect();
    for flow in flows {
        for (page, line) in flow.placed {
            pages[page].lines.push(line);
        }
    }

    ExportDocument {
        template,
        page_size: config.size,
        font: config.font,
        pages,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rows
// ────────────────────────────────────────────────────────────────────────────

/// A logical line before wrapping.
#[derive(Debug, Clone, PartialEq)]
struct Row {
    style: TextStyle,
    text: String,
    aside: Option<String>,
    bullet: Option<char>,
    space_before: f32,
    /// Moves to the next page with the following row rather than end a page.
    keep_with_next: bool,
    /// Occupies a line even when the text is blank.
    keep_empty: bool,
}

impl Row {
    fn new(style: TextStyle, text: impl Into<String>) -> Self {
        Row {
            style,
            text: text.into(),
            aside: None,
            bullet: None,
            space_before: 0.0,
            keep_with_next: false,
            keep_empty: false,
        }
    }

    fn aside(mut self, aside: Option<impl Into<String>>) -> Self {
        self.aside = aside.map(Into::into);
        self
    }

    fn space_before(mut self, space: f32) -> Self {
        self.space_before = space;
        self
    }
}

fn header_rows(content: &ResumeContent<'_>, arrangement: ContactArrangement) -> Vec<Row> {
    let mut rows = vec![Row::new(TextStyle::Name, content.full_name)];

    let joined = |contacts: Vec<String>| {
        (!contacts.is_empty()).then(|| Row::new(TextStyle::Contact, contacts.join(CONTACT_SEPARATOR)))
    };
    match arrangement {
        ContactArrangement::SingleRow => {
            rows.extend(joined(
                content.contacts.iter().map(|c| c.value.to_string()).collect(),
            ));
        }
        ContactArrangement::SplitRows => {
            for primary in [true, false] {
                rows.extend(joined(
                    content
                        .contacts_where(primary)
                        .map(|c| c.value.to_string())
                        .collect(),
                ));
            }
        }
        ContactArrangement::Labeled => {
            rows.extend(joined(
                content
                    .contacts
                    .iter()
                    .map(|c| format!("{}: {}", c.kind.label(), c.value))
                    .collect(),
            ));
        }
    }
    rows
}

fn section_rows(
    order: &[SectionKind],
    content: &ResumeContent<'_>,
    labels: &SectionLabels,
    education: EducationStyle,
    config: &PageConfig,
) -> Vec<Row> {
    let mut rows = Vec::new();
    for &kind in order {
        let body = section_body(kind, content, education, config);
        if body.is_empty() {
            continue;
        }
        let gap = if rows.is_empty() { 0.0 } else { config.section_gap_pt };
        let mut title = Row::new(TextStyle::SectionTitle, labels.get(kind)).space_before(gap);
        title.keep_with_next = true;
        rows.push(title);
        rows.extend(body);
    }
    rows
}

fn section_body(
    kind: SectionKind,
    content: &ResumeContent<'_>,
    education: EducationStyle,
    config: &PageConfig,
) -> Vec<Row> {
    match kind {
        SectionKind::Summary => content
            .summary
            .map(|summary| vec![Row::new(TextStyle::Body, summary)])
            .unwrap_or_default(),
        SectionKind::Experience => entries(content.experience.as_deref(), config, experience_rows),
        SectionKind::Education => entries(content.education.as_deref(), config, |entry| {
            education_rows(entry, education)
        }),
        SectionKind::Projects => entries(content.projects.as_deref(), config, project_rows),
        SectionKind::Skills => content
            .skills_inline()
            .map(|skills| vec![Row::new(TextStyle::Body, skills)])
            .unwrap_or_default(),
    }
}

/// Concatenates entry rows, separating entries by the entry gap.
fn entries<T>(items: Option<&[T]>, config: &PageConfig, to_rows: impl Fn(&T) -> Vec<Row>) -> Vec<Row> {
    let mut rows = Vec::new();
    for (index, item) in items.unwrap_or_default().iter().enumerate() {
        let mut entry = to_rows(item);
        if let Some(first) = entry.first_mut() {
            first.keep_with_next = true;
            if index > 0 {
                first.space_before = config.entry_gap_pt;
            }
        }
        rows.append(&mut entry);
    }
    rows
}

fn experience_rows(entry: &ExperienceEntry<'_>) -> Vec<Row> {
    let mut rows = vec![
        Row::new(TextStyle::EntryTitle, entry.position).aside(Some(entry.dates.as_str())),
        Row::new(TextStyle::EntrySubtitle, entry.company).aside(entry.location),
    ];
    rows.extend(description_rows(&entry.description));
    rows
}

fn education_rows(entry: &EducationEntry<'_>, style: EducationStyle) -> Vec<Row> {
    let mut rows = match style {
        EducationStyle::Standard => vec![
            Row::new(TextStyle::EntryTitle, entry.headline()).aside(Some(entry.dates.as_str())),
            Row::new(TextStyle::EntrySubtitle, entry.institution).aside(entry.location),
        ],
        EducationStyle::Stacked => {
            let mut rows = vec![Row::new(TextStyle::EntryTitle, entry.degree)];
            if !entry.field.is_empty() {
                rows.push(Row::new(TextStyle::EntrySubtitle, entry.field));
            }
            rows.push(Row::new(TextStyle::Body, entry.institution));
            rows.push(Row::new(TextStyle::Meta, entry.dates.as_str()));
            rows.extend(entry.location.map(|l| Row::new(TextStyle::Meta, l)));
            rows
        }
    };
    rows.extend(
        entry
            .gpa
            .map(|gpa| Row::new(TextStyle::Meta, format!("GPA: {gpa}"))),
    );
    rows
}

fn project_rows(entry: &ProjectEntry<'_>) -> Vec<Row> {
    let mut rows = vec![Row::new(TextStyle::EntryTitle, entry.title).aside(entry.dates.as_deref())];
    rows.extend(entry.technologies.map(|t| Row::new(TextStyle::EntrySubtitle, t)));
    rows.extend(description_rows(&entry.description));
    rows.extend(entry.link.map(|l| Row::new(TextStyle::Meta, l)));
    rows
}

fn description_rows(lines: &[DescriptionLine<'_>]) -> Vec<Row> {
    lines
        .iter()
        .map(|line| match *line {
            DescriptionLine::Bullet { marker, text } => Row {
                bullet: Some(marker),
                keep_empty: true,
                ..Row::new(TextStyle::Body, text)
            },
            DescriptionLine::Plain(text) => Row {
                keep_empty: true,
                ..Row::new(TextStyle::Body, text)
            },
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Flow
// ────────────────────────────────────────────────────────────────────────────

/// Places rows top to bottom within one column, breaking pages as needed.
struct Flow<'c> {
    config: &'c PageConfig,
    metrics: &'static FontMetricTable,
    column: ColumnSlot,
    x: f32,
    width: f32,
    page: usize,
    y: f32,
    /// Nothing placed yet on the current page of this column.
    fresh: bool,
    placed: Vec<(usize, PlacedLine)>,
}

impl<'c> Flow<'c> {
    fn new(
        config: &'c PageConfig,
        metrics: &'static FontMetricTable,
        column: ColumnSlot,
        x: f32,
        width: f32,
        top: f32,
    ) -> Self {
        Flow {
            config,
            metrics,
            column,
            x,
            width,
            page: 0,
            y: top,
            fresh: true,
            placed: Vec::new(),
        }
    }

    fn place_all(&mut self, rows: &[Row]) {
        for (index, row) in rows.iter().enumerate() {
            if row.keep_with_next {
                if let Some(next) = rows.get(index + 1) {
                    let needed = self.first_line_height(row)
                        + next.space_before
                        + self.first_line_height(next);
                    if !self.fresh && self.y + row.space_before + needed > self.config.content_bottom() {
                        self.break_page();
                    }
                }
            }
            self.place(row);
        }
    }

    fn line_height(&self, style: TextStyle) -> f32 {
        style.size_pt(self.config) * self.config.line_height
    }

    fn first_line_height(&self, row: &Row) -> f32 {
        self.line_height(row.style)
    }

    fn break_page(&mut self) {
        self.page += 1;
        self.y = self.config.content_top();
        self.fresh = true;
    }

    fn place(&mut self, row: &Row) {
        let size = row.style.size_pt(self.config);
        let bold = row.style.is_bold();
        let height = self.line_height(row.style);
        let indent = if row.bullet.is_some() { BULLET_INDENT_PT } else { 0.0 };

        // An aside that would squeeze the text below 40% of the column moves
        // to its own line.
        let mut aside = row.aside.clone();
        let mut trailing = None;
        let mut aside_width = aside
            .as_deref()
            .map(|a| self.metrics.measure_pt(a, size, false))
            .unwrap_or(0.0);
        if aside_width + ASIDE_GAP_PT > self.width * 0.6 {
            trailing = aside.take();
            aside_width = 0.0;
        }
        let reserved = if aside.is_some() { aside_width + ASIDE_GAP_PT } else { 0.0 };

        let mut lines = wrap_text(&row.text, self.metrics, size, bold, self.width - indent - reserved);
        if lines.is_empty() {
            if aside.is_none() && !row.keep_empty {
                return self.place_trailing(trailing, row.space_before);
            }
            lines.push(String::new());
        }

        if !self.fresh {
            self.y += row.space_before;
        }
        for (index, text) in lines.into_iter().enumerate() {
            if !self.fresh && self.y + height > self.config.content_bottom() {
                self.break_page();
            }
            let first = index == 0;
            let line = PlacedLine {
                column: self.column,
                style: row.style,
                x_pt: self.x + indent,
                y_pt: self.y,
                size_pt: size,
                height_pt: height,
                indent_pt: indent,
                text,
                aside: if first {
                    aside.take().map(|text| Aside {
                        text,
                        x_pt: self.x + self.width - aside_width,
                    })
                } else {
                    None
                },
                bullet: if first { row.bullet } else { None },
            };
            self.placed.push((self.page, line));
            self.y += height;
            self.fresh = false;
        }
        self.place_trailing(trailing, 0.0);
    }

    fn place_trailing(&mut self, trailing: Option<String>, space_before: f32) {
        if let Some(text) = trailing {
            self.place(&Row::new(TextStyle::Meta, text).space_before(space_before));
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
