//! The four template layouts.
//!
//! Each layout is a unit struct implementing `TemplateLayout`; `layout_for`
//! is the only dispatch point from `TemplateKind`. Layouts choose order,
//! grouping and style tokens; what is shown comes from `ResumeContent`.

mod classic;
mod creative;
mod minimal;
mod modern;

use serde::Serialize;

use crate::models::TemplateKind;
use crate::render::blocks;
use crate::render::content::ResumeContent;
use crate::render::tree::{Node, Role};

pub use classic::ClassicLayout;
pub use creative::CreativeLayout;
pub use minimal::MinimalLayout;
pub use modern::ModernLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
}

impl SectionKind {
    pub fn key(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
        }
    }
}

/// Section headings as printed by a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLabels {
    pub summary: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub projects: &'static str,
    pub skills: &'static str,
}

impl SectionLabels {
    pub fn get(&self, section: SectionKind) -> &'static str {
        match section {
            SectionKind::Summary => self.summary,
            SectionKind::Experience => self.experience,
            SectionKind::Education => self.education,
            SectionKind::Projects => self.projects,
            SectionKind::Skills => self.skills,
        }
    }
}

pub const PROFESSIONAL_LABELS: SectionLabels = SectionLabels {
    summary: "Professional Summary",
    experience: "Professional Experience",
    education: "Education",
    projects: "Projects",
    skills: "Skills",
};

/// Section order. Single-column layouts leave `side` empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPlan {
    pub main: &'static [SectionKind],
    pub side: &'static [SectionKind],
}

impl SectionPlan {
    pub fn is_two_column(&self) -> bool {
        !self.side.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactArrangement {
    /// All contacts on one wrapping row.
    SingleRow,
    /// Email, phone and address first; profile links on a second row.
    SplitRows,
    /// Every contact prefixed with its label.
    Labeled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillsStyle {
    Chips,
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationStyle {
    /// "Degree in Field" headline with dates and institution rows.
    Standard,
    /// Degree, field and institution on separate lines.
    Stacked,
}

/// Style tokens and arrangement switches a layout hands to the shared blocks.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub root: &'static str,
    pub header: &'static str,
    pub name: &'static str,
    pub contact: &'static str,
    pub section: &'static str,
    pub section_title: &'static str,
    pub entry: &'static str,
    pub entry_title: &'static str,
    pub entry_subtitle: &'static str,
    pub meta: &'static str,
    pub body: &'static str,
    pub skill: &'static str,
    pub contacts: ContactArrangement,
    pub skills: SkillsStyle,
    pub education: EducationStyle,
}

/// Shared interface of the four layouts.
pub trait TemplateLayout: Sync {
    fn kind(&self) -> TemplateKind;

    fn labels(&self) -> SectionLabels;

    fn plan(&self) -> SectionPlan;

    fn theme(&self) -> &'static Theme;

    /// Builds the full tree for already-projected content.
    fn render(&self, content: &ResumeContent<'_>) -> Node;
}

/// Dispatches a template kind to its layout.
pub fn layout_for(kind: TemplateKind) -> &'static dyn TemplateLayout {
    match kind {
        TemplateKind::Modern => &ModernLayout,
        TemplateKind::Classic => &ClassicLayout,
        TemplateKind::Minimal => &MinimalLayout,
        TemplateKind::Creative => &CreativeLayout,
    }
}

/// Header followed by the plan's main sections, top to bottom.
pub(crate) fn single_column(layout: &dyn TemplateLayout, content: &ResumeContent<'_>) -> Node {
    let theme = layout.theme();
    let mut root = Node::element(Role::Document, theme.root).with_key(layout.kind().as_str());
    root.push(blocks::header(content, theme));
    root.children
        .extend(blocks::sections(layout.plan().main, content, &layout.labels(), theme));
    root
}
