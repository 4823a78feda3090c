use crate::models::TemplateKind;
use crate::render::content::ResumeContent;
use crate::render::layouts::{
    single_column, ContactArrangement, EducationStyle, SectionKind, SectionLabels, SectionPlan,
    SkillsStyle, TemplateLayout, Theme, PROFESSIONAL_LABELS,
};
use crate::render::tree::Node;

/// Centered accent header, skill chips near the top.
pub struct ModernLayout;

static THEME: Theme = Theme {
    root: "modern",
    header: "modern-header",
    name: "modern-name accent",
    contact: "modern-contact",
    section: "modern-section",
    section_title: "modern-section-title accent-rule",
    entry: "modern-entry",
    entry_title: "modern-entry-title",
    entry_subtitle: "modern-entry-subtitle accent",
    meta: "modern-meta muted",
    body: "modern-body",
    skill: "modern-skill chip",
    contacts: ContactArrangement::SingleRow,
    skills: SkillsStyle::Chips,
    education: EducationStyle::Standard,
};

const PLAN: SectionPlan = SectionPlan {
    main: &[
        SectionKind::Summary,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Projects,
    ],
    side: &[],
};

impl TemplateLayout for ModernLayout {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Modern
    }

    fn labels(&self) -> SectionLabels {
        PROFESSIONAL_LABELS
    }

    fn plan(&self) -> SectionPlan {
        PLAN
    }

    fn theme(&self) -> &'static Theme {
        &THEME
    }

    fn render(&self, content: &ResumeContent<'_>) -> Node {
        single_column(self, content)
    }
}
