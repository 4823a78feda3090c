use crate::models::TemplateKind;
use crate::render::content::ResumeContent;
use crate::render::layouts::{
    single_column, ContactArrangement, EducationStyle, SectionKind, SectionLabels, SectionPlan,
    SkillsStyle, TemplateLayout, Theme,
};
use crate::render::tree::Node;

/// Light type, short headings, generous spacing.
pub struct MinimalLayout;

static THEME: Theme = Theme {
    root: "minimal",
    header: "minimal-header",
    name: "minimal-name light",
    contact: "minimal-contact muted",
    section: "minimal-section spacious",
    section_title: "minimal-section-title",
    entry: "minimal-entry",
    entry_title: "minimal-entry-title",
    entry_subtitle: "minimal-entry-subtitle",
    meta: "minimal-meta muted",
    body: "minimal-body",
    skill: "minimal-skill chip",
    contacts: ContactArrangement::SingleRow,
    skills: SkillsStyle::Chips,
    education: EducationStyle::Standard,
};

const LABELS: SectionLabels = SectionLabels {
    summary: "About",
    experience: "Experience",
    education: "Education",
    projects: "Projects",
    skills: "Skills",
};

const PLAN: SectionPlan = SectionPlan {
    main: &[
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Projects,
        SectionKind::Skills,
    ],
    side: &[],
};

impl TemplateLayout for MinimalLayout {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Minimal
    }

    fn labels(&self) -> SectionLabels {
        LABELS
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
