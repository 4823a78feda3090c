use crate::models::TemplateKind;
use crate::render::content::ResumeContent;
use crate::render::layouts::{
    single_column, ContactArrangement, EducationStyle, SectionKind, SectionLabels, SectionPlan,
    SkillsStyle, TemplateLayout, Theme, PROFESSIONAL_LABELS,
};
use crate::render::tree::Node;

/// Serif, uppercase headings, skills as one inline line at the end.
pub struct ClassicLayout;

static THEME: Theme = Theme {
    root: "classic serif",
    header: "classic-header ruled",
    name: "classic-name uppercase",
    contact: "classic-contact",
    section: "classic-section",
    section_title: "classic-section-title uppercase",
    entry: "classic-entry",
    entry_title: "classic-entry-title bold",
    entry_subtitle: "classic-entry-subtitle semibold",
    meta: "classic-meta italic",
    body: "classic-body",
    skill: "classic-skills",
    contacts: ContactArrangement::SplitRows,
    skills: SkillsStyle::Inline,
    education: EducationStyle::Standard,
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

impl TemplateLayout for ClassicLayout {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Classic
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
