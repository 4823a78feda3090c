use crate::models::TemplateKind;
use crate::render::blocks;
use crate::render::content::ResumeContent;
use crate::render::layouts::{
    ContactArrangement, EducationStyle, SectionKind, SectionLabels, SectionPlan, SkillsStyle,
    TemplateLayout, Theme, PROFESSIONAL_LABELS,
};
use crate::render::tree::{Node, Role};

/// Banner header with labeled contacts, then a wide main column for
/// experience and projects beside a narrow column for the rest.
pub struct CreativeLayout;

static THEME: Theme = Theme {
    root: "creative",
    header: "creative-header banner",
    name: "creative-name",
    contact: "creative-contact",
    section: "creative-section",
    section_title: "creative-section-title accent-rule",
    entry: "creative-entry",
    entry_title: "creative-entry-title",
    entry_subtitle: "creative-entry-subtitle accent",
    meta: "creative-meta pill",
    body: "creative-body",
    skill: "creative-skill chip rounded",
    contacts: ContactArrangement::Labeled,
    skills: SkillsStyle::Chips,
    education: EducationStyle::Stacked,
};

const LABELS: SectionLabels = SectionLabels {
    summary: "About Me",
    ..PROFESSIONAL_LABELS
};

const PLAN: SectionPlan = SectionPlan {
    main: &[SectionKind::Experience, SectionKind::Projects],
    side: &[SectionKind::Summary, SectionKind::Skills, SectionKind::Education],
};

const MAIN_COLUMN: &str = "creative-column-main";
const SIDE_COLUMN: &str = "creative-column-side";

impl TemplateLayout for CreativeLayout {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Creative
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
        let main = blocks::sections(PLAN.main, content, &LABELS, &THEME);
        let side = blocks::sections(PLAN.side, content, &LABELS, &THEME);

        let columns: Vec<Node> = [("main", MAIN_COLUMN, main), ("side", SIDE_COLUMN, side)]
            .into_iter()
            .filter(|(_, _, sections)| !sections.is_empty())
            .map(|(key, class, sections)| {
                Node::element(Role::Column, class)
                    .with_key(key)
                    .with_children(sections)
            })
            .collect();

        let mut root = Node::element(Role::Document, THEME.root).with_key(self.kind().as_str());
        root.push(blocks::header(content, &THEME));
        if !columns.is_empty() {
            root.push(Node::element(Role::Columns, "creative-columns").with_children(columns));
        }
        root
    }
}
