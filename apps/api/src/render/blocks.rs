//! Node builders shared by every layout.
//!
//! Each builder returns `None` when its content is absent, so layouts only
//! decide placement and never re-check conditional-display rules.

use crate::render::content::{
    Contact, DescriptionLine, EducationEntry, ExperienceEntry, ProjectEntry, ResumeContent,
};
use crate::render::layouts::{
    ContactArrangement, EducationStyle, SectionKind, SectionLabels, SkillsStyle, Theme,
};
use crate::render::tree::{Node, Role};

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

/// Name heading plus contact rows. The heading is always present.
pub fn header(content: &ResumeContent<'_>, theme: &Theme) -> Node {
    let mut header = Node::element(Role::Header, theme.header);
    header.push(Node::text(Role::Name, theme.name, content.full_name));

    match theme.contacts {
        ContactArrangement::SingleRow => {
            header.push_opt(contact_row(content.contacts.iter(), theme, false));
        }
        ContactArrangement::SplitRows => {
            header.push_opt(contact_row(content.contacts_where(true), theme, false));
            header.push_opt(contact_row(content.contacts_where(false), theme, false));
        }
        ContactArrangement::Labeled => {
            header.push_opt(contact_row(content.contacts.iter(), theme, true));
        }
    }
    header
}

fn contact_row<'c, 'a: 'c>(
    contacts: impl Iterator<Item = &'c Contact<'a>>,
    theme: &Theme,
    labeled: bool,
) -> Option<Node> {
    let nodes: Vec<Node> = contacts
        .map(|contact| {
            let key = contact.kind.key();
            if labeled {
                Node::element(Role::Contact, theme.contact)
                    .with_key(key)
                    .with_children([
                        Node::text(
                            Role::ContactLabel,
                            theme.contact,
                            format!("{}:", contact.kind.label()),
                        ),
                        Node::text(Role::ContactValue, theme.contact, contact.value),
                    ])
            } else {
                Node::text(Role::Contact, theme.contact, contact.value).with_key(key)
            }
        })
        .collect();

    (!nodes.is_empty()).then(|| Node::element(Role::ContactRow, theme.contact).with_children(nodes))
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// Builds the listed sections in order, skipping absent ones.
pub fn sections(
    order: &[SectionKind],
    content: &ResumeContent<'_>,
    labels: &SectionLabels,
    theme: &Theme,
) -> Vec<Node> {
    order
        .iter()
        .filter_map(|&kind| section(kind, content, labels, theme))
        .collect()
}

pub fn section(
    kind: SectionKind,
    content: &ResumeContent<'_>,
    labels: &SectionLabels,
    theme: &Theme,
) -> Option<Node> {
    let body: Vec<Node> = match kind {
        SectionKind::Summary => {
            vec![Node::text(Role::Paragraph, theme.body, content.summary?)]
        }
        SectionKind::Experience => content
            .experience
            .as_ref()?
            .iter()
            .map(|entry| experience_entry(entry, theme))
            .collect(),
        SectionKind::Education => content
            .education
            .as_ref()?
            .iter()
            .map(|entry| education_entry(entry, theme))
            .collect(),
        SectionKind::Projects => content
            .projects
            .as_ref()?
            .iter()
            .map(|entry| project_entry(entry, theme))
            .collect(),
        SectionKind::Skills => vec![skills(content.skills.as_ref()?, theme)],
    };

    let mut section = Node::element(Role::Section, theme.section).with_key(kind.key());
    section.push(Node::text(
        Role::SectionTitle,
        theme.section_title,
        labels.get(kind),
    ));
    Some(section.with_children(body))
}

// ────────────────────────────────────────────────────────────────────────────
// Entries
// ────────────────────────────────────────────────────────────────────────────

fn experience_entry(entry: &ExperienceEntry<'_>, theme: &Theme) -> Node {
    let mut node = Node::element(Role::Entry, theme.entry);
    node.push(Node::text(Role::EntryTitle, theme.entry_title, entry.position));
    node.push(Node::text(Role::Dates, theme.meta, entry.dates.as_str()));
    node.push(Node::text(Role::EntrySubtitle, theme.entry_subtitle, entry.company));
    node.push_opt(entry.location.map(|l| Node::text(Role::Location, theme.meta, l)));
    node.push_opt(description(&entry.description, theme));
    node
}

fn education_entry(entry: &EducationEntry<'_>, theme: &Theme) -> Node {
    let mut node = Node::element(Role::Entry, theme.entry);
    match theme.education {
        EducationStyle::Standard => {
            node.push(Node::text(Role::EntryTitle, theme.entry_title, entry.headline()));
            node.push(Node::text(Role::Dates, theme.meta, entry.dates.as_str()));
            node.push(Node::text(
                Role::EntrySubtitle,
                theme.entry_subtitle,
                entry.institution,
            ));
            node.push_opt(entry.location.map(|l| Node::text(Role::Location, theme.meta, l)));
        }
        EducationStyle::Stacked => {
            node.push(Node::text(Role::EntryTitle, theme.entry_title, entry.degree));
            if !entry.field.is_empty() {
                node.push(Node::text(Role::EntrySubtitle, theme.entry_subtitle, entry.field));
            }
            node.push(Node::text(Role::EntrySubtitle, theme.body, entry.institution));
            node.push(Node::text(Role::Dates, theme.meta, entry.dates.as_str()));
            node.push_opt(entry.location.map(|l| Node::text(Role::Location, theme.meta, l)));
        }
    }
    node.push_opt(
        entry
            .gpa
            .map(|gpa| Node::text(Role::Gpa, theme.meta, format!("GPA: {gpa}"))),
    );
    node
}

fn project_entry(entry: &ProjectEntry<'_>, theme: &Theme) -> Node {
    let mut node = Node::element(Role::Entry, theme.entry);
    node.push(Node::text(Role::EntryTitle, theme.entry_title, entry.title));
    node.push_opt(
        entry
            .dates
            .as_deref()
            .map(|d| Node::text(Role::Dates, theme.meta, d)),
    );
    node.push_opt(
        entry
            .technologies
            .map(|t| Node::text(Role::Technologies, theme.entry_subtitle, t)),
    );
    node.push_opt(description(&entry.description, theme));
    node.push_opt(entry.link.map(|l| Node::text(Role::Link, theme.meta, l)));
    node
}

// ────────────────────────────────────────────────────────────────────────────
// Description and skills
// ────────────────────────────────────────────────────────────────────────────

/// Bullet rows keep the marker in its own node; plain lines stay literal.
pub fn description(lines: &[DescriptionLine<'_>], theme: &Theme) -> Option<Node> {
    if lines.is_empty() {
        return None;
    }
    let rows = lines.iter().map(|line| match *line {
        DescriptionLine::Bullet { marker, text } => Node::element(Role::BulletRow, theme.body)
            .with_children([
                Node::text(Role::BulletMarker, theme.body, marker.to_string()),
                Node::text(Role::BulletText, theme.body, text),
            ]),
        DescriptionLine::Plain(text) => Node::text(Role::Line, theme.body, text),
    });
    Some(Node::element(Role::Description, theme.body).with_children(rows))
}

fn skills(skills: &[&str], theme: &Theme) -> Node {
    match theme.skills {
        SkillsStyle::Chips => Node::element(Role::SkillList, theme.body).with_children(
            skills
                .iter()
                .map(|&skill| Node::text(Role::SkillChip, theme.skill, skill)),
        ),
        SkillsStyle::Inline => Node::text(
            Role::SkillsInline,
            theme.skill,
            skills.join(crate::render::content::SKILL_SEPARATOR),
        ),
    }
}
