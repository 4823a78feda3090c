//! Display projection shared by every paint back end.
//!
//! `ResumeContent::project` decides *what* appears: which contact fields,
//! which sections, which optional item fields, how date ranges read, and how a
//! description splits into bullet rows and plain lines. The visual tree and
//! the export document only decide *where* it goes.
//!
//! A field counts as populated when it holds any non-whitespace character.

use serde::Serialize;

use crate::models::{EducationItem, ExperienceItem, PersonalInfo, ProjectItem, ResumeData};

/// Leading character that turns a description line into a bullet row.
pub const BULLET_MARKER: char = '•';

/// Separator for inline (single string) skill lists.
pub const SKILL_SEPARATOR: &str = " • ";

// ────────────────────────────────────────────────────────────────────────────
// Projection types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Address,
    LinkedIn,
    Website,
}

impl ContactKind {
    pub fn key(&self) -> &'static str {
        match self {
            ContactKind::Email => "email",
            ContactKind::Phone => "phone",
            ContactKind::Address => "address",
            ContactKind::LinkedIn => "linked_in",
            ContactKind::Website => "website",
        }
    }

    /// Label used by layouts that prefix contact entries.
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Address => "Location",
            ContactKind::LinkedIn => "LinkedIn",
            ContactKind::Website => "Website",
        }
    }

    /// Email, phone and address form the primary contact row.
    pub fn is_primary(&self) -> bool {
        matches!(
            self,
            ContactKind::Email | ContactKind::Phone | ContactKind::Address
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact<'a> {
    pub kind: ContactKind,
    pub value: &'a str,
}

/// One source line of a multi-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionLine<'a> {
    /// Line starting with the bullet marker; `text` is the trimmed remainder.
    Bullet { marker: char, text: &'a str },
    /// Any other line, kept literally (including blank lines).
    Plain(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry<'a> {
    pub position: &'a str,
    pub company: &'a str,
    pub dates: String,
    pub location: Option<&'a str>,
    pub description: Vec<DescriptionLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntry<'a> {
    pub degree: &'a str,
    pub field: &'a str,
    pub institution: &'a str,
    pub dates: String,
    pub location: Option<&'a str>,
    pub gpa: Option<&'a str>,
}

impl EducationEntry<'_> {
    /// "{degree} in {field}", dropping whichever half is blank.
    pub fn headline(&self) -> String {
        match (populated(self.degree), populated(self.field)) {
            (Some(degree), Some(field)) => format!("{degree} in {field}"),
            (Some(degree), None) => degree.to_string(),
            (None, Some(field)) => field.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry<'a> {
    pub title: &'a str,
    pub technologies: Option<&'a str>,
    pub dates: Option<String>,
    pub description: Vec<DescriptionLine<'a>>,
    pub link: Option<&'a str>,
}

/// Everything a template may show, with every conditional already resolved.
///
/// Sections are `None` when they must not appear at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeContent<'a> {
    pub full_name: &'a str,
    pub contacts: Vec<Contact<'a>>,
    pub summary: Option<&'a str>,
    pub experience: Option<Vec<ExperienceEntry<'a>>>,
    pub education: Option<Vec<EducationEntry<'a>>>,
    pub projects: Option<Vec<ProjectEntry<'a>>>,
    /// Non-blank skills in model order.
    pub skills: Option<Vec<&'a str>>,
}

impl<'a> ResumeContent<'a> {
    pub fn project(data: &'a ResumeData) -> Self {
        ResumeContent {
            full_name: data.personal_info.full_name.trim(),
            contacts: contacts(&data.personal_info),
            summary: populated(&data.objective),
            experience: non_empty(data.experience.iter().map(experience_entry).collect()),
            education: non_empty(data.education.iter().map(education_entry).collect()),
            projects: non_empty(data.projects.iter().map(project_entry).collect()),
            skills: non_empty(data.skills.iter().filter_map(|s| populated(s)).collect()),
        }
    }

    pub fn contacts_where(&self, primary: bool) -> impl Iterator<Item = &Contact<'a>> {
        self.contacts
            .iter()
            .filter(move |c| c.kind.is_primary() == primary)
    }

    /// `" • "`-joined skills for inline layouts.
    pub fn skills_inline(&self) -> Option<String> {
        self.skills.as_ref().map(|s| s.join(SKILL_SEPARATOR))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared rules
// ────────────────────────────────────────────────────────────────────────────

/// Returns the trimmed value if it has visible content.
pub fn populated(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn populated_opt(value: Option<&String>) -> Option<&str> {
    value.and_then(|v| populated(v))
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

/// `"{start} - {end}"` for experience and education, shown even when a side is blank.
pub fn date_span(start: &str, end: &str) -> String {
    format!("{} - {}", start.trim(), end.trim())
}

/// Project dates: `"{start} - {end}"`, or the single present token, or nothing.
pub fn date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    match (start.and_then(populated), end.and_then(populated)) {
        (Some(start), Some(end)) => Some(format!("{start} - {end}")),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}

/// Splits a description on line breaks, classifying each line.
///
/// A blank description yields no lines. `\r\n` endings are accepted.
pub fn parse_description(description: &str) -> Vec<DescriptionLine<'_>> {
    if populated(description).is_none() {
        return Vec::new();
    }
    description
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| match line.trim_start().strip_prefix(BULLET_MARKER) {
            Some(rest) => DescriptionLine::Bullet {
                marker: BULLET_MARKER,
                text: rest.trim(),
            },
            None => DescriptionLine::Plain(line),
        })
        .collect()
}

fn contacts(info: &PersonalInfo) -> Vec<Contact<'_>> {
    [
        (ContactKind::Email, Some(&info.email)),
        (ContactKind::Phone, Some(&info.phone)),
        (ContactKind::Address, Some(&info.address)),
        (ContactKind::LinkedIn, info.linked_in.as_ref()),
        (ContactKind::Website, info.website.as_ref()),
    ]
    .into_iter()
    .filter_map(|(kind, value)| populated_opt(value).map(|value| Contact { kind, value }))
    .collect()
}

fn experience_entry(item: &ExperienceItem) -> ExperienceEntry<'_> {
    ExperienceEntry {
        position: item.position.trim(),
        company: item.company.trim(),
        dates: date_span(&item.start_date, &item.end_date),
        location: populated_opt(item.location.as_ref()),
        description: parse_description(&item.description),
    }
}

fn education_entry(item: &EducationItem) -> EducationEntry<'_> {
    EducationEntry {
        degree: item.degree.trim(),
        field: item.field.trim(),
        institution: item.institution.trim(),
        dates: date_span(&item.start_date, &item.end_date),
        location: populated_opt(item.location.as_ref()),
        gpa: populated_opt(item.gpa.as_ref()),
    }
}

fn project_entry(item: &ProjectItem) -> ProjectEntry<'_> {
    ProjectEntry {
        title: item.title.trim(),
        technologies: populated(&item.technologies),
        dates: date_range(item.start_date.as_deref(), item.end_date.as_deref()),
        description: parse_description(&item.description),
        link: populated_opt(item.link.as_ref()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
