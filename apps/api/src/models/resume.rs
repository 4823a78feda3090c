use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of an item inside one of the resume collections.
///
/// Opaque to callers: assigned by the store on creation and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: impl Into<String>) -> Self {
        ItemId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregate root
// ────────────────────────────────────────────────────────────────────────────

/// The whole resume being edited in one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    /// Professional summary.
    pub objective: String,
    pub education: Vec<EducationItem>,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<ProjectItem>,
    /// Display order is insertion order.
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: ItemId,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: ItemId,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Multi-line; lines starting with `•` render as bullet rows.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub technologies: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// New items (everything except the id)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEducation {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub location: Option<String>,
    pub gpa: Option<String>,
}

impl NewEducation {
    pub fn with_id(self, id: ItemId) -> EducationItem {
        EducationItem {
            id,
            institution: self.institution,
            degree: self.degree,
            field: self.field,
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location,
            gpa: self.gpa,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub location: Option<String>,
    pub description: String,
}

impl NewExperience {
    pub fn with_id(self, id: ItemId) -> ExperienceItem {
        ExperienceItem {
            id,
            company: self.company,
            position: self.position,
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub link: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl NewProject {
    pub fn with_id(self, id: ItemId) -> ProjectItem {
        ProjectItem {
            id,
            title: self.title,
            description: self.description,
            technologies: self.technologies,
            link: self.link,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Partial updates (shallow merge; `None` keeps the current value)
// ────────────────────────────────────────────────────────────────────────────

/// Assigns `$field` from the patch for every listed field that is `Some`.
/// Optional model fields are wrapped back into `Some`.
macro_rules! merge_fields {
    ($target:expr, $patch:expr; $($field:ident),*; $(opt $opt_field:ident),*) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )*
        $(
            if let Some(value) = $patch.$opt_field {
                $target.$opt_field = Some(value);
            }
        )*
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linked_in: Option<String>,
    pub website: Option<String>,
}

impl PersonalInfo {
    pub fn apply(&mut self, patch: PersonalInfoPatch) {
        merge_fields!(self, patch; full_name, email, phone, address; opt linked_in, opt website);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub gpa: Option<String>,
}

impl EducationItem {
    pub fn apply(&mut self, patch: EducationPatch) {
        merge_fields!(self, patch; institution, degree, field, start_date, end_date; opt location, opt gpa);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl ExperienceItem {
    pub fn apply(&mut self, patch: ExperiencePatch) {
        merge_fields!(self, patch; company, position, start_date, end_date, description; opt location);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub link: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ProjectItem {
    pub fn apply(&mut self, patch: ProjectPatch) {
        merge_fields!(self, patch; title, description, technologies; opt link, opt start_date, opt end_date);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template selection
// ────────────────────────────────────────────────────────────────────────────

/// The four layout strategies. Carries no data of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Modern,
        TemplateKind::Classic,
        TemplateKind::Minimal,
        TemplateKind::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "modern",
            TemplateKind::Classic => "classic",
            TemplateKind::Minimal => "minimal",
            TemplateKind::Creative => "creative",
        }
    }

    /// Display name shown on the template picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "Modern",
            TemplateKind::Classic => "Classic",
            TemplateKind::Minimal => "Minimal",
            TemplateKind::Creative => "Creative",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "Clean layout with a modern touch",
            TemplateKind::Classic => "Traditional design for formal settings",
            TemplateKind::Minimal => "Simple and elegant with lots of white space",
            TemplateKind::Creative => "Unique design for creative professionals",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template '{0}' (expected one of: modern, classic, minimal, creative)")]
pub struct UnknownTemplate(pub String);

impl FromStr for TemplateKind {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
