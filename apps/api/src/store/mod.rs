//! Resume session store: the single writer of `ResumeData`.
//!
//! Snapshots are handed out as `Arc<ResumeData>`. Mutations go through
//! `Arc::make_mut`, so the store copies the aggregate only while some reader
//! still holds the previous snapshot; a render pass never observes a change.
//!
//! Update and remove calls that name an unknown id leave the data untouched
//! and return `false`. They are never errors.

pub mod ids;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::models::{
    EducationItem, EducationPatch, ExperienceItem, ExperiencePatch, ItemId, NewEducation,
    NewExperience, NewProject, PersonalInfoPatch, ProjectItem, ProjectPatch, ResumeData,
    TemplateKind,
};
use ids::{fresh_id, position_of, Identified};

/// Session-level metadata reported alongside the resume.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub started_at: DateTime<Utc>,
    /// Bumped on every mutation that changed something.
    pub revision: u64,
    pub selected_template: TemplateKind,
}

/// Owns the resume being edited for the lifetime of one editing session.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    data: Arc<ResumeData>,
    selected_template: TemplateKind,
    started_at: DateTime<Utc>,
    revision: u64,
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new(TemplateKind::default())
    }
}

impl ResumeStore {
    pub fn new(initial_template: TemplateKind) -> Self {
        Self {
            data: Arc::new(ResumeData::default()),
            selected_template: initial_template,
            started_at: Utc::now(),
            revision: 0,
        }
    }

    // ── reads ───────────────────────────────────────────────────────────────

    /// Current immutable snapshot. Cheap: clones the `Arc`, not the data.
    pub fn snapshot(&self) -> Arc<ResumeData> {
        Arc::clone(&self.data)
    }

    pub fn selected_template(&self) -> TemplateKind {
        self.selected_template
    }

    pub fn session_info(&self) -> SessionInfo {
        SessionInfo {
            started_at: self.started_at,
            revision: self.revision,
            selected_template: self.selected_template,
        }
    }

    // ── scalar fields ───────────────────────────────────────────────────────

    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) {
        self.data_mut().personal_info.apply(patch);
        debug!("personal info updated");
    }

    pub fn update_objective(&mut self, objective: String) {
        self.data_mut().objective = objective;
        debug!("objective replaced");
    }

    pub fn update_skills(&mut self, skills: Vec<String>) {
        let count = skills.len();
        self.data_mut().skills = skills;
        debug!(count, "skills replaced");
    }

    /// Changes the template selection. Never touches the resume data.
    pub fn set_template(&mut self, template: TemplateKind) {
        self.selected_template = template;
        self.revision += 1;
        debug!(%template, "template selected");
    }

    /// Restores the all-empty resume. The template selection is kept.
    pub fn reset_resume_data(&mut self) {
        self.data = Arc::new(ResumeData::default());
        self.revision += 1;
        debug!("resume data reset");
    }

    // ── education ───────────────────────────────────────────────────────────

    pub fn add_education(&mut self, item: NewEducation) -> EducationItem {
        let created = item.with_id(fresh_id(&self.data.education));
        self.data_mut().education.push(created.clone());
        debug!(id = %created.id, "education added");
        created
    }

    pub fn update_education(&mut self, id: &ItemId, patch: EducationPatch) -> bool {
        self.update_item(
            "education",
            id,
            |data| &data.education,
            |data| &mut data.education,
            |item| item.apply(patch),
        )
    }

    pub fn remove_education(&mut self, id: &ItemId) -> bool {
        self.remove_item(
            "education",
            id,
            |data| &data.education,
            |data| &mut data.education,
        )
    }

    // ── experience ──────────────────────────────────────────────────────────

    pub fn add_experience(&mut self, item: NewExperience) -> ExperienceItem {
        let created = item.with_id(fresh_id(&self.data.experience));
        self.data_mut().experience.push(created.clone());
        debug!(id = %created.id, "experience added");
        created
    }

    pub fn update_experience(&mut self, id: &ItemId, patch: ExperiencePatch) -> bool {
        self.update_item(
            "experience",
            id,
            |data| &data.experience,
            |data| &mut data.experience,
            |item| item.apply(patch),
        )
    }

    pub fn remove_experience(&mut self, id: &ItemId) -> bool {
        self.remove_item(
            "experience",
            id,
            |data| &data.experience,
            |data| &mut data.experience,
        )
    }

    // ── projects ────────────────────────────────────────────────────────────

    pub fn add_project(&mut self, item: NewProject) -> ProjectItem {
        let created = item.with_id(fresh_id(&self.data.projects));
        self.data_mut().projects.push(created.clone());
        debug!(id = %created.id, "project added");
        created
    }

    pub fn update_project(&mut self, id: &ItemId, patch: ProjectPatch) -> bool {
        self.update_item(
            "projects",
            id,
            |data| &data.projects,
            |data| &mut data.projects,
            |item| item.apply(patch),
        )
    }

    pub fn remove_project(&mut self, id: &ItemId) -> bool {
        self.remove_item(
            "projects",
            id,
            |data| &data.projects,
            |data| &mut data.projects,
        )
    }

    // ── internal helpers ────────────────────────────────────────────────────

    /// Copy-on-write access to the aggregate; counts as one revision.
    fn data_mut(&mut self) -> &mut ResumeData {
        self.revision += 1;
        Arc::make_mut(&mut self.data)
    }

    /// Looks the id up on the shared snapshot first so a miss never copies.
    fn update_item<T: Identified>(
        &mut self,
        collection: &'static str,
        id: &ItemId,
        select: fn(&ResumeData) -> &Vec<T>,
        select_mut: fn(&mut ResumeData) -> &mut Vec<T>,
        apply: impl FnOnce(&mut T),
    ) -> bool {
        let Some(index) = position_of(select(&self.data), id) else {
            debug!(collection, %id, "update skipped: no item with this id");
            return false;
        };
        apply(&mut select_mut(self.data_mut())[index]);
        debug!(collection, %id, "item updated");
        true
    }

    fn remove_item<T: Identified>(
        &mut self,
        collection: &'static str,
        id: &ItemId,
        select: fn(&ResumeData) -> &Vec<T>,
        select_mut: fn(&mut ResumeData) -> &mut Vec<T>,
    ) -> bool {
        let Some(index) = position_of(select(&self.data), id) else {
            debug!(collection, %id, "remove skipped: no item with this id");
            return false;
        };
        select_mut(self.data_mut()).remove(index);
        debug!(collection, %id, "item removed");
        true
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skills::{skills_from_input, skills_to_input};
    use std::collections::HashSet;

    fn make_experience(company: &str) -> NewExperience {
        NewExperience {
            company: company.to_string(),
            position: "Engineer".to_string(),
            start_date: "Jan 2020".to_string(),
            end_date: "Present".to_string(),
            location: None,
            description: "• Did X\nDid Y".to_string(),
        }
    }

    fn make_education(institution: &str) -> NewEducation {
        NewEducation {
            institution: institution.to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2014".to_string(),
            end_date: "2018".to_string(),
            location: Some("Delft".to_string()),
            gpa: None,
        }
    }

    fn make_project(title: &str) -> NewProject {
        NewProject {
            title: title.to_string(),
            technologies: "Rust".to_string(),
            ..Default::default()
        }
    }

    fn populated_store() -> ResumeStore {
        let mut store = ResumeStore::default();
        store.update_personal_info(PersonalInfoPatch {
            full_name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            ..Default::default()
        });
        store.update_objective("Engineer of engines".to_string());
        store.add_experience(make_experience("Acme"));
        store.add_education(make_education("TU Delft"));
        store.add_project(make_project("Analytical Engine"));
        store.update_skills(vec!["Rust".to_string(), "Math".to_string()]);
        store
    }

    // ── add ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_add_appends_with_unique_ids() {
        let mut store = ResumeStore::default();
        for i in 0..25 {
            store.add_experience(make_experience(&format!("Company {i}")));
            store.add_education(make_education(&format!("School {i}")));
            store.add_project(make_project(&format!("Project {i}")));
        }
        let data = store.snapshot();
        assert_eq!(data.experience.len(), 25);
        assert_eq!(data.education.len(), 25);
        assert_eq!(data.projects.len(), 25);

        let ids: HashSet<&ItemId> = data.experience.iter().map(|e| &e.id).collect();
        assert_eq!(ids.len(), 25, "experience ids must be unique");
        assert_eq!(data.experience[0].company, "Company 0");
        assert_eq!(data.experience[24].company, "Company 24");
    }

    #[test]
    fn test_add_returns_the_stored_item() {
        let mut store = ResumeStore::default();
        let created = store.add_project(make_project("Compiler"));
        assert_eq!(store.snapshot().projects, vec![created]);
    }

    // ── update ──────────────────────────────────────────────────────────────

    #[test]
    fn test_update_changes_only_patched_fields_of_target() {
        let mut store = ResumeStore::default();
        let first = store.add_experience(make_experience("Acme"));
        let second = store.add_experience(make_experience("Globex"));

        let found = store.update_experience(
            &second.id,
            ExperiencePatch {
                position: Some("Staff Engineer".to_string()),
                ..Default::default()
            },
        );
        assert!(found);

        let data = store.snapshot();
        assert_eq!(data.experience[0], first, "untouched item must be equal by value");
        let mut expected = second.clone();
        expected.position = "Staff Engineer".to_string();
        assert_eq!(data.experience[1], expected);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = populated_store();
        let before = store.snapshot();
        let revision = store.session_info().revision;

        let found = store.update_education(
            &ItemId::new("missing"),
            EducationPatch {
                degree: Some("PhD".to_string()),
                ..Default::default()
            },
        );

        assert!(!found);
        assert_eq!(*store.snapshot(), *before);
        assert!(
            Arc::ptr_eq(&store.snapshot(), &before),
            "a miss must not copy the aggregate"
        );
        assert_eq!(store.session_info().revision, revision);
    }

    #[test]
    fn test_update_project_optional_fields() {
        let mut store = ResumeStore::default();
        let project = store.add_project(make_project("Compiler"));
        store.update_project(
            &project.id,
            ProjectPatch {
                link: Some("https://example.com".to_string()),
                end_date: Some("2023".to_string()),
                ..Default::default()
            },
        );
        let data = store.snapshot();
        assert_eq!(data.projects[0].link.as_deref(), Some("https://example.com"));
        assert_eq!(data.projects[0].end_date.as_deref(), Some("2023"));
        assert_eq!(data.projects[0].start_date, None);
        assert_eq!(data.projects[0].id, project.id);
    }

    // ── remove ──────────────────────────────────────────────────────────────

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut store = ResumeStore::default();
        let a = store.add_education(make_education("A"));
        let b = store.add_education(make_education("B"));
        let c = store.add_education(make_education("C"));

        assert!(store.remove_education(&b.id));

        let data = store.snapshot();
        assert_eq!(data.education, vec![a, c]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = populated_store();
        let before = store.snapshot();
        assert!(!store.remove_project(&ItemId::new("missing")));
        assert!(!store.remove_experience(&ItemId::new("missing")));
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_removed_id_cannot_be_updated() {
        let mut store = ResumeStore::default();
        let exp = store.add_experience(make_experience("Acme"));
        store.remove_experience(&exp.id);
        assert!(!store.update_experience(&exp.id, ExperiencePatch::default()));
        assert!(store.snapshot().experience.is_empty());
    }

    // ── skills ──────────────────────────────────────────────────────────────

    #[test]
    fn test_skills_round_trip_through_text() {
        let mut store = ResumeStore::default();
        store.update_skills(vec!["a".to_string(), "".to_string(), "b ".to_string()]);
        assert_eq!(skills_to_input(&store.snapshot().skills), "a, , b");

        store.update_skills(skills_from_input("x,, y "));
        assert_eq!(store.snapshot().skills, vec!["x", "", "y"]);
    }

    // ── reset / template ────────────────────────────────────────────────────

    #[test]
    fn test_reset_restores_default_and_keeps_template() {
        let mut store = populated_store();
        store.set_template(TemplateKind::Creative);

        store.reset_resume_data();

        assert_eq!(*store.snapshot(), ResumeData::default());
        assert_eq!(store.selected_template(), TemplateKind::Creative);
    }

    #[test]
    fn test_set_template_does_not_touch_data() {
        let mut store = populated_store();
        let before = store.snapshot();
        store.set_template(TemplateKind::Minimal);
        assert!(Arc::ptr_eq(&store.snapshot(), &before));
        assert_eq!(store.selected_template(), TemplateKind::Minimal);
    }

    #[test]
    fn test_initial_template_is_configurable() {
        let store = ResumeStore::new(TemplateKind::Classic);
        assert_eq!(store.selected_template(), TemplateKind::Classic);
        assert_eq!(store.session_info().revision, 0);
    }

    // ── snapshots ───────────────────────────────────────────────────────────

    #[test]
    fn test_held_snapshot_is_not_affected_by_later_mutation() {
        let mut store = populated_store();
        let held = store.snapshot();
        store.update_objective("Changed".to_string());
        store.reset_resume_data();

        assert_eq!(held.objective, "Engineer of engines");
        assert_eq!(held.experience.len(), 1);
        assert!(store.snapshot().experience.is_empty());
    }

    #[test]
    fn test_revision_counts_effective_mutations() {
        let mut store = ResumeStore::default();
        store.update_objective("one".to_string());
        let exp = store.add_experience(make_experience("Acme"));
        store.remove_experience(&exp.id);
        store.remove_experience(&exp.id);
        assert_eq!(store.session_info().revision, 3);
    }
}
