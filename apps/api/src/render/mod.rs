//! Template rendering: `(ResumeData, TemplateKind) -> VisualTree`.
//!
//! Pure and deterministic. The same snapshot and kind always produce an equal
//! tree, and the input is only ever borrowed.

pub mod blocks;
pub mod content;
pub mod layouts;
pub mod tree;

use crate::models::{ResumeData, TemplateKind};

pub use content::ResumeContent;
pub use layouts::{layout_for, SectionKind, TemplateLayout};
pub use tree::{Node, Role, VisualTree};

/// Renders a snapshot with the given layout.
pub fn render(data: &ResumeData, template: TemplateKind) -> VisualTree {
    let content = ResumeContent::project(data);
    VisualTree {
        template,
        root: layout_for(template).render(&content),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemId, NewEducation, NewExperience, NewProject};

    fn acme_experience() -> NewExperience {
        NewExperience {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "Jan 2020".to_string(),
            end_date: "Present".to_string(),
            location: Some(String::new()),
            description: "• Did X\nDid Y".to_string(),
        }
    }

    fn full_resume() -> ResumeData {
        let mut data = ResumeData::default();
        data.personal_info.full_name = "Ada Lovelace".to_string();
        data.personal_info.email = "ada@example.com".to_string();
        data.personal_info.phone = "555-0100".to_string();
        data.personal_info.address = "London".to_string();
        data.personal_info.linked_in = Some("linkedin.com/in/ada".to_string());
        data.personal_info.website = Some("ada.dev".to_string());
        data.objective = "Mathematician and first programmer.".to_string();
        data.experience
            .push(acme_experience().with_id(ItemId::new("e1")));
        data.education.push(
            NewEducation {
                institution: "University of London".to_string(),
                degree: "BSc".to_string(),
                field: "Mathematics".to_string(),
                start_date: "1830".to_string(),
                end_date: "1833".to_string(),
                location: Some("London".to_string()),
                gpa: Some("4.0".to_string()),
            }
            .with_id(ItemId::new("d1")),
        );
        data.projects.push(
            NewProject {
                title: "Analytical Engine Notes".to_string(),
                description: "• Note G".to_string(),
                technologies: "Punch cards".to_string(),
                link: Some("https://example.com/notes".to_string()),
                start_date: Some("1842".to_string()),
                end_date: None,
            }
            .with_id(ItemId::new("p1")),
        );
        data.skills = vec!["Mathematics".to_string(), "Poetry".to_string()];
        data
    }

    fn section_keys(tree: &VisualTree) -> Vec<&'static str> {
        tree.root
            .find_all(Role::Section)
            .iter()
            .filter_map(|n| n.key)
            .collect()
    }

    #[test]
    fn test_empty_resume_has_no_conditional_sections_for_any_template() {
        let data = ResumeData::default();
        for kind in TemplateKind::ALL {
            let tree = render(&data, kind);
            assert!(
                tree.root.find_all(Role::Section).is_empty(),
                "{kind}: no sections expected"
            );
            assert!(tree.root.find_all(Role::Contact).is_empty(), "{kind}: no contacts");
            assert!(tree.root.find_all(Role::ContactRow).is_empty());
            assert_eq!(tree.root.find_all(Role::Name).len(), 1, "{kind}: heading kept");
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let data = full_resume();
        for kind in TemplateKind::ALL {
            assert_eq!(render(&data, kind), render(&data, kind));
        }
    }

    #[test]
    fn test_modern_experience_scenario() {
        let mut data = ResumeData::default();
        data.experience
            .push(acme_experience().with_id(ItemId::new("e1")));

        let tree = render(&data, TemplateKind::Modern);
        let section = tree.root.section("experience").expect("experience section");
        let entries = section.find_all(Role::Entry);
        assert_eq!(entries.len(), 1);

        let entry = entries[0];
        assert_eq!(entry.find_all(Role::EntryTitle)[0].text.as_deref(), Some("Engineer"));
        assert_eq!(entry.find_all(Role::EntrySubtitle)[0].text.as_deref(), Some("Acme"));
        assert_eq!(entry.find_all(Role::Dates)[0].text.as_deref(), Some("Jan 2020 - Present"));
        assert!(entry.find_all(Role::Location).is_empty(), "no location line");

        let description = entry.find_all(Role::Description);
        assert_eq!(description.len(), 1);
        let rows: Vec<Role> = description[0].children.iter().map(|n| n.role).collect();
        assert_eq!(rows, vec![Role::BulletRow, Role::Line]);
        assert_eq!(description[0].children[0].texts(), vec!["•", "Did X"]);
        assert_eq!(description[0].children[1].text.as_deref(), Some("Did Y"));
    }

    #[test]
    fn test_all_layouts_show_the_same_texts() {
        // Creative labels contacts and stacks education, so compare the data
        // values rather than the full text lists.
        let data = full_resume();
        let values = [
            "Ada Lovelace",
            "ada@example.com",
            "555-0100",
            "London",
            "linkedin.com/in/ada",
            "ada.dev",
            "Mathematician and first programmer.",
            "Engineer",
            "Acme",
            "Jan 2020 - Present",
            "Did X",
            "Did Y",
            "University of London",
            "1830 - 1833",
            "GPA: 4.0",
            "Analytical Engine Notes",
            "Punch cards",
            "1842",
            "Note G",
            "https://example.com/notes",
        ];
        for kind in TemplateKind::ALL {
            let tree = render(&data, kind);
            let texts = tree.root.texts();
            for value in values {
                assert!(texts.contains(&value), "{kind}: missing '{value}'");
            }
            assert_eq!(section_keys(&tree).len(), 5, "{kind}: all five sections");
        }
    }

    #[test]
    fn test_section_order_per_layout() {
        let data = full_resume();
        assert_eq!(
            section_keys(&render(&data, TemplateKind::Modern)),
            vec!["summary", "skills", "experience", "education", "projects"]
        );
        assert_eq!(
            section_keys(&render(&data, TemplateKind::Classic)),
            vec!["summary", "experience", "education", "projects", "skills"]
        );
        assert_eq!(
            section_keys(&render(&data, TemplateKind::Creative)),
            vec!["experience", "projects", "summary", "skills", "education"]
        );
    }

    #[test]
    fn test_creative_partitions_into_two_columns() {
        let tree = render(&full_resume(), TemplateKind::Creative);
        let columns = tree.root.find_all(Role::Column);
        assert_eq!(columns.len(), 2);

        let main = columns[0];
        let side = columns[1];
        assert_eq!(main.key, Some("main"));
        assert!(main.section("experience").is_some());
        assert!(main.section("projects").is_some());
        assert!(side.section("summary").is_some());
        assert!(side.section("skills").is_some());
        assert!(side.section("education").is_some());
    }

    #[test]
    fn test_blank_dates_keep_separator_in_every_template() {
        let mut data = ResumeData::default();
        data.experience.push(
            NewExperience {
                end_date: String::new(),
                ..acme_experience()
            }
            .with_id(ItemId::new("e1")),
        );
        data.education.push(
            NewEducation {
                institution: "MIT".to_string(),
                ..Default::default()
            }
            .with_id(ItemId::new("d1")),
        );
        for kind in TemplateKind::ALL {
            let tree = render(&data, kind);
            let experience = tree.root.section("experience").expect("experience section");
            let dates = experience.find_all(Role::Dates);
            assert_eq!(dates[0].text.as_deref(), Some("Jan 2020 - "), "{kind}");

            let education = tree.root.section("education").expect("education section");
            let dates = education.find_all(Role::Dates);
            assert_eq!(dates.len(), 1, "{kind}");
            assert_eq!(dates[0].text.as_deref(), Some(" - "), "{kind}");
        }
    }

    #[test]
    fn test_creative_drops_empty_column() {
        let mut data = ResumeData::default();
        data.skills = vec!["Rust".to_string()];
        let tree = render(&data, TemplateKind::Creative);
        let columns = tree.root.find_all(Role::Column);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].key, Some("side"));
    }

    #[test]
    fn test_skills_inline_for_classic_chips_elsewhere() {
        let data = full_resume();

        let classic = render(&data, TemplateKind::Classic);
        let inline = classic.root.find_all(Role::SkillsInline);
        assert_eq!(inline.len(), 1);
        assert_eq!(inline[0].text.as_deref(), Some("Mathematics • Poetry"));

        for kind in [TemplateKind::Modern, TemplateKind::Minimal, TemplateKind::Creative] {
            let tree = render(&data, kind);
            let chips: Vec<&str> = tree
                .root
                .find_all(Role::SkillChip)
                .iter()
                .filter_map(|n| n.text.as_deref())
                .collect();
            assert_eq!(chips, vec!["Mathematics", "Poetry"], "{kind}");
        }
    }

    #[test]
    fn test_classic_splits_contact_rows() {
        let tree = render(&full_resume(), TemplateKind::Classic);
        let rows = tree.root.find_all(Role::ContactRow);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].children.len(), 3);
        assert_eq!(rows[1].texts(), vec!["linkedin.com/in/ada", "ada.dev"]);
    }

    #[test]
    fn test_classic_omits_empty_secondary_row() {
        let mut data = full_resume();
        data.personal_info.linked_in = None;
        data.personal_info.website = Some("  ".to_string());
        let tree = render(&data, TemplateKind::Classic);
        assert_eq!(tree.root.find_all(Role::ContactRow).len(), 1);
    }

    #[test]
    fn test_creative_labels_contacts() {
        let tree = render(&full_resume(), TemplateKind::Creative);
        let contacts = tree.root.find_all(Role::Contact);
        assert_eq!(contacts.len(), 5);
        assert_eq!(contacts[2].texts(), vec!["Location:", "London"]);
    }

    #[test]
    fn test_minimal_uses_short_labels() {
        let tree = render(&full_resume(), TemplateKind::Minimal);
        let titles: Vec<&str> = tree
            .root
            .find_all(Role::SectionTitle)
            .iter()
            .filter_map(|n| n.text.as_deref())
            .collect();
        assert_eq!(
            titles,
            vec!["About", "Experience", "Education", "Projects", "Skills"]
        );
    }

    #[test]
    fn test_render_does_not_mutate_input() {
        let data = full_resume();
        let before = data.clone();
        for kind in TemplateKind::ALL {
            let _ = render(&data, kind);
        }
        assert_eq!(data, before);
    }
}
