//! Conversion between the comma-separated skills text box and the skill list.
//!
//! Entries are trimmed but never filtered: `"a, , b"` keeps its empty middle
//! entry so the text box re-displays exactly what the user typed.

const SEPARATOR: char = ',';
const DISPLAY_SEPARATOR: &str = ", ";

/// Splits the text box content into skills, trimming each entry.
pub fn skills_from_input(text: &str) -> Vec<String> {
    text.split(SEPARATOR)
        .map(|skill| skill.trim().to_string())
        .collect()
}

/// Joins skills back into the text box form.
pub fn skills_to_input(skills: &[String]) -> String {
    skills
        .iter()
        .map(|skill| skill.trim())
        .collect::<Vec<_>>()
        .join(DISPLAY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_trims_each_entry() {
        assert_eq!(
            skills_from_input(" Rust ,SQL,  Kubernetes"),
            owned(&["Rust", "SQL", "Kubernetes"])
        );
    }

    #[test]
    fn test_split_keeps_empty_entries() {
        assert_eq!(skills_from_input("a,,b"), owned(&["a", "", "b"]));
        assert_eq!(skills_from_input(""), owned(&[""]));
        assert_eq!(skills_from_input("a,"), owned(&["a", ""]));
    }

    #[test]
    fn test_join_trims_and_keeps_empty_entries() {
        assert_eq!(skills_to_input(&owned(&["a", "", "b "])), "a, , b");
    }

    #[test]
    fn test_join_of_empty_list_is_empty_text() {
        assert_eq!(skills_to_input(&[]), "");
    }

    #[test]
    fn test_text_survives_split_and_join() {
        let text = "Rust, , Go, SQL";
        assert_eq!(skills_to_input(&skills_from_input(text)), text);
    }
}
