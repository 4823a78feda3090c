use serde::Serialize;

use crate::models::TemplateKind;

/// What a node stands for, independent of how a layout styles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Document,
    Header,
    Name,
    ContactRow,
    Contact,
    ContactLabel,
    ContactValue,
    Columns,
    Column,
    Section,
    SectionTitle,
    Entry,
    EntryTitle,
    EntrySubtitle,
    Dates,
    Location,
    Gpa,
    Technologies,
    Link,
    Paragraph,
    Description,
    BulletRow,
    BulletMarker,
    BulletText,
    Line,
    SkillsInline,
    SkillList,
    SkillChip,
}

/// One node of the rendered visual tree.
///
/// `class` is the layout's style token; `key` identifies sections, contact
/// kinds and columns so a client can address them without walking text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub role: Role,
    pub class: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn element(role: Role, class: &'static str) -> Self {
        Node {
            role,
            class,
            key: None,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn text(role: Role, class: &'static str, text: impl Into<String>) -> Self {
        Node {
            text: Some(text.into()),
            ..Node::element(role, class)
        }
    }

    pub fn with_key(mut self, key: &'static str) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Appends the child when present.
    pub fn push_opt(&mut self, child: Option<Node>) {
        self.children.extend(child);
    }

    /// Depth-first, pre-order list of every node with the given role.
    pub fn find_all(&self, role: Role) -> Vec<&Node> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if node.role == role {
                found.push(node);
            }
        });
        found
    }

    /// The section node with the given key, wherever it sits in the tree.
    pub fn section(&self, key: &str) -> Option<&Node> {
        self.find_all(Role::Section)
            .into_iter()
            .find(|node| node.key == Some(key))
    }

    /// Every text value in the subtree, in reading order.
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        self.walk(&mut |node| {
            if let Some(text) = &node.text {
                texts.push(text.as_str());
            }
        });
        texts
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// A rendered resume: the template it was produced with and its root node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualTree {
    pub template: TemplateKind,
    pub root: Node,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        let mut section = Node::element(Role::Section, "section").with_key("skills");
        section.push(Node::text(Role::SectionTitle, "title", "Skills"));
        section.push_opt(Some(Node::text(Role::SkillChip, "chip", "Rust")));
        section.push_opt(None);
        Node::element(Role::Document, "doc")
            .with_children([Node::text(Role::Name, "name", "Ada"), section])
    }

    #[test]
    fn test_find_all_is_preorder() {
        let root = sample();
        let roles: Vec<Role> = root.find_all(Role::SkillChip).iter().map(|n| n.role).collect();
        assert_eq!(roles, vec![Role::SkillChip]);
        assert_eq!(root.find_all(Role::Document).len(), 1);
    }

    #[test]
    fn test_section_lookup_by_key() {
        let root = sample();
        assert!(root.section("skills").is_some());
        assert!(root.section("projects").is_none());
    }

    #[test]
    fn test_texts_in_reading_order() {
        assert_eq!(sample().texts(), vec!["Ada", "Skills", "Rust"]);
    }

    #[test]
    fn test_serialization_omits_empty_parts() {
        let json = serde_json::to_value(Node::text(Role::Name, "name", "Ada")).unwrap();
        assert_eq!(json["role"], "name");
        assert_eq!(json["text"], "Ada");
        assert!(json.get("children").is_none());
        assert!(json.get("key").is_none());
    }
}
