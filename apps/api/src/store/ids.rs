use uuid::Uuid;

use crate::models::{EducationItem, ExperienceItem, ItemId, ProjectItem};

/// Items that live in an id-keyed resume collection.
pub trait Identified {
    fn id(&self) -> &ItemId;
}

impl Identified for EducationItem {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

impl Identified for ExperienceItem {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

impl Identified for ProjectItem {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// Draws a random v4 id (122 bits of entropy) not yet used in `existing`.
pub fn fresh_id<T: Identified>(existing: &[T]) -> ItemId {
    loop {
        let candidate = ItemId::new(Uuid::new_v4().simple().to_string());
        if !existing.iter().any(|item| item.id() == &candidate) {
            return candidate;
        }
    }
}

/// Index of the item with the given id, if present.
pub fn position_of<T: Identified>(items: &[T], id: &ItemId) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProject;
    use std::collections::HashSet;

    #[test]
    fn test_fresh_ids_are_unique() {
        let mut items: Vec<ProjectItem> = Vec::new();
        for _ in 0..500 {
            let id = fresh_id(&items);
            items.push(NewProject::default().with_id(id));
        }
        let unique: HashSet<&ItemId> = items.iter().map(|p| &p.id).collect();
        assert_eq!(unique.len(), 500);
    }

    #[test]
    fn test_fresh_id_is_hex_token() {
        let id = fresh_id::<ProjectItem>(&[]);
        assert_eq!(id.as_str().len(), 32);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_position_of_missing_is_none() {
        let items = vec![NewProject::default().with_id(ItemId::new("a"))];
        assert_eq!(position_of(&items, &ItemId::new("a")), Some(0));
        assert_eq!(position_of(&items, &ItemId::new("b")), None);
    }
}
