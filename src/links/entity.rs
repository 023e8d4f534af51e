//! Saved link records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classifier::Category;
use crate::result::MetadataRecord;

/// A link saved into an owner's collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntity {
    pub id: Uuid,
    pub owner: String,
    /// Normalized URL; unique per owner.
    pub url: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: Category,
    /// Who shared the link, if anyone was named.
    pub shared_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LinkEntity {
    /// Build a new entity from resolved metadata, stamped with a fresh id and
    /// the current time.
    ///
    /// `shared_by` is trimmed; a blank name is stored as `None`.
    #[must_use]
    pub fn new(owner: &str, url: &str, metadata: MetadataRecord, shared_by: Option<&str>) -> Self {
        let shared_by = shared_by
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Self {
            id: Uuid::new_v4(),
            owner: owner.to_string(),
            url: url.to_string(),
            title: metadata.title,
            description: metadata.description,
            image_url: metadata.image,
            category: metadata.category,
            shared_by,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> MetadataRecord {
        MetadataRecord {
            title: "Title".into(),
            description: "Description".into(),
            image: "https://example.com/i.png".into(),
            category: Category::Article,
        }
    }

    #[test]
    fn test_new_copies_metadata() {
        let link = LinkEntity::new("alice", "https://example.com", metadata(), Some("Bob"));
        assert_eq!(link.owner, "alice");
        assert_eq!(link.title, "Title");
        assert_eq!(link.image_url, "https://example.com/i.png");
        assert_eq!(link.category, Category::Article);
        assert_eq!(link.shared_by.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_blank_shared_by_is_none() {
        assert_eq!(LinkEntity::new("a", "https://e.com", metadata(), Some("   ")).shared_by, None);
        assert_eq!(LinkEntity::new("a", "https://e.com", metadata(), None).shared_by, None);
        assert_eq!(
            LinkEntity::new("a", "https://e.com", metadata(), Some("  Carol ")).shared_by.as_deref(),
            Some("Carol")
        );
    }

    #[test]
    fn test_serializes_category_as_type_name() {
        let link = LinkEntity::new("a", "https://e.com", metadata(), None);
        let json = serde_json::to_value(&link).expect("serialize");
        assert_eq!(json["category"], "article");
        assert!(json["shared_by"].is_null());
    }
}
