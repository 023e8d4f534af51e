//! Result types for resolution output.
//!
//! `PartialMetadata` is what the extractor reads from markup; `MetadataRecord`
//! is the final, always-complete record handed to the link store.

use serde::{Deserialize, Serialize};

use crate::classifier::Category;

/// Metadata read from fetched markup, before any fallback substitution.
///
/// Every field is trimmed and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialMetadata {
    /// Page title.
    pub title: String,

    /// Page description.
    pub description: String,

    /// Preview image URL as written in the page (possibly relative).
    pub image: String,
}

impl PartialMetadata {
    /// Whether extraction produced anything worth keeping.
    ///
    /// A title or a description is enough; an image alone is not.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.title.is_empty() || !self.description.is_empty()
    }
}

/// Final metadata for a saved link.
///
/// `title` and `description` are never empty. `image` is an absolute URL or
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Human-readable title; the hostname when the page has none.
    pub title: String,

    /// Short description; the fallback text when the page has none.
    pub description: String,

    /// Preview image URL, or empty.
    pub image: String,

    /// Content category assigned by the classifier.
    pub category: Category,
}

impl MetadataRecord {
    /// Whether this record was built purely from fallback values.
    #[must_use]
    pub fn is_degraded(&self, hostname: &str, fallback_description: &str) -> bool {
        self.title == hostname && self.description == fallback_description && self.image.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_usable() {
        assert!(!PartialMetadata::default().is_usable());
        assert!(PartialMetadata { title: "T".into(), ..PartialMetadata::default() }.is_usable());
        assert!(PartialMetadata { description: "D".into(), ..PartialMetadata::default() }.is_usable());
        assert!(!PartialMetadata { image: "https://e.com/i.png".into(), ..PartialMetadata::default() }.is_usable());
    }

    #[test]
    fn test_record_serializes_category_lowercase() {
        let record = MetadataRecord {
            title: "T".into(),
            description: "D".into(),
            image: String::new(),
            category: Category::Podcast,
        };
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["category"], "podcast");
    }
}
