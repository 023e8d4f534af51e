//! Link classification.
//!
//! Assigns exactly one [`Category`] to a link from its URL, title and
//! description using the ordered table in [`rules`].

pub mod rules;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use rules::{CategoryRule, LinkText, Signal, RULES};

/// Content category of a saved link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Article,
    Video,
    Podcast,
    Social,
    Music,
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Article,
        Category::Video,
        Category::Podcast,
        Category::Social,
        Category::Music,
        Category::Other,
    ];

    /// Lower-case name as stored and displayed.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Article => "article",
            Category::Video => "video",
            Category::Podcast => "podcast",
            Category::Social => "social",
            Category::Music => "music",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned by [`Category::from_str`] for names outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.label() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Classify a link using the built-in rule table.
///
/// Inputs are lower-cased before matching; the first matching rule wins and
/// `Other` is returned when no rule matches.
///
/// # Example
///
/// ```rust
/// use linkshelf::{classify, Category};
///
/// let category = classify("https://open.spotify.com/track/abc123", "official watch video", "");
/// assert_eq!(category, Category::Music);
/// ```
#[must_use]
pub fn classify(url: &str, title: &str, description: &str) -> Category {
    classify_with(RULES, url, title, description)
}

/// Classify a link against a caller-supplied rule table.
#[must_use]
pub fn classify_with(rules: &[CategoryRule], url: &str, title: &str, description: &str) -> Category {
    let text = LinkText::new(url, title, description);

    rules
        .iter()
        .find(|rule| rule.matches(&text))
        .map_or(Category::Other, |rule| rule.category)
}
