//! Filtering of saved links by text, category and friend.

use super::LinkEntity;
use crate::classifier::Category;

/// Criteria for narrowing a list of links. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkFilter {
    /// Case-insensitive substring of title, description or URL.
    pub search: String,
    /// Only links of this category; `None` keeps all categories.
    pub category: Option<Category>,
    /// Case-insensitive substring of the `shared_by` name.
    pub friend: String,
}

impl LinkFilter {
    #[must_use]
    pub fn matches(&self, link: &LinkEntity) -> bool {
        let search = self.search.to_lowercase();
        let friend = self.friend.to_lowercase();

        let search_ok = search.is_empty()
            || link.title.to_lowercase().contains(&search)
            || link.description.to_lowercase().contains(&search)
            || link.url.to_lowercase().contains(&search);

        let category_ok = self.category.is_none_or(|category| link.category == category);

        let friend_ok = friend.is_empty()
            || link
                .shared_by
                .as_ref()
                .is_some_and(|name| name.to_lowercase().contains(&friend));

        search_ok && category_ok && friend_ok
    }

    /// Links that match, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, links: &'a [LinkEntity]) -> Vec<&'a LinkEntity> {
        links.iter().filter(|link| self.matches(link)).collect()
    }
}
