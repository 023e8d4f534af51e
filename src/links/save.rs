//! The save-a-link workflow.

use super::{LinkEntity, LinkStore};
use crate::error::{Error, Result};
use crate::resolver::Resolver;
use crate::url_utils;

/// Save `raw_url` into `owner`'s collection.
///
/// The duplicate check runs before resolution so an already saved URL costs
/// no network traffic.
///
/// # Errors
/// * [`Error::InvalidUrl`] for input that cannot be normalized
/// * [`Error::DuplicateLink`] when the owner already saved the normalized URL
/// * any error the store reports on lookup or create
pub async fn save_link(
    store: &dyn LinkStore,
    resolver: &Resolver,
    owner: &str,
    raw_url: &str,
    shared_by: Option<&str>,
) -> Result<LinkEntity> {
    let (normalized, _) = url_utils::parse_normalized(raw_url)?;

    if let Some(existing) = store.find(owner, &normalized).await? {
        tracing::debug!(owner, url = %normalized, "link already saved");
        return Err(Error::DuplicateLink {
            url: normalized,
            title: existing.title,
        });
    }

    let metadata = resolver.resolve(&normalized).await?;
    let link = LinkEntity::new(owner, &normalized, metadata, shared_by);

    let saved = store.create(link).await?;
    tracing::info!(owner, url = %saved.url, category = %saved.category, "link saved");
    Ok(saved)
}
