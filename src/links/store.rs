//! Link storage.
//!
//! Persistence is owned by a collaborator behind [`LinkStore`].
//! [`MemoryLinkStore`] keeps everything in process memory.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::LinkEntity;
use crate::error::{Error, Result};

/// Keyed record store for saved links.
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// The owner's link with exactly this normalized URL, if any.
    async fn find(&self, owner: &str, url: &str) -> Result<Option<LinkEntity>>;

    /// Whether the owner already saved this normalized URL.
    async fn exists(&self, owner: &str, url: &str) -> Result<bool> {
        Ok(self.find(owner, url).await?.is_some())
    }

    /// Persist a new link.
    ///
    /// # Errors
    /// [`Error::DuplicateLink`] when `(owner, url)` is already taken.
    async fn create(&self, link: LinkEntity) -> Result<LinkEntity>;

    /// All of the owner's links, newest first.
    async fn list(&self, owner: &str) -> Result<Vec<LinkEntity>>;

    /// Delete a link. Both the id and the owner must match.
    ///
    /// # Errors
    /// [`Error::LinkNotFound`] when no such link belongs to `owner`.
    async fn delete(&self, owner: &str, id: Uuid) -> Result<()>;
}

/// [`LinkStore`] kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: RwLock<Vec<LinkEntity>>,
}

impl MemoryLinkStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn find(&self, owner: &str, url: &str) -> Result<Option<LinkEntity>> {
        let links = self.links.read().await;
        Ok(links.iter().find(|l| l.owner == owner && l.url == url).cloned())
    }

    async fn create(&self, link: LinkEntity) -> Result<LinkEntity> {
        let mut links = self.links.write().await;

        if let Some(existing) = links.iter().find(|l| l.owner == link.owner && l.url == link.url) {
            return Err(Error::DuplicateLink {
                url: existing.url.clone(),
                title: existing.title.clone(),
            });
        }

        links.push(link.clone());
        Ok(link)
    }

    async fn list(&self, owner: &str) -> Result<Vec<LinkEntity>> {
        let links = self.links.read().await;
        let mut owned: Vec<LinkEntity> = links.iter().filter(|l| l.owner == owner).cloned().collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn delete(&self, owner: &str, id: Uuid) -> Result<()> {
        let mut links = self.links.write().await;

        match links.iter().position(|l| l.id == id && l.owner == owner) {
            Some(index) => {
                links.remove(index);
                Ok(())
            }
            None => Err(Error::LinkNotFound(id.to_string())),
        }
    }
}
