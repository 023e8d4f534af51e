//! Saved links: records, storage, the save workflow and list filtering.
//!
//! Resolution itself knows nothing about storage. [`save_link`] is the
//! caller that checks for duplicates, resolves and persists.

mod entity;
mod filter;
mod save;
mod store;

pub use entity::LinkEntity;
pub use filter::LinkFilter;
pub use save::save_link;
pub use store::{LinkStore, MemoryLinkStore};
