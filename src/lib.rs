//! # linkshelf
//!
//! Metadata resolution and classification for links shared between friends.
//!
//! Given a loosely typed URL, linkshelf normalizes it, fetches the page through
//! a chain of passthrough routes, reads its social-card metadata and assigns
//! a content category. Network and markup problems never fail a resolution;
//! they produce a record built from the hostname instead.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use linkshelf::{Options, ReqwestClient, Resolver};
//!
//! # async fn run() -> linkshelf::Result<()> {
//! let options = Options::default();
//! let client = Arc::new(ReqwestClient::new(&options)?);
//! let resolver = Resolver::new(client, options);
//!
//! let record = resolver.resolve("youtu.be/dQw4w9WgXcQ").await?;
//! println!("{} [{}]", record.title, record.category);
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! - **Normalization**: [`url_utils::normalize`] turns `example.com` into `https://example.com`
//! - **Fetching**: [`fetch::ContentFetcher`] tries each route in order until one returns content
//! - **Extraction**: [`metadata::extract`] reads Open Graph, Twitter card and `<title>` values
//! - **Classification**: [`classify`] applies the ordered rules in [`classifier::rules`]

mod error;
mod options;
mod resolver;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Charset detection and decoding of route bodies.
pub mod encoding;

/// URL normalization and hostname utilities.
pub mod url_utils;

/// Fetch routes, the HTTP capability and the route-chain fetcher.
pub mod fetch;

/// Social-card metadata extraction.
pub mod metadata;

/// Category rules and classification.
pub mod classifier;

/// Saved link records, storage and filtering.
pub mod links;

/// Subscriber setup for binaries.
pub mod logging;

// Public API - re-exports
pub use classifier::{classify, Category};
pub use error::{Error, Result};
pub use fetch::{HttpClient, ReqwestClient};
pub use options::Options;
pub use resolver::Resolver;
pub use result::{MetadataRecord, PartialMetadata};

/// Resolve a raw URL with default options through the fixed route chain.
///
/// Convenience for one-off calls; build a [`Resolver`] to reuse options.
///
/// # Errors
/// [`Error::InvalidUrl`] when the input cannot be normalized into a
/// well-formed absolute URL.
pub async fn resolve(client: std::sync::Arc<dyn HttpClient>, raw_url: &str) -> Result<MetadataRecord> {
    Resolver::new(client, Options::default()).resolve(raw_url).await
}
