//! Link resolution.
//!
//! Sequences normalization, fetching, extraction and classification into a
//! single [`MetadataRecord`]. Fetch and extraction problems never fail a
//! resolution; they produce a degraded record built from the hostname.

use std::sync::Arc;

use url::Url;

use crate::classifier::classify;
use crate::error::Result;
use crate::fetch::{ContentFetcher, HttpClient};
use crate::metadata;
use crate::options::Options;
use crate::result::{MetadataRecord, PartialMetadata};
use crate::url_utils;

/// Resolves raw URLs into metadata records.
pub struct Resolver {
    fetcher: ContentFetcher,
    options: Options,
}

impl Resolver {
    /// Resolver over the fixed route chain using `client` for network access.
    pub fn new(client: Arc<dyn HttpClient>, options: Options) -> Self {
        let fetcher = ContentFetcher::new(client, options.clone());
        Self { fetcher, options }
    }

    /// Resolver over an explicitly built fetcher.
    #[must_use]
    pub fn with_fetcher(fetcher: ContentFetcher, options: Options) -> Self {
        Self { fetcher, options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Resolve `raw_url` into a metadata record.
    ///
    /// # Errors
    /// [`crate::Error::InvalidUrl`] when the input cannot be normalized into a
    /// well-formed absolute URL. Network and markup problems are not errors.
    pub async fn resolve(&self, raw_url: &str) -> Result<MetadataRecord> {
        let (normalized, url) = url_utils::parse_normalized(raw_url)?;
        let hostname = url.host_str().unwrap_or_default().to_string();

        let mut start = 0;
        while let Some(fetched) = self.fetcher.fetch_from(&normalized, start).await {
            let partial = metadata::extract(&fetched.content);

            if partial.is_usable() {
                tracing::debug!(url = %normalized, route = %fetched.route, "extracted metadata");
                return Ok(self.record_from(&normalized, &url, &hostname, partial));
            }

            tracing::info!(url = %normalized, route = %fetched.route, "content had no title or description");
            if !self.options.continue_on_unusable {
                break;
            }
            start = fetched.route_index + 1;
        }

        tracing::info!(url = %normalized, "using fallback metadata");
        Ok(self.fallback_record(&normalized, &hostname))
    }

    fn record_from(&self, normalized: &str, url: &Url, hostname: &str, partial: PartialMetadata) -> MetadataRecord {
        let title = if partial.title.is_empty() { hostname.to_string() } else { partial.title };
        let description = if partial.description.is_empty() {
            self.options.fallback_description.clone()
        } else {
            partial.description
        };
        let image = url_utils::create_absolute_url(&partial.image, url);
        let category = classify(normalized, &title, &description);

        MetadataRecord { title, description, image, category }
    }

    fn fallback_record(&self, normalized: &str, hostname: &str) -> MetadataRecord {
        let description = self.options.fallback_description.clone();
        let category = classify(normalized, hostname, &description);

        MetadataRecord {
            title: hostname.to_string(),
            description,
            image: String::new(),
            category,
        }
    }
}
