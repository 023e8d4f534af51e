//! Content fetching through an ordered chain of passthrough routes.
//!
//! Routes are tried strictly one after another. The first route that answers
//! with a success status and non-empty content wins; every failure is logged
//! and the next route is tried.

mod client;
mod error;
mod route;

use std::sync::Arc;

use tokio::time::timeout;

use crate::options::Options;

pub use client::{HttpClient, HttpResponse, ReqwestClient};
pub use error::RouteFailure;
pub use route::{default_routes, FetchRoute, ProxyRoute, ResponseDecoding};

/// Markup returned by a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedContent {
    /// Position of the route in the chain.
    pub route_index: usize,
    /// Name of the route that produced the content.
    pub route: String,
    /// Decoded markup, never empty.
    pub content: String,
}

/// Fetches page markup through the route chain.
///
/// Holds no per-call state; concurrent `fetch` calls for different URLs do
/// not interact.
pub struct ContentFetcher {
    client: Arc<dyn HttpClient>,
    routes: Vec<Box<dyn FetchRoute>>,
    options: Options,
}

impl ContentFetcher {
    /// Fetcher over the fixed route chain.
    pub fn new(client: Arc<dyn HttpClient>, options: Options) -> Self {
        Self::with_routes(client, default_routes(), options)
    }

    /// Fetcher over a caller-supplied route chain.
    pub fn with_routes(client: Arc<dyn HttpClient>, routes: Vec<Box<dyn FetchRoute>>, options: Options) -> Self {
        Self { client, routes, options }
    }

    #[must_use]
    pub fn routes(&self) -> &[Box<dyn FetchRoute>] {
        &self.routes
    }

    /// Fetch `url`, trying every route in order.
    ///
    /// Returns `None` when all routes fail.
    pub async fn fetch(&self, url: &str) -> Option<FetchedContent> {
        self.fetch_from(url, 0).await
    }

    /// Fetch `url`, starting with the route at `start`.
    pub async fn fetch_from(&self, url: &str, start: usize) -> Option<FetchedContent> {
        for (index, route) in self.routes.iter().enumerate().skip(start) {
            match self.try_route(route.as_ref(), url).await {
                Ok(content) => {
                    tracing::debug!(route = route.name(), url, bytes = content.len(), "route returned content");
                    return Some(FetchedContent {
                        route_index: index,
                        route: route.name().to_string(),
                        content,
                    });
                }
                Err(err) => {
                    tracing::warn!(route = route.name(), url, error = %err, "fetch route failed");
                }
            }
        }

        tracing::warn!(url, routes = self.routes.len(), "all fetch routes failed");
        None
    }

    async fn try_route(&self, route: &dyn FetchRoute, url: &str) -> Result<String, RouteFailure> {
        let request_url = route.request_url(url);
        let headers = [("Accept", self.options.accept_header.as_str())];

        let response = timeout(self.options.route_timeout, self.client.get(&request_url, &headers))
            .await
            .map_err(|_| RouteFailure::Timeout(self.options.route_timeout))??;

        if !response.is_success() {
            return Err(RouteFailure::Status(response.status));
        }

        route.decode(&response)
    }
}
