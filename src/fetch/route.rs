//! Fetch routes.
//!
//! A route is a third-party passthrough endpoint that fetches the target page
//! on our behalf. Each route builds its own request URL and has its own
//! convention for where the markup sits in the response.

use serde::Deserialize;

use super::client::HttpResponse;
use super::RouteFailure;
use crate::encoding;

/// Where the page markup sits in a route's response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseDecoding {
    /// The whole body is the markup.
    RawText,
    /// The body is a JSON object whose `contents` field holds the markup.
    JsonContents,
}

#[derive(Debug, Deserialize)]
struct ContentsEnvelope {
    #[serde(default)]
    contents: Option<String>,
}

impl ResponseDecoding {
    /// Pull the markup out of a successful response.
    ///
    /// # Errors
    /// [`RouteFailure::Decode`] when a JSON envelope is malformed and
    /// [`RouteFailure::Empty`] when there is no content.
    pub fn decode(self, response: &HttpResponse) -> Result<String, RouteFailure> {
        let content = match self {
            Self::RawText => encoding::decode_body(&response.body, response.content_type.as_deref()),
            Self::JsonContents => {
                let envelope: ContentsEnvelope = serde_json::from_slice(&response.body)
                    .map_err(|err| RouteFailure::Decode(err.to_string()))?;
                envelope.contents.unwrap_or_default()
            }
        };

        if content.is_empty() {
            return Err(RouteFailure::Empty);
        }

        Ok(content)
    }
}

/// Common capability of every fetch route.
pub trait FetchRoute: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Request URL for fetching `target` through this route.
    fn request_url(&self, target: &str) -> String;

    /// Extract markup from a successful response.
    fn decode(&self, response: &HttpResponse) -> Result<String, RouteFailure>;
}

/// A route that appends the URL-encoded target to a fixed endpoint prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRoute {
    name: String,
    endpoint: String,
    decoding: ResponseDecoding,
}

impl ProxyRoute {
    /// `endpoint` is everything up to and including the `=` or `?` the
    /// encoded target is appended to.
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>, decoding: ResponseDecoding) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            decoding,
        }
    }

    /// codetabs passthrough, raw body.
    #[must_use]
    pub fn codetabs() -> Self {
        Self::new("codetabs", "https://api.codetabs.com/v1/proxy?quest=", ResponseDecoding::RawText)
    }

    /// corsproxy.io passthrough, raw body.
    #[must_use]
    pub fn corsproxy() -> Self {
        Self::new("corsproxy", "https://corsproxy.io/?", ResponseDecoding::RawText)
    }

    /// allorigins passthrough, JSON envelope with a `contents` field.
    #[must_use]
    pub fn allorigins() -> Self {
        Self::new("allorigins", "https://api.allorigins.win/get?url=", ResponseDecoding::JsonContents)
    }

    #[must_use]
    pub fn decoding(&self) -> ResponseDecoding {
        self.decoding
    }
}

impl FetchRoute for ProxyRoute {
    fn name(&self) -> &str {
        &self.name
    }

    fn request_url(&self, target: &str) -> String {
        format!("{}{}", self.endpoint, urlencoding::encode(target))
    }

    fn decode(&self, response: &HttpResponse) -> Result<String, RouteFailure> {
        self.decoding.decode(response)
    }
}

/// The fixed route chain, in the order routes are tried.
#[must_use]
pub fn default_routes() -> Vec<Box<dyn FetchRoute>> {
    vec![
        Box::new(ProxyRoute::codetabs()),
        Box::new(ProxyRoute::corsproxy()),
        Box::new(ProxyRoute::allorigins()),
    ]
}
