//! Route failures.
//!
//! A failure only ever moves the fetcher on to the next route; it is logged
//! and never returned from [`crate::Resolver::resolve`].

use std::time::Duration;

/// Why a single fetch route produced no content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteFailure {
    /// The route answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// Connection, TLS or body read failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The route did not settle within the per-route timeout.
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// The body did not match the route's decoding convention.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The route succeeded but carried no content.
    #[error("empty content")]
    Empty,
}

impl From<reqwest::Error> for RouteFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
