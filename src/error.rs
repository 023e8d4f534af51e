//! Error types for linkshelf.
//!
//! Only input validation and storage problems are errors. Fetch and
//! extraction failures degrade to a fallback record instead, see
//! [`crate::fetch::RouteFailure`].

/// Error type for resolution and link store operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The raw input could not be coerced into a well-formed absolute URL.
    ///
    /// Carries the original input, not the normalized form.
    #[error("Invalid URL: {0:?} (enter a valid URL, e.g. example.com or https://example.com)")]
    InvalidUrl(String),

    /// The owner already has this normalized URL saved.
    #[error("You already have this link saved: {title:?}")]
    DuplicateLink {
        /// Normalized URL that collided.
        url: String,
        /// Title of the link already on file.
        title: String,
    },

    /// No link with the given id belongs to the owner.
    #[error("Link not found: {0}")]
    LinkNotFound(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Persistence failure reported by a link store.
    #[error("Storage failed: {0}")]
    Storage(String),
}

/// Result type alias for linkshelf operations.
pub type Result<T> = std::result::Result<T, Error>;
