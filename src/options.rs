//! Configuration options for link resolution.
//!
//! The `Options` struct controls network behavior and the fallback text used
//! for degraded records. The route endpoints themselves are fixed and are not
//! part of the configuration.

use std::time::Duration;

use serde::Deserialize;

/// Description used when a page offers none.
pub const DEFAULT_FALLBACK_DESCRIPTION: &str = "Link shared by friend";

/// `Accept` header sent to every route.
pub const DEFAULT_ACCEPT: &str = "application/json, text/plain, */*";

/// Configuration options for link resolution.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use linkshelf::Options;
///
/// let options = Options {
///     route_timeout: Duration::from_secs(5),
///     ..Options::default()
/// };
/// assert_eq!(options.fallback_description, "Link shared by friend");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Upper bound for a single fetch route, connection through body.
    ///
    /// A route that exceeds it counts as failed and the next route is tried.
    ///
    /// Default: 8 seconds
    #[serde(rename = "route_timeout_secs", with = "duration_secs")]
    pub route_timeout: Duration,

    /// `User-Agent` header sent with every route request.
    ///
    /// Default: `linkshelf/<crate version>`
    pub user_agent: String,

    /// `Accept` header sent with every route request.
    ///
    /// Default: `application/json, text/plain, */*`
    pub accept_header: String,

    /// Description substituted when extraction yields none. Never blank.
    ///
    /// Default: `Link shared by friend`
    #[serde(with = "non_blank")]
    pub fallback_description: String,

    /// Keep trying later routes when a route returns markup without a usable
    /// title or description.
    ///
    /// When disabled, the first route that returns content is final and
    /// unusable content goes straight to the fallback record.
    ///
    /// Default: `true`
    pub continue_on_unusable: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            route_timeout: Duration::from_secs(8),
            user_agent: concat!("linkshelf/", env!("CARGO_PKG_VERSION")).to_string(),
            accept_header: DEFAULT_ACCEPT.to_string(),
            fallback_description: DEFAULT_FALLBACK_DESCRIPTION.to_string(),
            continue_on_unusable: true,
        }
    }
}

impl Options {
    /// Load options from a JSON document. Missing fields keep their defaults.
    ///
    /// ```rust
    /// use linkshelf::Options;
    ///
    /// let options = Options::from_json(r#"{"route_timeout_secs": 3}"#)?;
    /// assert_eq!(options.route_timeout.as_secs(), 3);
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        if !secs.is_finite() || secs <= 0.0 {
            return Err(serde::de::Error::custom("route timeout must be a positive number of seconds"));
        }
        Ok(Duration::from_secs_f64(secs))
    }
}

mod non_blank {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        if value.trim().is_empty() {
            return Err(serde::de::Error::custom("fallback description must not be blank"));
        }
        Ok(value)
    }
}
