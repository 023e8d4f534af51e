//! Logging init for the command-line front end.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to binaries.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,linkshelf=debug";

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Stdout stays free for machine-readable output. Calling this twice is a
/// no-op rather than a panic.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
