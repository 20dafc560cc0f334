//! Tracing setup for the host application.
//!
//! Set `RUST_LOG` to override the default filter, e.g.
//! `RUST_LOG=cedar_core=trace`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,cedar=debug";

/// Initializes the tracing subscriber.
///
/// Returns `false` if a global subscriber was already installed, which
/// happens when the host sets up its own logging first.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
