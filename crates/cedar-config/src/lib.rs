//! # cedar-config: Register Configuration
//!
//! Loads a register's currency settings (`register.toml` plus `CEDAR_*`
//! environment overrides) and turns them into the context and coordinator
//! the payment screen runs on.
//!
//! ```rust,no_run
//! use cedar_config::{init_tracing, RegisterConfig};
//!
//! init_tracing();
//! let config = RegisterConfig::load_or_default(None);
//! let ctx = config.exchange_context();
//! let coordinator = config.coordinator();
//! # let _ = (ctx, coordinator);
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::{RegisterConfig, RegisterSection};
pub use error::{ConfigError, ConfigResult};
pub use logging::init_tracing;
