//! # Config Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Config Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │      I/O        │  │     Format      │  │       Content           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Io             │  │  Parse          │  │  Invalid                │ │
//! │  │  NoConfigPath   │  │  Serialize      │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cedar_core::ValidationError;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading, validating or saving `register.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for [`RegisterConfig`](crate::RegisterConfig).
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field holds a value the register cannot run with.
    #[error("Invalid register configuration: {0}")]
    Invalid(#[from] ValidationError),

    /// No explicit path was given and the platform has no config directory.
    #[error("No config path available")]
    NoConfigPath,
}
