//! # Error Types
//!
//! Domain-specific error types for cedar-core.
//!
//! ## Where Errors Can Occur
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cedar-core errors (this file)                                         │
//! │  ├── CoreError        - Explicit constructors (ExchangeRate::new)      │
//! │  └── ValidationError  - Settings validation failures                   │
//! │                                                                         │
//! │  cedar-config errors (separate crate)                                  │
//! │  └── ConfigError      - Loading/saving register.toml                   │
//! │                                                                         │
//! │  Event + projection API: NEVER fails                                   │
//! │  (bad input → 0, missing config → fallback, missing order → "0")       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A broken LBP display must never block a USD checkout, so the coordinator
//! and resolver recover locally instead of returning these.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Exchange rate is not a positive number.
    ///
    /// ## When This Occurs
    /// - `ExchangeRate::new(0)` or a negative rate
    /// - A register config with `lbp_usd_rate = 0` being validated
    #[error("Invalid exchange rate {rate}: {reason}")]
    InvalidRate { rate: String, reason: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
