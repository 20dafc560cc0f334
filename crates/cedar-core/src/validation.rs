//! # Validation Module
//!
//! Two kinds of checking live here:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Keystroke payloads          normalize_* ─► never fail                  │
//! │  ──────────────────                                                     │
//! │  "9,880,800"   ──► 9880800                                              │
//! │  "abc", "", -5 ──► 0                                                    │
//! │  NaN, ∞        ──► 0                                                    │
//! │                                                                         │
//! │  Configuration               validate_* ─► ValidationResult             │
//! │  ─────────────                                                          │
//! │  lbp_usd_rate <= 0  ──► MustBePositive                                  │
//! │  marker "" / long   ──► Required / TooLong                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cedar_core::validation::{normalize_secondary_input, AmountInput};
//!
//! assert_eq!(normalize_secondary_input("9,880,800").units(), 9_880_800);
//! assert_eq!(normalize_secondary_input(AmountInput::Number(f64::NAN)).units(), 0);
//! ```

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::{Money, SecondaryAmount};
use crate::types::CurrencySettings;
use crate::MAX_MARKER_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Amount Input
// =============================================================================

/// A numeric payload as it arrives from the numpad or the host.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    /// The numpad buffer, e.g. `"9880800"` or `"12.5"`.
    Text(String),
    /// A float handed over by the host model.
    Number(f64),
    /// An already-parsed decimal.
    Exact(Decimal),
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<i64> for AmountInput {
    fn from(value: i64) -> Self {
        AmountInput::Exact(Decimal::from(value))
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        AmountInput::Exact(value)
    }
}

/// Parses numpad text, tolerating grouping separators and whitespace.
///
/// Returns `None` for anything that isn't a plain decimal number.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '_')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}

/// Reduces any payload to a finite, non-negative decimal. Everything else
/// becomes zero.
pub fn normalize_amount(input: impl Into<AmountInput>) -> Decimal {
    let value = match input.into() {
        AmountInput::Text(text) => parse_amount(&text),
        AmountInput::Number(n) if n.is_finite() => Decimal::from_f64(n),
        AmountInput::Number(_) => None,
        AmountInput::Exact(d) => Some(d),
    };

    match value {
        Some(v) if v > Decimal::ZERO => v,
        _ => Decimal::ZERO,
    }
}

/// Normalizes a payload typed on an LBP line to whole pounds.
pub fn normalize_secondary_input(input: impl Into<AmountInput>) -> SecondaryAmount {
    SecondaryAmount::from_decimal(normalize_amount(input))
}

/// Normalizes a payload typed on a USD line to cents.
pub fn normalize_primary_input(input: impl Into<AmountInput>) -> Money {
    Money::from_decimal(normalize_amount(input))
}

// =============================================================================
// Configuration Validators
// =============================================================================

/// Validates a configured rate.
///
/// ## Example
/// ```rust
/// use cedar_core::validation::validate_rate;
/// use rust_decimal::Decimal;
///
/// assert!(validate_rate(Decimal::from(89_500)).is_ok());
/// assert!(validate_rate(Decimal::ZERO).is_err());
/// ```
pub fn validate_rate(rate: Decimal) -> ValidationResult<()> {
    if rate <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "lbp_usd_rate".to_string(),
        });
    }
    Ok(())
}

/// Validates the payment-method marker word.
pub fn validate_marker(marker: &str) -> ValidationResult<()> {
    let marker = marker.trim();

    if marker.is_empty() {
        return Err(ValidationError::Required {
            field: "secondary_marker".to_string(),
        });
    }

    if marker.chars().count() > MAX_MARKER_LEN {
        return Err(ValidationError::TooLong {
            field: "secondary_marker".to_string(),
            max: MAX_MARKER_LEN,
        });
    }

    Ok(())
}

/// Validates every field that is present on a settings record.
///
/// Absent fields are fine, the resolver falls back for them.
pub fn validate_currency_settings(settings: &CurrencySettings) -> ValidationResult<()> {
    if let Some(rate) = settings.rate {
        validate_rate(rate)?;
    }
    if let Some(marker) = settings.secondary_marker.as_deref() {
        validate_marker(marker)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
