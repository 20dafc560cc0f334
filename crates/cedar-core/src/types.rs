//! # Domain Types
//!
//! The records the core reads from the host POS.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │ CurrencySettings │   │   OrderTotals    │   │  CurrencyKind    │    │
//! │  │ ──────────────── │   │ ──────────────── │   │ ──────────────── │    │
//! │  │ lbp_usd_rate     │   │ total_due        │   │ Primary   (USD)  │    │
//! │  │ display_lbp_total│   │ remaining_due    │   │ Secondary (LBP)  │    │
//! │  │ secondary_marker │   │ change           │   └──────────────────┘    │
//! │  └──────────────────┘   └──────────────────┘                           │
//! │                                                                         │
//! │  ┌──────────────────┐                                                   │
//! │  │  CurrencyLabels  │   "$", "USD", "LBP" for label text               │
//! │  └──────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{DEFAULT_SECONDARY_MARKER, DEFAULT_SECONDARY_RATE};

// =============================================================================
// Currency Kind
// =============================================================================

/// Which currency a payment line is typed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyKind {
    /// Typed and stored in dollars. Pass-through.
    #[default]
    Primary,
    /// Typed in pounds, stored in dollars after one conversion.
    Secondary,
}

impl CurrencyKind {
    #[inline]
    pub fn is_secondary(&self) -> bool {
        matches!(self, CurrencyKind::Secondary)
    }
}

// =============================================================================
// Currency Settings
// =============================================================================

/// The currency fields of a register (or order) configuration record.
///
/// Every field is optional because the host may hand us a record that is
/// half loaded during screen transitions. [`crate::rate::resolve`] fills the
/// gaps with fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CurrencySettings {
    /// Pounds per dollar, e.g. `89500.00`.
    #[serde(rename = "lbp_usd_rate")]
    #[ts(as = "Option<String>")]
    pub rate: Option<Decimal>,

    /// Whether LBP amounts are shown at all.
    #[serde(rename = "display_lbp_total")]
    pub display_secondary: Option<bool>,

    /// Marker word that flags a payment method as LBP. Defaults to `"LBP"`.
    pub secondary_marker: Option<String>,
}

impl CurrencySettings {
    /// Defaults a freshly created register starts with: 89,500 and display on.
    pub fn register_defaults() -> Self {
        CurrencySettings {
            rate: Some(Decimal::from(DEFAULT_SECONDARY_RATE)),
            display_secondary: Some(true),
            secondary_marker: None,
        }
    }

    /// Fills every absent field from `fallback`.
    pub fn or(self, fallback: CurrencySettings) -> Self {
        CurrencySettings {
            rate: self.rate.or(fallback.rate),
            display_secondary: self.display_secondary.or(fallback.display_secondary),
            secondary_marker: self.secondary_marker.or(fallback.secondary_marker),
        }
    }

    /// The marker to classify payment methods with.
    pub fn marker(&self) -> &str {
        self.secondary_marker
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_SECONDARY_MARKER)
    }
}

// =============================================================================
// Currency Labels
// =============================================================================

/// Symbols and codes used when building label text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct CurrencyLabels {
    pub primary_symbol: String,
    pub primary_code: String,
    pub secondary_code: String,
}

impl Default for CurrencyLabels {
    fn default() -> Self {
        CurrencyLabels {
            primary_symbol: "$".to_string(),
            primary_code: "USD".to_string(),
            secondary_code: "LBP".to_string(),
        }
    }
}

// =============================================================================
// Order View
// =============================================================================

/// Read access to the host order's dollar figures.
///
/// The host computes these (taxes, discounts, payments applied); the core
/// only projects them into pounds.
pub trait OrderView {
    fn total_due(&self) -> Money;
    fn remaining_due(&self) -> Money;
    fn change(&self) -> Money;
}

/// A plain snapshot of an order's figures, for hosts that would rather push
/// values than implement [`OrderView`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub total_due: Money,
    pub remaining_due: Money,
    pub change: Money,
}

impl OrderTotals {
    /// Derives remaining due and change from the due amount and what has
    /// been paid so far.
    ///
    /// ## Example
    /// ```rust
    /// use cedar_core::money::Money;
    /// use cedar_core::types::OrderTotals;
    ///
    /// let totals = OrderTotals::from_payments(Money::from_cents(11040), Money::from_cents(11173));
    /// assert_eq!(totals.remaining_due, Money::zero());
    /// assert_eq!(totals.change.cents(), 133);
    /// ```
    pub fn from_payments(total_due: Money, paid: Money) -> Self {
        let balance = total_due - paid;
        OrderTotals {
            total_due,
            remaining_due: balance.non_negative(),
            change: (paid - total_due).non_negative(),
        }
    }
}

impl OrderView for OrderTotals {
    fn total_due(&self) -> Money {
        self.total_due
    }

    fn remaining_due(&self) -> Money {
        self.remaining_due
    }

    fn change(&self) -> Money {
        self.change
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
