//! # Money Module
//!
//! The two amount types the checkout deals with.
//!
//! ## Two Currencies, Two Types
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRIMARY (USD)                     SECONDARY (LBP)                      │
//! │  ─────────────                     ───────────────                      │
//! │  Money(i64)                        SecondaryAmount(i64)                 │
//! │  integer cents                     whole pounds (no subunit)            │
//! │  authoritative, stored on lines    display / typed input only           │
//! │                                                                         │
//! │  $110.40  ==  Money(11040)         9,880,800 LBP == SecondaryAmount(..) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keeping them as distinct types means a pound value can never be written
//! into a payment line by accident: the only bridge between them is
//! [`ExchangeRate`](crate::rate::ExchangeRate).
//!
//! ## Usage
//! ```rust
//! use cedar_core::money::{Money, SecondaryAmount};
//!
//! let due = Money::from_cents(11040); // $110.40
//! assert_eq!(due.to_string(), "$110.40");
//!
//! let typed = SecondaryAmount::from_units(9_880_800);
//! assert_eq!(typed.to_string(), "9,880,800");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::format::group_digits;

/// Rounds to a whole number, half away from zero. Out-of-range values
/// collapse to zero.
pub(crate) fn round_to_i64(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

// =============================================================================
// Money Type
// =============================================================================

/// A primary-currency (USD) amount in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: remaining due and change can go negative in the host
///   model; secondary projections clamp with [`Money::non_negative`]
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a dollar decimal, rounding to the nearest
    /// cent (half away from zero).
    ///
    /// ## Example
    /// ```rust
    /// use cedar_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let amount = Money::from_decimal(Decimal::new(111_7318, 4)); // 111.7318
    /// assert_eq!(amount.cents(), 11173);
    /// ```
    pub fn from_decimal(dollars: Decimal) -> Self {
        dollars
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|cents| Money(round_to_i64(cents)))
            .unwrap_or_default()
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the amount as an exact two-place decimal.
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Clamps negative amounts to zero.
    ///
    /// Secondary-currency text is only ever produced for non-negative
    /// amounts, so every conversion funnels through here first.
    #[inline]
    pub const fn non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            Money(self.0)
        }
    }
}

/// Debug-friendly `$12.34` rendering. Use
/// [`format_primary`](crate::format::format_primary) for a configurable symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Secondary Amount
// =============================================================================

/// A secondary-currency (LBP) amount in whole units.
///
/// The pound has no subunit in practice, so there is nothing below the unit
/// to track. Values are never negative: constructors clamp at zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct SecondaryAmount(i64);

impl SecondaryAmount {
    /// Creates an amount from whole units. Negative values become zero.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        if units < 0 {
            SecondaryAmount(0)
        } else {
            SecondaryAmount(units)
        }
    }

    /// Creates an amount from a decimal, rounding to a whole unit.
    ///
    /// ## Example
    /// ```rust
    /// use cedar_core::money::SecondaryAmount;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(SecondaryAmount::from_decimal(Decimal::new(15, 1)).units(), 2);
    /// assert_eq!(SecondaryAmount::from_decimal(Decimal::new(-5, 0)).units(), 0);
    /// ```
    pub fn from_decimal(value: Decimal) -> Self {
        SecondaryAmount::from_units(round_to_i64(value))
    }

    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        SecondaryAmount(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

/// Grouped en-US digits, e.g. `9,880,800`.
impl fmt::Display for SecondaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group_digits(self.0))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
