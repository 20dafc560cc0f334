//! # Rate Resolver
//!
//! Turns whatever currency settings the host has in scope into an
//! [`ExchangeContext`], and provides the two conversion primitives every
//! other module builds on.
//!
//! ## Resolution Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CurrencySettings field        Resolved as                              │
//! │  ─────────────────────         ───────────                              │
//! │  rate = Some(r), r > 0    ──►  r                                        │
//! │  rate = None / 0 / < 0    ──►  89,500 (DEFAULT_SECONDARY_RATE)          │
//! │  display = Some(b)        ──►  b                                        │
//! │  display = None           ──►  false                                    │
//! │  no settings at all       ──►  (89,500, false)                          │
//! │                                                                         │
//! │  resolve_chain: rate from the first valid candidate,                    │
//! │                 display on if any candidate turns it on                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Resolution never fails and has no side effects, so screens call it on
//! every render.
//!
//! ## Conversions
//! ```text
//!   to_secondary(a, r) = round(a × r)                 whole pounds
//!   to_primary(s, r)   = round(s × 100 / r) / 100     dollars and cents
//! ```
//! Both round half away from zero and treat negative input as zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::{round_to_i64, Money, SecondaryAmount};
use crate::types::CurrencySettings;
use crate::DEFAULT_SECONDARY_RATE;

// =============================================================================
// Exchange Rate
// =============================================================================

/// Units of secondary currency per one unit of primary currency.
///
/// Always strictly positive, so dividing by it is always safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    /// Creates a rate, rejecting zero and negative values.
    ///
    /// ## Example
    /// ```rust
    /// use cedar_core::rate::ExchangeRate;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(ExchangeRate::new(Decimal::from(89_500)).is_ok());
    /// assert!(ExchangeRate::new(Decimal::ZERO).is_err());
    /// ```
    pub fn new(rate: Decimal) -> CoreResult<Self> {
        if rate <= Decimal::ZERO {
            return Err(CoreError::InvalidRate {
                rate: rate.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(ExchangeRate(rate))
    }

    /// The documented fallback used whenever no valid rate is configured.
    pub fn fallback() -> Self {
        ExchangeRate(Decimal::from(DEFAULT_SECONDARY_RATE))
    }

    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Converts dollars to pounds: `round(amount × rate)`.
    ///
    /// ## Example
    /// ```rust
    /// use cedar_core::money::Money;
    /// use cedar_core::rate::ExchangeRate;
    ///
    /// let rate = ExchangeRate::fallback(); // 89,500
    /// let lbp = rate.to_secondary(Money::from_cents(11040));
    /// assert_eq!(lbp.to_string(), "9,880,800");
    /// ```
    pub fn to_secondary(&self, amount: Money) -> SecondaryAmount {
        amount
            .non_negative()
            .to_decimal()
            .checked_mul(self.0)
            .map(SecondaryAmount::from_decimal)
            .unwrap_or_default()
    }

    /// Converts pounds to dollars: `round(amount / rate × 100) / 100`.
    ///
    /// This is the one conversion in the direction of stored amounts; the
    /// coordinator calls it exactly once per keystroke on an LBP line.
    ///
    /// ## Example
    /// ```rust
    /// use cedar_core::money::SecondaryAmount;
    /// use cedar_core::rate::ExchangeRate;
    ///
    /// let rate = ExchangeRate::fallback();
    /// let usd = rate.to_primary(SecondaryAmount::from_units(10_000_000));
    /// assert_eq!(usd.cents(), 11173); // $111.73
    /// ```
    pub fn to_primary(&self, amount: SecondaryAmount) -> Money {
        amount
            .to_decimal()
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(self.0))
            .map(|cents| Money::from_cents(round_to_i64(cents)))
            .unwrap_or_default()
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        ExchangeRate::fallback()
    }
}

impl TryFrom<Decimal> for ExchangeRate {
    type Error = CoreError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        ExchangeRate::new(value)
    }
}

impl From<ExchangeRate> for Decimal {
    fn from(rate: ExchangeRate) -> Self {
        rate.0
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Free-function form of [`ExchangeRate::to_secondary`].
#[inline]
pub fn to_secondary(amount: Money, rate: ExchangeRate) -> SecondaryAmount {
    rate.to_secondary(amount)
}

/// Free-function form of [`ExchangeRate::to_primary`].
#[inline]
pub fn to_primary(amount: SecondaryAmount, rate: ExchangeRate) -> Money {
    rate.to_primary(amount)
}

// =============================================================================
// Exchange Context
// =============================================================================

/// Resolved snapshot of the currency settings for one request/render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeContext {
    #[ts(as = "String")]
    pub rate: ExchangeRate,
    pub display_enabled: bool,
}

impl ExchangeContext {
    pub fn new(rate: ExchangeRate, display_enabled: bool) -> Self {
        ExchangeContext {
            rate,
            display_enabled,
        }
    }

    /// The context used when nothing is configured: fallback rate, display off.
    pub fn disabled() -> Self {
        ExchangeContext::new(ExchangeRate::fallback(), false)
    }
}

impl Default for ExchangeContext {
    fn default() -> Self {
        ExchangeContext::disabled()
    }
}

// =============================================================================
// Resolution
// =============================================================================

fn valid_rate(settings: &CurrencySettings) -> Option<ExchangeRate> {
    settings.rate.and_then(|r| ExchangeRate::new(r).ok())
}

/// Resolves a single (possibly absent) settings record.
///
/// ## Example
/// ```rust
/// use cedar_core::rate::resolve;
/// use cedar_core::types::CurrencySettings;
///
/// let ctx = resolve(None);
/// assert!(!ctx.display_enabled);
/// assert_eq!(ctx.rate.to_string(), "89500");
///
/// let ctx = resolve(Some(&CurrencySettings::register_defaults()));
/// assert!(ctx.display_enabled);
/// ```
pub fn resolve(settings: Option<&CurrencySettings>) -> ExchangeContext {
    resolve_chain([settings])
}

/// Resolves from an ordered list of candidate records, most specific first
/// (order-level settings, then register-level).
///
/// The rate comes from the first candidate carrying a valid one, so an order
/// without its own rate still picks up the register's. Display is enabled
/// when any candidate turns it on.
pub fn resolve_chain<'a, I>(candidates: I) -> ExchangeContext
where
    I: IntoIterator<Item = Option<&'a CurrencySettings>>,
{
    let mut rate = None;
    let mut display_enabled = false;

    for settings in candidates.into_iter().flatten() {
        if rate.is_none() {
            rate = valid_rate(settings);
        }
        display_enabled |= settings.display_secondary.unwrap_or(false);
    }

    let rate = rate.unwrap_or_else(|| {
        trace!(
            fallback = DEFAULT_SECONDARY_RATE,
            "No valid secondary rate configured, using fallback"
        );
        ExchangeRate::fallback()
    });

    ExchangeContext::new(rate, display_enabled)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn settings(rate: Option<Decimal>, display: Option<bool>) -> CurrencySettings {
        CurrencySettings {
            rate,
            display_secondary: display,
            ..Default::default()
        }
    }

    #[test]
    fn test_rate_rejects_non_positive() {
        assert!(ExchangeRate::new(dec!(0)).is_err());
        assert!(ExchangeRate::new(dec!(-1)).is_err());
        assert!(ExchangeRate::new(dec!(0.0001)).is_ok());
    }

    #[test]
    fn test_to_secondary_scenario_a() {
        let rate = ExchangeRate::new(dec!(89500)).unwrap();
        assert_eq!(rate.to_secondary(Money::from_cents(11040)).units(), 9_880_800);
    }

    #[test]
    fn test_to_secondary_negative_is_zero() {
        let rate = ExchangeRate::fallback();
        assert!(rate.to_secondary(Money::from_cents(-500)).is_zero());
    }

    #[test]
    fn test_to_secondary_rounds_half_away_from_zero() {
        // $0.01 × 150.5 = 1.505 → 2
        let rate = ExchangeRate::new(dec!(150.5)).unwrap();
        assert_eq!(rate.to_secondary(Money::from_cents(1)).units(), 2);
    }

    #[test]
    fn test_to_primary_exact_and_rounded() {
        let rate = ExchangeRate::fallback();
        assert_eq!(rate.to_primary(SecondaryAmount::from_units(9_880_800)).cents(), 11040);
        assert_eq!(rate.to_primary(SecondaryAmount::from_units(10_000_000)).cents(), 11173);
        assert_eq!(rate.to_primary(SecondaryAmount::zero()).cents(), 0);
    }

    #[test]
    fn test_round_trip_within_one_cent() {
        for rate in [dec!(1507.5), dec!(89500), dec!(100000)] {
            let rate = ExchangeRate::new(rate).unwrap();
            for cents in [0, 1, 99, 1_000, 11_040, 123_457, 9_999_999] {
                let original = Money::from_cents(cents);
                let back = rate.to_primary(rate.to_secondary(original));
                assert!(
                    (back.cents() - original.cents()).abs() <= 1,
                    "rate {rate}: {original} came back as {back}"
                );
            }
        }
    }

    #[test]
    fn test_resolve_missing_settings() {
        let ctx = resolve(None);
        assert_eq!(ctx, ExchangeContext::disabled());
    }

    #[test]
    fn test_resolve_invalid_rate_falls_back() {
        let ctx = resolve(Some(&settings(Some(dec!(0)), Some(true))));
        assert_eq!(ctx.rate, ExchangeRate::fallback());
        assert!(ctx.display_enabled);

        let ctx = resolve(Some(&settings(Some(dec!(-3)), None)));
        assert_eq!(ctx.rate, ExchangeRate::fallback());
        assert!(!ctx.display_enabled);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let s = settings(Some(dec!(90000)), Some(true));
        assert_eq!(resolve(Some(&s)), resolve(Some(&s)));
    }

    #[test]
    fn test_resolve_chain_rate_from_first_valid_candidate() {
        let order = settings(Some(dec!(0)), None);
        let register = settings(Some(dec!(90000)), Some(true));

        let ctx = resolve_chain([Some(&order), Some(&register)]);
        assert_eq!(ctx.rate.as_decimal(), dec!(90000));

        let order = settings(Some(dec!(91000)), None);
        let ctx = resolve_chain([Some(&order), Some(&register)]);
        assert_eq!(ctx.rate.as_decimal(), dec!(91000));
    }

    #[test]
    fn test_resolve_chain_display_on_if_any_candidate_enables_it() {
        let order = settings(None, Some(false));
        let register = settings(Some(dec!(89500)), Some(true));

        let ctx = resolve_chain([Some(&order), Some(&register)]);
        assert!(ctx.display_enabled);

        let ctx = resolve_chain([Some(&register), Some(&order)]);
        assert!(ctx.display_enabled);

        let off = settings(None, Some(false));
        let ctx = resolve_chain([Some(&order), Some(&off), None]);
        assert!(!ctx.display_enabled);
    }

    #[test]
    fn test_rate_serde_rejects_zero() {
        let ok: ExchangeRate = serde_json::from_str("\"89500\"").unwrap();
        assert_eq!(ok, ExchangeRate::fallback());
        assert!(serde_json::from_str::<ExchangeRate>("\"0\"").is_err());
    }
}
