//! # Dual-Price Labels
//!
//! Label text for the screens around checkout that show LBP next to USD:
//! product cards, order lines, order totals, attribute price extras, the
//! configurator title, receipts and the closing popup.
//!
//! ```text
//!   Product card      $50.00 │ 4,475,000 LBP
//!   Price extra       + $50.00 (4,475,000 LBP)
//!   Dialog title      Burger | $50.00 | 4,475,000 LBP
//!   Footer            1 USD = 89,500 LBP
//! ```
//!
//! All of these go through the same rate primitive as the payment screen and
//! return plain USD text (or nothing) when LBP display is off.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::format::{format_primary, format_rate, format_secondary};
use crate::money::Money;
use crate::rate::ExchangeContext;
use crate::types::CurrencyLabels;

/// `"4,475,000 LBP"`, or `None` when LBP display is off.
pub fn secondary_label(ctx: &ExchangeContext, labels: &CurrencyLabels, amount: Money) -> Option<String> {
    ctx.display_enabled.then(|| {
        format!(
            "{} {}",
            format_secondary(ctx.rate.to_secondary(amount)),
            labels.secondary_code
        )
    })
}

/// A price rendered in both currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DualPrice {
    pub primary: String,
    pub secondary: Option<String>,
}

impl DualPrice {
    /// ## Example
    /// ```rust
    /// use cedar_core::display::DualPrice;
    /// use cedar_core::money::Money;
    /// use cedar_core::rate::{ExchangeContext, ExchangeRate};
    /// use cedar_core::types::CurrencyLabels;
    ///
    /// let ctx = ExchangeContext::new(ExchangeRate::fallback(), true);
    /// let price = DualPrice::new(&ctx, &CurrencyLabels::default(), Money::from_cents(5000));
    /// assert_eq!(price.primary, "$50.00");
    /// assert_eq!(price.secondary.as_deref(), Some("4,475,000 LBP"));
    /// ```
    pub fn new(ctx: &ExchangeContext, labels: &CurrencyLabels, amount: Money) -> Self {
        DualPrice {
            primary: format_primary(amount, &labels.primary_symbol),
            secondary: secondary_label(ctx, labels, amount),
        }
    }
}

/// Attribute price-extra text: `"+ $50.00 (4,475,000 LBP)"`.
///
/// The sign is taken from `extra`; both amounts are shown unsigned.
pub fn price_extra_label(ctx: &ExchangeContext, labels: &CurrencyLabels, extra: Money) -> String {
    let sign = if extra.is_negative() { "- " } else { "+ " };
    let magnitude = extra.abs();
    let primary = format_primary(magnitude, &labels.primary_symbol);

    match secondary_label(ctx, labels, magnitude) {
        Some(secondary) => format!("{sign}{primary} ({secondary})"),
        None => format!("{sign}{primary}"),
    }
}

/// Appends the pound total to a dialog title: `"Burger | 4,475,000 LBP"`.
pub fn title_with_secondary(
    title: &str,
    ctx: &ExchangeContext,
    labels: &CurrencyLabels,
    amount: Money,
) -> String {
    match secondary_label(ctx, labels, amount) {
        Some(secondary) => format!("{title} | {secondary}"),
        None => title.to_string(),
    }
}

/// Rate footer: `"1 USD = 89,500 LBP"`.
pub fn rate_footer(ctx: &ExchangeContext, labels: &CurrencyLabels) -> Option<String> {
    ctx.display_enabled.then(|| {
        format!(
            "1 {} = {} {}",
            labels.primary_code,
            format_rate(ctx.rate),
            labels.secondary_code
        )
    })
}
