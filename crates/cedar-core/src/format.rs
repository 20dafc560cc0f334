//! # Display Formatting
//!
//! String rendering shared by the coordinator projections and the display
//! labels. Output matches an en-US locale: `,` groups thousands, `.` marks
//! cents, and pounds never show decimals.

use crate::money::{Money, SecondaryAmount};
use crate::rate::ExchangeRate;

/// Groups an integer's digits in threes with `,`.
///
/// ## Example
/// ```rust
/// use cedar_core::format::group_digits;
///
/// assert_eq!(group_digits(9_880_800), "9,880,800");
/// assert_eq!(group_digits(-1_500), "-1,500");
/// assert_eq!(group_digits(999), "999");
/// ```
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Formats a pound amount, e.g. `9,880,800`.
#[inline]
pub fn format_secondary(amount: SecondaryAmount) -> String {
    group_digits(amount.units())
}

/// Formats the rate as whole grouped pounds per dollar, e.g. `89,500`.
///
/// Fractional rates are rounded for display only; conversions always use the
/// exact rate.
#[inline]
pub fn format_rate(rate: ExchangeRate) -> String {
    group_digits(SecondaryAmount::from_decimal(rate.as_decimal()).units())
}

/// Formats a dollar amount with the given symbol and two decimals.
///
/// ## Example
/// ```rust
/// use cedar_core::format::format_primary;
/// use cedar_core::money::Money;
///
/// assert_eq!(format_primary(Money::from_cents(5000), "$"), "$50.00");
/// assert_eq!(format_primary(Money::from_cents(-133), "$"), "-$1.33");
/// ```
pub fn format_primary(amount: Money, symbol: &str) -> String {
    format!(
        "{}{}{}.{:02}",
        if amount.is_negative() { "-" } else { "" },
        symbol,
        amount.dollars().abs(),
        amount.cents_part()
    )
}
