//! # Payment Methods and Lines
//!
//! Classification of payment methods into USD and LBP kinds, the trait the
//! host's payment lines implement, and a plain [`PaymentLine`] for hosts (and
//! tests) that don't have their own.
//!
//! ## Classification
//! A method is LBP-kind when its display name contains the marker word,
//! ignoring case:
//! ```text
//!   "Cash (LBP)"   ──► Secondary
//!   "cash lbp"     ──► Secondary
//!   "Cash"         ──► Primary
//!   "Card (USD)"   ──► Primary
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::types::CurrencyKind;
use crate::SECONDARY_CASH_METHOD_NAME;

/// Classifies a method display name against a marker, case-insensitively.
///
/// ## Example
/// ```rust
/// use cedar_core::payment::classify;
/// use cedar_core::types::CurrencyKind;
///
/// assert_eq!(classify("Cash (LBP)", "LBP"), CurrencyKind::Secondary);
/// assert_eq!(classify("Bank card", "LBP"), CurrencyKind::Primary);
/// ```
pub fn classify(method_name: &str, marker: &str) -> CurrencyKind {
    let marker = marker.trim();
    if !marker.is_empty() && method_name.to_lowercase().contains(&marker.to_lowercase()) {
        CurrencyKind::Secondary
    } else {
        CurrencyKind::Primary
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// A payment method configured on a register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    /// Whether the cashier counts this method in the till at closing.
    pub is_cash_count: bool,
}

impl PaymentMethod {
    pub fn new(name: impl Into<String>) -> Self {
        PaymentMethod {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            is_cash_count: false,
        }
    }

    /// The `Cash (LBP)` method every register gets.
    pub fn secondary_cash() -> Self {
        PaymentMethod {
            is_cash_count: true,
            ..PaymentMethod::new(SECONDARY_CASH_METHOD_NAME)
        }
    }

    #[inline]
    pub fn kind(&self, marker: &str) -> CurrencyKind {
        classify(&self.name, marker)
    }
}

/// Makes sure a register's method list contains a `Cash (LBP)` method.
///
/// An existing method whose name contains `Cash (LBP)` (any case) is reused;
/// otherwise one is appended. Returns `true` when a method was added.
pub fn ensure_secondary_cash(methods: &mut Vec<PaymentMethod>) -> bool {
    let wanted = SECONDARY_CASH_METHOD_NAME.to_lowercase();
    if methods
        .iter()
        .any(|m| m.name.to_lowercase().contains(&wanted))
    {
        return false;
    }

    let method = PaymentMethod::secondary_cash();
    info!(method_id = %method.id, "Linking {} payment method", SECONDARY_CASH_METHOD_NAME);
    methods.push(method);
    true
}

// =============================================================================
// Payment Line Handle
// =============================================================================

/// The host's payment line, as seen by the coordinator.
///
/// The host owns line creation, removal and selection. The coordinator reads
/// everything and writes only the stored amount, and only while
/// [`is_selected`](PaymentLineHandle::is_selected) is true.
pub trait PaymentLineHandle {
    /// Stable identifier, unique within the order.
    fn line_id(&self) -> &str;

    /// Display name of the line's payment method.
    fn method_name(&self) -> &str;

    /// The stored amount, always in dollars.
    fn amount(&self) -> Money;

    fn is_selected(&self) -> bool;

    /// The host's amount-update path.
    fn set_amount(&mut self, amount: Money);
}

// =============================================================================
// Payment Line
// =============================================================================

/// A minimal host-side payment line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLine {
    pub id: String,
    pub method: PaymentMethod,
    pub amount: Money,
    pub selected: bool,
}

impl PaymentLine {
    /// Creates a selected line, pre-filled with `amount` the way POS hosts
    /// pre-fill a new line with the remaining due.
    pub fn new(method: PaymentMethod, amount: Money) -> Self {
        PaymentLine {
            id: Uuid::new_v4().to_string(),
            method,
            amount,
            selected: true,
        }
    }
}

impl PaymentLineHandle for PaymentLine {
    fn line_id(&self) -> &str {
        &self.id
    }

    fn method_name(&self) -> &str {
        &self.method.name
    }

    fn amount(&self) -> Money {
        self.amount
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
