//! # Dual-Currency Payment Coordinator
//!
//! Sits between the payment screen and the host's payment lines, and makes
//! sure every amount typed on an LBP line is converted to dollars exactly
//! once before it is stored.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                 line_created / line_selected (LBP line)                 │
//! │   ┌──────┐ ───────────────────────────────────────► ┌──────────────────┐│
//! │   │ Idle │                                          │ EditingSecondary ││
//! │   └──────┘ ◄─────────────────────────────────────── └──────────────────┘│
//! │      │  ▲        line_removed / clear_selection        │   ▲  amount_   │
//! │      │  │                                              │   │  entered   │
//! │      │  │                                              └───┘  (convert) │
//! │      │  │      line_created / line_selected (USD line)                  │
//! │      ▼  │                                                               │
//! │   ┌─────────────────┐  amount_entered (pass-through)                    │
//! │   │ EditingPrimary  │ ◄──┐                                              │
//! │   └─────────────────┘ ───┘                                              │
//! │                                                                         │
//! │  Selecting another line from any editing state re-enters the matching   │
//! │  editing state for that line with a fresh session.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Exactly-Once Rule
//! ```text
//!   typed "10000000" on Cash (LBP)
//!        │
//!        ▼
//!   normalize ──► SecondaryAmount(10,000,000)   cached in EditSession
//!        │
//!        ▼
//!   rate.to_primary ──► Money(11173)             ONE conversion
//!        │
//!        ▼
//!   line.set_amount($111.73)
//! ```
//! [`PaymentCoordinator::amount_entered`] is the only method that converts
//! towards stored amounts. Every projection below it only reads.
//!
//! ## Usage
//! ```rust
//! use cedar_core::coordinator::PaymentCoordinator;
//! use cedar_core::money::Money;
//! use cedar_core::payment::{PaymentLine, PaymentMethod};
//! use cedar_core::rate::resolve;
//! use cedar_core::types::CurrencySettings;
//!
//! let ctx = resolve(Some(&CurrencySettings::register_defaults()));
//! let mut coordinator = PaymentCoordinator::default();
//!
//! // Host adds a Cash (LBP) line pre-filled with the $110.40 due
//! let mut line = PaymentLine::new(PaymentMethod::secondary_cash(), Money::from_cents(11040));
//! coordinator.line_created(&ctx, &mut line);
//! assert!(line.amount.is_zero());
//!
//! coordinator.amount_entered(&ctx, &mut line, "9880800");
//! assert_eq!(line.amount.cents(), 11040);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::format::{format_rate, format_secondary};
use crate::money::{Money, SecondaryAmount};
use crate::payment::{classify, PaymentLineHandle};
use crate::rate::{ExchangeContext, ExchangeRate};
use crate::types::{CurrencyKind, CurrencySettings, OrderView};
use crate::validation::{normalize_primary_input, normalize_secondary_input, AmountInput};
use crate::DEFAULT_SECONDARY_MARKER;

// =============================================================================
// Edit Phase
// =============================================================================

/// Which kind of line, if any, is currently being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditPhase {
    /// No line selected.
    #[default]
    Idle,
    /// An LBP line is selected; keystrokes are pounds.
    EditingSecondary { line_id: String },
    /// A USD line is selected; keystrokes pass through.
    EditingPrimary { line_id: String },
}

impl EditPhase {
    /// The selected line, if any.
    pub fn line_id(&self) -> Option<&str> {
        match self {
            EditPhase::Idle => None,
            EditPhase::EditingSecondary { line_id } | EditPhase::EditingPrimary { line_id } => {
                Some(line_id)
            }
        }
    }

    fn for_line(kind: CurrencyKind, line_id: &str) -> Self {
        let line_id = line_id.to_string();
        match kind {
            CurrencyKind::Secondary => EditPhase::EditingSecondary { line_id },
            CurrencyKind::Primary => EditPhase::EditingPrimary { line_id },
        }
    }
}

// =============================================================================
// Edit Session
// =============================================================================

/// What has been typed on the current LBP line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EditSession {
    /// Pounds typed so far (or re-derived from the stored amount on select).
    pub raw_secondary: SecondaryAmount,

    /// Rate used by the last conversion, `None` until one happens.
    #[ts(as = "Option<String>")]
    pub last_rate: Option<ExchangeRate>,
}

impl EditSession {
    fn reset(&mut self) {
        *self = EditSession::default();
    }
}

// =============================================================================
// Amount Update
// =============================================================================

/// Result of one [`PaymentCoordinator::amount_entered`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AmountUpdate {
    pub line_id: String,
    pub kind: CurrencyKind,
    /// The dollar amount forwarded to the line, or the line's unchanged
    /// amount when nothing was written.
    pub stored: Money,
    /// The cached pound input, for LBP lines.
    pub raw_secondary: Option<SecondaryAmount>,
    /// False when the line was not selected and nothing was written.
    pub applied: bool,
}

// =============================================================================
// Payment Coordinator
// =============================================================================

/// Per-payment-screen coordinator.
///
/// Create one when the payment screen opens and drop it when the screen
/// closes. Nothing it holds outlives the screen.
#[derive(Debug, Clone)]
pub struct PaymentCoordinator {
    marker: String,
    phase: EditPhase,
    session: EditSession,
    /// Classification frozen per line the first time the line is seen.
    kinds: HashMap<String, CurrencyKind>,
}

impl Default for PaymentCoordinator {
    fn default() -> Self {
        PaymentCoordinator::new(DEFAULT_SECONDARY_MARKER)
    }
}

impl PaymentCoordinator {
    /// Creates a coordinator that treats methods named with `marker` as LBP.
    pub fn new(marker: impl Into<String>) -> Self {
        PaymentCoordinator {
            marker: marker.into(),
            phase: EditPhase::Idle,
            session: EditSession::default(),
            kinds: HashMap::new(),
        }
    }

    /// Creates a coordinator using the marker from the register settings.
    pub fn from_settings(settings: Option<&CurrencySettings>) -> Self {
        let marker = settings
            .map(CurrencySettings::marker)
            .unwrap_or(DEFAULT_SECONDARY_MARKER);
        PaymentCoordinator::new(marker)
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn phase(&self) -> &EditPhase {
        &self.phase
    }

    pub fn session(&self) -> EditSession {
        self.session
    }

    /// The frozen classification of a line seen earlier in this session.
    pub fn line_kind(&self, line_id: &str) -> Option<CurrencyKind> {
        self.kinds.get(line_id).copied()
    }

    fn classify_line<L>(&mut self, line: &L) -> CurrencyKind
    where
        L: PaymentLineHandle + ?Sized,
    {
        let marker = &self.marker;
        *self
            .kinds
            .entry(line.line_id().to_string())
            .or_insert_with(|| classify(line.method_name(), marker))
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// The host created a new payment line.
    ///
    /// An LBP line always starts at zero, whatever the host pre-filled: a
    /// dollar default sitting in a pound field would be read back as pounds.
    pub fn line_created<L>(&mut self, ctx: &ExchangeContext, line: &mut L)
    where
        L: PaymentLineHandle + ?Sized,
    {
        let kind = self.classify_line(line);
        self.session.reset();

        if !line.is_selected() {
            warn!(
                line_id = line.line_id(),
                "Created payment line is not selected, leaving amount untouched"
            );
            self.phase = EditPhase::Idle;
            return;
        }

        if kind.is_secondary() {
            line.set_amount(Money::zero());
        }
        self.phase = EditPhase::for_line(kind, line.line_id());

        debug!(
            line_id = line.line_id(),
            ?kind,
            rate = %ctx.rate,
            "Payment line created"
        );
    }

    /// The cashier focused an existing line.
    ///
    /// For an LBP line the pound buffer is re-derived from what is actually
    /// stored, so the screen shows the converted value, not stale keystrokes.
    pub fn line_selected<L>(&mut self, ctx: &ExchangeContext, line: &L)
    where
        L: PaymentLineHandle + ?Sized,
    {
        let kind = self.classify_line(line);
        self.session.reset();

        if kind.is_secondary() {
            self.session.raw_secondary = ctx.rate.to_secondary(line.amount());
        }
        self.phase = EditPhase::for_line(kind, line.line_id());

        debug!(
            line_id = line.line_id(),
            ?kind,
            raw = self.session.raw_secondary.units(),
            "Payment line selected"
        );
    }

    /// The numpad produced a new cumulative value for `line`.
    ///
    /// On an LBP line the value is pounds: it is cached, converted once and
    /// the dollar result is written. On a USD line it is written as is.
    ///
    /// An unselected line is refused before anything is touched: the phase
    /// and session stay as they were and the update reports `applied: false`.
    pub fn amount_entered<L>(
        &mut self,
        ctx: &ExchangeContext,
        line: &mut L,
        input: impl Into<AmountInput>,
    ) -> AmountUpdate
    where
        L: PaymentLineHandle + ?Sized,
    {
        if !line.is_selected() {
            warn!(
                line_id = line.line_id(),
                "Amount entered on an unselected payment line, ignoring"
            );
            let kind = self
                .line_kind(line.line_id())
                .unwrap_or_else(|| classify(line.method_name(), &self.marker));
            return AmountUpdate {
                line_id: line.line_id().to_string(),
                kind,
                stored: line.amount(),
                raw_secondary: None,
                applied: false,
            };
        }

        if self.phase.line_id() != Some(line.line_id()) {
            self.line_selected(ctx, &*line);
        }

        let kind = self.classify_line(line);
        let (stored, raw_secondary) = match kind {
            CurrencyKind::Secondary => {
                let raw = normalize_secondary_input(input);
                self.session.raw_secondary = raw;
                self.session.last_rate = Some(ctx.rate);
                (ctx.rate.to_primary(raw), Some(raw))
            }
            CurrencyKind::Primary => {
                self.session.reset();
                (normalize_primary_input(input), None)
            }
        };

        line.set_amount(stored);

        debug!(
            line_id = line.line_id(),
            ?kind,
            raw = raw_secondary.map(|r| r.units()),
            stored_cents = stored.cents(),
            "Payment amount entered"
        );

        AmountUpdate {
            line_id: line.line_id().to_string(),
            kind,
            stored,
            raw_secondary,
            applied: true,
        }
    }

    /// The host removed a line.
    pub fn line_removed(&mut self, line_id: &str) {
        self.kinds.remove(line_id);
        if self.phase.line_id() == Some(line_id) {
            self.clear_selection();
        }
    }

    /// No line is selected any more.
    pub fn clear_selection(&mut self) {
        self.phase = EditPhase::Idle;
        self.session.reset();
    }

    // =========================================================================
    // Read-only Projections
    // =========================================================================
    //
    // Each returns `None` when LBP display is off and "0" when the order is
    // not available, and none of them touch the session.

    /// Whether the screen should render LBP at all.
    #[inline]
    pub fn display_enabled(&self, ctx: &ExchangeContext) -> bool {
        ctx.display_enabled
    }

    /// Formats any dollar amount in pounds.
    pub fn format_secondary_amount(&self, ctx: &ExchangeContext, amount: Money) -> Option<String> {
        ctx.display_enabled
            .then(|| format_secondary(ctx.rate.to_secondary(amount)))
    }

    fn project(
        &self,
        ctx: &ExchangeContext,
        order: Option<&dyn OrderView>,
        pick: fn(&dyn OrderView) -> Money,
    ) -> Option<String> {
        let amount = order.map(pick).unwrap_or_default();
        self.format_secondary_amount(ctx, amount)
    }

    pub fn total_due_secondary(
        &self,
        ctx: &ExchangeContext,
        order: Option<&dyn OrderView>,
    ) -> Option<String> {
        self.project(ctx, order, |o| o.total_due())
    }

    pub fn remaining_due_secondary(
        &self,
        ctx: &ExchangeContext,
        order: Option<&dyn OrderView>,
    ) -> Option<String> {
        self.project(ctx, order, |o| o.remaining_due())
    }

    pub fn change_secondary(
        &self,
        ctx: &ExchangeContext,
        order: Option<&dyn OrderView>,
    ) -> Option<String> {
        self.project(ctx, order, |o| o.change())
    }

    /// The rate as grouped whole pounds, e.g. `89,500`.
    pub fn rate_text(&self, ctx: &ExchangeContext) -> Option<String> {
        ctx.display_enabled.then(|| format_rate(ctx.rate))
    }

    /// Pounds typed so far on the selected LBP line, zero otherwise.
    pub fn raw_secondary_input(&self) -> SecondaryAmount {
        match self.phase {
            EditPhase::EditingSecondary { .. } => self.session.raw_secondary,
            _ => SecondaryAmount::zero(),
        }
    }

    /// Dollar value of the pounds typed so far, for inline feedback.
    ///
    /// Derived from the session buffer rather than the stored amount, which
    /// may still hold the previous value while the screen re-renders.
    pub fn live_primary_equivalent(&self, ctx: &ExchangeContext) -> Money {
        ctx.rate.to_primary(self.raw_secondary_input())
    }

    /// Pound text for one payment line.
    ///
    /// The line being typed on shows the typed pounds; every other line shows
    /// its stored dollars converted.
    pub fn line_secondary_text<L>(&self, ctx: &ExchangeContext, line: &L) -> Option<String>
    where
        L: PaymentLineHandle + ?Sized,
    {
        if !ctx.display_enabled {
            return None;
        }

        let editing_this_line = matches!(
            &self.phase,
            EditPhase::EditingSecondary { line_id } if line_id == line.line_id()
        );

        let amount = if editing_this_line {
            self.session.raw_secondary
        } else {
            ctx.rate.to_secondary(line.amount())
        };
        Some(format_secondary(amount))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::{PaymentLine, PaymentMethod};
    use crate::types::OrderTotals;
    use rust_decimal_macros::dec;

    fn ctx() -> ExchangeContext {
        ExchangeContext::new(ExchangeRate::new(dec!(89500)).unwrap(), true)
    }

    fn lbp_line(prefill_cents: i64) -> PaymentLine {
        PaymentLine::new(PaymentMethod::secondary_cash(), Money::from_cents(prefill_cents))
    }

    fn usd_line(prefill_cents: i64) -> PaymentLine {
        PaymentLine::new(PaymentMethod::new("Cash"), Money::from_cents(prefill_cents))
    }

    #[test]
    fn test_created_secondary_line_is_zeroed() {
        let mut coordinator = PaymentCoordinator::default();
        let mut line = lbp_line(11040);

        coordinator.line_created(&ctx(), &mut line);

        assert!(line.amount.is_zero());
        assert!(coordinator.raw_secondary_input().is_zero());
        assert!(matches!(coordinator.phase(), EditPhase::EditingSecondary { .. }));
    }

    #[test]
    fn test_created_primary_line_keeps_prefill() {
        let mut coordinator = PaymentCoordinator::default();
        let mut line = usd_line(11040);

        coordinator.line_created(&ctx(), &mut line);

        assert_eq!(line.amount.cents(), 11040);
        assert!(matches!(coordinator.phase(), EditPhase::EditingPrimary { .. }));
    }

    #[test]
    fn test_created_unselected_line_is_not_written() {
        let mut coordinator = PaymentCoordinator::default();
        let mut line = lbp_line(11040);
        line.selected = false;

        coordinator.line_created(&ctx(), &mut line);

        assert_eq!(line.amount.cents(), 11040);
        assert_eq!(coordinator.phase(), &EditPhase::Idle);
    }

    #[test]
    fn test_keystrokes_convert_each_cumulative_value_once() {
        let ctx = ctx();
        let mut coordinator = PaymentCoordinator::default();
        let mut line = lbp_line(0);
        coordinator.line_created(&ctx, &mut line);

        for typed in ["9", "98", "988", "9880", "98808", "988080", "9880800"] {
            let update = coordinator.amount_entered(&ctx, &mut line, typed);
            let raw = SecondaryAmount::from_units(typed.parse().unwrap());
            assert_eq!(update.stored, ctx.rate.to_primary(raw));
            assert_eq!(line.amount, ctx.rate.to_primary(raw));
        }

        assert_eq!(line.amount.cents(), 11040);
        assert_eq!(coordinator.raw_secondary_input().units(), 9_880_800);
        assert_eq!(coordinator.session().last_rate, Some(ctx.rate));
    }

    #[test]
    fn test_primary_amount_passes_through() {
        let ctx = ctx();
        let mut coordinator = PaymentCoordinator::default();
        let mut line = usd_line(0);
        coordinator.line_created(&ctx, &mut line);

        let update = coordinator.amount_entered(&ctx, &mut line, "50.25");

        assert_eq!(line.amount.cents(), 5025);
        assert_eq!(update.kind, CurrencyKind::Primary);
        assert_eq!(update.raw_secondary, None);
        assert!(coordinator.raw_secondary_input().is_zero());
    }

    #[test]
    fn test_malformed_input_stores_zero() {
        let ctx = ctx();
        let mut coordinator = PaymentCoordinator::default();
        let mut line = lbp_line(0);
        coordinator.line_created(&ctx, &mut line);

        coordinator.amount_entered(&ctx, &mut line, "12abc");
        assert!(line.amount.is_zero());

        coordinator.amount_entered(&ctx, &mut line, -500.0);
        assert!(line.amount.is_zero());
    }

    #[test]
    fn test_selection_switch_rederives_raw_input() {
        let ctx = ctx();
        let mut coordinator = PaymentCoordinator::default();
        let mut lbp = lbp_line(0);
        let mut usd = usd_line(0);

        coordinator.line_created(&ctx, &mut lbp);
        coordinator.amount_entered(&ctx, &mut lbp, "10000000");
        assert_eq!(lbp.amount.cents(), 11173);

        lbp.selected = false;
        coordinator.line_created(&ctx, &mut usd);
        assert!(coordinator.raw_secondary_input().is_zero());

        usd.selected = false;
        lbp.selected = true;
        coordinator.line_selected(&ctx, &lbp);

        // $111.73 × 89,500 = 9,999,835, the stored value, not the keystrokes
        assert_eq!(coordinator.raw_secondary_input().units(), 9_999_835);
        assert_eq!(lbp.amount.cents(), 11173);
    }

    #[test]
    fn test_amount_on_other_line_selects_it_first() {
        let ctx = ctx();
        let mut coordinator = PaymentCoordinator::default();
        let mut usd = usd_line(0);
        let mut lbp = lbp_line(0);

        coordinator.line_created(&ctx, &mut usd);
        coordinator.amount_entered(&ctx, &mut usd, "20");

        let update = coordinator.amount_entered(&ctx, &mut lbp, "895000");
        assert_eq!(update.kind, CurrencyKind::Secondary);
        assert_eq!(lbp.amount.cents(), 1000);
        assert_eq!(usd.amount.cents(), 2000);
    }

    #[test]
    fn test_unselected_line_is_not_written() {
        let ctx = ctx();
        let mut coordinator = PaymentCoordinator::default();
        let mut line = lbp_line(0);
        coordinator.line_created(&ctx, &mut line);
        line.selected = false;

        let update = coordinator.amount_entered(&ctx, &mut line, "895000");

        assert!(!update.applied);
        assert!(line.amount.is_zero());
    }

    #[test]
    fn test_refused_entry_leaves_session_untouched() {
        let ctx = ctx();
        let mut coordinator = PaymentCoordinator::default();
        let mut line = lbp_line(0);
        line.selected = false;

        let update = coordinator.amount_entered(&ctx, &mut line, "895000");

        assert!(!update.applied);
        assert_eq!(update.kind, CurrencyKind::Secondary);
        assert_eq!(update.raw_secondary, None);
        assert_eq!(coordinator.phase(), &EditPhase::Idle);
        assert_eq!(coordinator.session(), EditSession::default());
        assert!(coordinator.raw_secondary_input().is_zero());
        assert!(coordinator.live_primary_equivalent(&ctx).is_zero());
        assert_eq!(
            coordinator.line_secondary_text(&ctx, &line).as_deref(),
            Some("0")
        );
    }

    #[test]
    fn test_refused_entry_keeps_active_line_session() {
        let ctx = ctx();
        let mut coordinator = PaymentCoordinator::default();
        let mut active = lbp_line(0);
        let mut other = lbp_line(0);
        coordinator.line_created(&ctx, &mut active);
        coordinator.amount_entered(&ctx, &mut active, "10000000");
        let phase = coordinator.phase().clone();
        let session = coordinator.session();

        other.selected = false;
        coordinator.amount_entered(&ctx, &mut other, "895000");

        assert_eq!(coordinator.phase(), &phase);
        assert_eq!(coordinator.session(), session);
        assert_eq!(coordinator.raw_secondary_input().units(), 10_000_000);
        assert!(other.amount.is_zero());
    }

    #[test]
    fn test_classification_is_frozen_per_line() {
        let ctx = ctx();
        let mut coordinator = PaymentCoordinator::default();
        let mut line = lbp_line(0);
        coordinator.line_created(&ctx, &mut line);

        // Host renames the method mid-edit
        line.method.name = "Cash".to_string();
        coordinator.amount_entered(&ctx, &mut line, "895000");

        assert_eq!(coordinator.line_kind(&line.id), Some(CurrencyKind::Secondary));
        assert_eq!(line.amount.cents(), 1000);
    }

    #[test]
    fn test_line_removed_returns_to_idle() {
        let ctx = ctx();
        let mut coordinator = PaymentCoordinator::default();
        let mut line = lbp_line(0);
        coordinator.line_created(&ctx, &mut line);
        coordinator.amount_entered(&ctx, &mut line, "895000");

        coordinator.line_removed(&line.id);

        assert_eq!(coordinator.phase(), &EditPhase::Idle);
        assert!(coordinator.raw_secondary_input().is_zero());
        assert_eq!(coordinator.line_kind(&line.id), None);
    }

    #[test]
    fn test_projections_scenario_a() {
        let ctx = ctx();
        let coordinator = PaymentCoordinator::default();
        let order = OrderTotals::from_payments(Money::from_cents(11040), Money::zero());

        assert_eq!(
            coordinator.total_due_secondary(&ctx, Some(&order)).as_deref(),
            Some("9,880,800")
        );
        assert_eq!(
            coordinator.remaining_due_secondary(&ctx, Some(&order)).as_deref(),
            Some("9,880,800")
        );
        assert_eq!(coordinator.change_secondary(&ctx, Some(&order)).as_deref(), Some("0"));
        assert_eq!(coordinator.rate_text(&ctx).as_deref(), Some("89,500"));
    }

    #[test]
    fn test_projections_without_order_default_to_zero() {
        let coordinator = PaymentCoordinator::default();
        assert_eq!(coordinator.total_due_secondary(&ctx(), None).as_deref(), Some("0"));
        assert_eq!(coordinator.change_secondary(&ctx(), None).as_deref(), Some("0"));
    }

    #[test]
    fn test_projections_disabled() {
        let ctx = ExchangeContext::disabled();
        let mut coordinator = PaymentCoordinator::default();
        let order = OrderTotals::from_payments(Money::from_cents(11040), Money::zero());
        let mut line = lbp_line(0);
        coordinator.line_created(&ctx, &mut line);

        assert!(!coordinator.display_enabled(&ctx));
        assert_eq!(coordinator.total_due_secondary(&ctx, Some(&order)), None);
        assert_eq!(coordinator.remaining_due_secondary(&ctx, Some(&order)), None);
        assert_eq!(coordinator.change_secondary(&ctx, Some(&order)), None);
        assert_eq!(coordinator.rate_text(&ctx), None);
        assert_eq!(coordinator.line_secondary_text(&ctx, &line), None);
        assert_eq!(coordinator.format_secondary_amount(&ctx, Money::from_cents(100)), None);
    }

    #[test]
    fn test_projections_do_not_mutate_session() {
        let ctx = ctx();
        let mut coordinator = PaymentCoordinator::default();
        let mut line = lbp_line(0);
        coordinator.line_created(&ctx, &mut line);
        coordinator.amount_entered(&ctx, &mut line, "10000000");
        let before = coordinator.session();

        let _ = coordinator.live_primary_equivalent(&ctx);
        let _ = coordinator.line_secondary_text(&ctx, &line);
        let _ = coordinator.total_due_secondary(&ctx, None);

        assert_eq!(coordinator.session(), before);
        assert_eq!(line.amount.cents(), 11173);
    }

    #[test]
    fn test_line_secondary_text_prefers_session_for_active_line() {
        let ctx = ctx();
        let mut coordinator = PaymentCoordinator::default();
        let mut active = lbp_line(0);
        let other = usd_line(11040);
        coordinator.line_created(&ctx, &mut active);
        coordinator.amount_entered(&ctx, &mut active, "10000000");

        assert_eq!(
            coordinator.line_secondary_text(&ctx, &active).as_deref(),
            Some("10,000,000")
        );
        assert_eq!(
            coordinator.line_secondary_text(&ctx, &other).as_deref(),
            Some("9,880,800")
        );
        assert_eq!(coordinator.live_primary_equivalent(&ctx).cents(), 11173);
    }

    #[test]
    fn test_from_settings_uses_marker() {
        let settings = CurrencySettings {
            secondary_marker: Some("L.L".to_string()),
            ..Default::default()
        };
        let coordinator = PaymentCoordinator::from_settings(Some(&settings));
        assert_eq!(coordinator.marker(), "L.L");
        assert_eq!(PaymentCoordinator::from_settings(None).marker(), "LBP");
    }

    #[test]
    fn test_amount_update_serializes_camel_case() {
        let ctx = ctx();
        let mut coordinator = PaymentCoordinator::default();
        let mut line = lbp_line(0);
        coordinator.line_created(&ctx, &mut line);

        let update = coordinator.amount_entered(&ctx, &mut line, "895000");
        let json = serde_json::to_value(&update).unwrap();

        assert_eq!(json["kind"], "secondary");
        assert_eq!(json["stored"], 1000);
        assert_eq!(json["rawSecondary"], 895000);
    }
}
