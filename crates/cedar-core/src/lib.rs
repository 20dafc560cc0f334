//! # cedar-core: Dual-Currency Checkout Logic
//!
//! Pure logic for running a USD register that also shows, and for some
//! payment methods accepts, Lebanese Pounds. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cedar POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Payment screen (host POS UI)                   │   │
//! │  │   numpad ──► line created / selected / amount entered           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ events + read-only projections         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cedar-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   rate    │  │  money    │  │coordinator │  │  display  │  │   │
//! │  │   │ resolve   │  │  Money    │  │ EditPhase  │  │ DualPrice │  │   │
//! │  │   │ Exchange  │  │ Secondary │  │ EditSession│  │  labels   │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PaymentLineHandle / OrderView          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            Host order & payment model (owns the lines)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`rate`] - Rate resolution and the two conversion primitives
//! - [`coordinator`] - Payment-line state machine (exactly-once conversion)
//! - [`money`] - `Money` (USD cents) and `SecondaryAmount` (whole LBP)
//! - [`payment`] - Method classification and the payment line trait
//! - [`display`] - Dual-price label text
//! - [`format`] - Grouped-digit formatting
//! - [`types`] - Settings, labels, order figures
//! - [`validation`] - Input normalization and settings checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: dollars are cents (i64), pounds are whole units (i64)
//! 2. **Exact Rates**: the rate is a `Decimal`, never a float
//! 3. **Convert Once**: only `amount_entered` converts towards stored amounts
//! 4. **Never Block Checkout**: events and projections cannot fail
//!
//! ## Example Usage
//!
//! ```rust
//! use cedar_core::{resolve, CurrencySettings, Money, OrderTotals, PaymentCoordinator};
//!
//! let ctx = resolve(Some(&CurrencySettings::register_defaults()));
//! let coordinator = PaymentCoordinator::default();
//!
//! let order = OrderTotals::from_payments(Money::from_cents(11040), Money::zero());
//! assert_eq!(
//!     coordinator.total_due_secondary(&ctx, Some(&order)).as_deref(),
//!     Some("9,880,800")
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coordinator;
pub mod display;
pub mod error;
pub mod format;
pub mod money;
pub mod payment;
pub mod rate;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use coordinator::{AmountUpdate, EditPhase, EditSession, PaymentCoordinator};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, SecondaryAmount};
pub use payment::{PaymentLine, PaymentLineHandle, PaymentMethod};
pub use rate::{resolve, resolve_chain, ExchangeContext, ExchangeRate};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Pounds per dollar used when no valid rate is configured.
///
/// Matches the default a new register is created with, so a register whose
/// rate field is missing behaves like a freshly installed one.
pub const DEFAULT_SECONDARY_RATE: i64 = 89_500;

/// Marker word that flags a payment method as LBP.
pub const DEFAULT_SECONDARY_MARKER: &str = "LBP";

/// Name of the LBP cash method linked to every register.
pub const SECONDARY_CASH_METHOD_NAME: &str = "Cash (LBP)";

/// Longest marker word accepted in configuration.
pub const MAX_MARKER_LEN: usize = 32;
