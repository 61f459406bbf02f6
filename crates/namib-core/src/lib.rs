//! # namib-core: Pure Business Logic for Namib Rentals
//!
//! This crate is the heart of the booking engine. It contains all pricing
//! and validation rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Namib Rentals Booking Engine                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Rendering layer (external)                     │   │
//! │  │    vehicle selector ─ date pickers ─ extras ─ currency radio    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ form events                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                namib-booking (controller)                       │   │
//! │  │    BookingState ──► recompute() ──► BookingSnapshot             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ namib-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ duration  │  │  extras   │  │  pricing  │  │   │
//! │  │   │   Money   │  │ day count │  │ line math │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vehicle, ExtraItem, ExtraSelection, TaxRate)
//! - [`money`] - Money type with integer-cent arithmetic
//! - [`duration`] - Whole-day rental duration with a bounded memo cache
//! - [`extras`] - Extras catalog and per-line amounts
//! - [`pricing`] - Pickup fee, subtotal, tax, and grand total
//! - [`validation`] - Form input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use namib_core::money::Money;
//! use namib_core::pricing::compute_totals;
//!
//! // 500/day for 3 days, nothing else
//! let result = compute_totals(Some(Money::from_cents(50_000)), 3, Money::zero(), false, "");
//!
//! assert_eq!(result.pre_tax_total_cents, 150_000); // N$1,500.00
//! assert_eq!(result.tax_cents, 22_500);            // N$225.00
//! assert_eq!(result.grand_total_cents, 172_500);   // N$1,725.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod duration;
pub mod error;
pub mod extras;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use namib_core::Money` instead of
// `use namib_core::money::Money`

pub use error::ValidationError;
pub use extras::{ExtrasBreakdown, EXTRAS_CATALOG};
pub use money::Money;
pub use pricing::PricingResult;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Base currency every price is authored in.
pub const BASE_CURRENCY: &str = "NAD";

/// Display currencies offered by the booking form.
///
/// NAD plus the codes the rate API and the currency formatter both support.
pub const SUPPORTED_CURRENCIES: [&str; 5] = ["NAD", "USD", "EUR", "GBP", "ZAR"];

/// Minimum quantity for a selected extra.
pub const MIN_EXTRA_QUANTITY: i64 = 1;

/// Maximum quantity for a selected extra.
///
/// Invalid or out-of-range quantity input is clamped into
/// [MIN_EXTRA_QUANTITY, MAX_EXTRA_QUANTITY] rather than rejected.
pub const MAX_EXTRA_QUANTITY: i64 = 5;

/// Quantity assigned when a quantity input is missing or non-numeric.
pub const DEFAULT_EXTRA_QUANTITY: i64 = 1;

/// Upper bound for the free-text pickup location.
pub const MAX_LOCATION_LENGTH: usize = 120;
