//! # Pricing Aggregator
//!
//! Combines the vehicle line, extras total, pickup fee, and tax into a
//! single [`PricingResult`].
//!
//! ## Calculation Order
//! ```text
//! vehicle_line  = daily_rate × duration        (0 without vehicle/dates)
//! pickup_fee    = 100.00 iff confirmed AND location non-empty
//! pre_tax_total = vehicle_line + pickup_fee + extras_total
//! tax           = pre_tax_total × 15%
//! grand_total   = pre_tax_total + tax
//! ```
//!
//! All five values are produced together in one pass; callers never observe
//! a half-updated total.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::TaxRate;

// =============================================================================
// Pricing Constants
// =============================================================================

/// Booking tax rate: 15%.
pub const TAX_RATE_BPS: u32 = 1500;

/// Flat surcharge for the confirmed pickup service: N$100.00.
pub const BASE_PICKUP_FEE: Money = Money::from_cents(10_000);

// =============================================================================
// Pricing Result
// =============================================================================

/// The fully derived pricing breakdown, all values in NAD cents.
///
/// Recomputed wholly on every trigger — fields are never mutated
/// incrementally, so subtotal, tax, and grand total are always mutually
/// consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Vehicle daily rate × duration.
    pub vehicle_line_cents: i64,

    /// Sum of all selected extras lines.
    pub extras_line_cents: i64,

    /// Pickup surcharge (0 unless confirmed with a location).
    pub pickup_fee_cents: i64,

    /// vehicle_line + pickup_fee + extras_line.
    pub pre_tax_total_cents: i64,

    /// pre_tax_total × 15%, rounded to the cent.
    pub tax_cents: i64,

    /// pre_tax_total + tax.
    pub grand_total_cents: i64,
}

impl PricingResult {
    /// Returns the vehicle line as Money.
    #[inline]
    pub fn vehicle_line(&self) -> Money {
        Money::from_cents(self.vehicle_line_cents)
    }

    /// Returns the extras line as Money.
    #[inline]
    pub fn extras_line(&self) -> Money {
        Money::from_cents(self.extras_line_cents)
    }

    /// Returns the pickup fee as Money.
    #[inline]
    pub fn pickup_fee(&self) -> Money {
        Money::from_cents(self.pickup_fee_cents)
    }

    /// Returns the pre-tax total as Money.
    #[inline]
    pub fn pre_tax_total(&self) -> Money {
        Money::from_cents(self.pre_tax_total_cents)
    }

    /// Returns the tax as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn grand_total(&self) -> Money {
        Money::from_cents(self.grand_total_cents)
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Whether the pickup surcharge applies.
///
/// The fee is charged iff pickup is confirmed AND a location was supplied
/// (non-empty after trimming). Confirming without a location, or typing a
/// location without confirming, charges nothing.
pub fn pickup_fee(pickup_confirmed: bool, pickup_location: &str) -> Money {
    if pickup_confirmed && !pickup_location.trim().is_empty() {
        BASE_PICKUP_FEE
    } else {
        Money::zero()
    }
}

/// Computes the complete pricing breakdown.
///
/// Missing inputs degrade to safe zeros: no vehicle or a zero duration
/// yields a zero vehicle line, and an all-zero pre-tax total yields zero
/// tax and a zero grand total. The function never fails.
///
/// ## Example
/// ```rust
/// use namib_core::money::Money;
/// use namib_core::pricing::compute_totals;
///
/// // 500/day × 3 days, pickup confirmed at the airport, no extras
/// let result = compute_totals(
///     Some(Money::from_cents(50_000)),
///     3,
///     Money::zero(),
///     true,
///     "Airport",
/// );
/// assert_eq!(result.pickup_fee_cents, 10_000);
/// assert_eq!(result.pre_tax_total_cents, 160_000);
/// assert_eq!(result.tax_cents, 24_000);
/// assert_eq!(result.grand_total_cents, 184_000);
/// ```
pub fn compute_totals(
    vehicle_daily_rate: Option<Money>,
    duration_days: u32,
    extras_total: Money,
    pickup_confirmed: bool,
    pickup_location: &str,
) -> PricingResult {
    let fee = pickup_fee(pickup_confirmed, pickup_location);

    let vehicle_line = vehicle_daily_rate
        .map(|rate| rate.multiply_days(duration_days))
        .unwrap_or_else(Money::zero);

    let pre_tax_total = vehicle_line + fee + extras_total;
    let tax = pre_tax_total.calculate_tax(TaxRate::from_bps(TAX_RATE_BPS));
    let grand_total = pre_tax_total + tax;

    PricingResult {
        vehicle_line_cents: vehicle_line.cents(),
        extras_line_cents: extras_total.cents(),
        pickup_fee_cents: fee.cents(),
        pre_tax_total_cents: pre_tax_total.cents(),
        tax_cents: tax.cents(),
        grand_total_cents: grand_total.cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
