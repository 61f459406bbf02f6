//! # Domain Types
//!
//! Core domain types used throughout the booking engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Vehicle      │   │   ExtraItem     │   │ ExtraSelection  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (catalog)   │   │  item_id        │       │
//! │  │  name           │   │  name           │   │  selected       │       │
//! │  │  daily_rate     │   │  base_price     │   │  quantity [1,5] │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    TaxRate      │   All amounts are NAD cents (Money); the          │
//! │  │  ─────────────  │   display currency never enters this crate.       │
//! │  │  bps (u32)      │                                                    │
//! │  │  1500 = 15%     │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::{DEFAULT_EXTRA_QUANTITY, MAX_EXTRA_QUANTITY, MIN_EXTRA_QUANTITY};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000.
/// 1500 bps = 15% (the booking tax rate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Vehicle
// =============================================================================

/// A rentable vehicle as presented by the vehicle selector.
///
/// The form yields one selected vehicle at a time; its daily rate in NAD is
/// the only number pricing needs. The rate is frozen into BookingState when
/// the vehicle is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Selector value identifying the vehicle.
    pub id: String,

    /// Display name shown in the booking summary.
    pub name: String,

    /// Daily rental rate in NAD cents.
    pub daily_rate_cents: i64,
}

impl Vehicle {
    /// Creates a vehicle entry.
    pub fn new(id: impl Into<String>, name: impl Into<String>, daily_rate: Money) -> Self {
        Vehicle {
            id: id.into(),
            name: name.into(),
            daily_rate_cents: daily_rate.cents(),
        }
    }

    /// Returns the daily rate as a Money type.
    #[inline]
    pub fn daily_rate(&self) -> Money {
        Money::from_cents(self.daily_rate_cents)
    }
}

// =============================================================================
// Extras Catalog
// =============================================================================

/// A catalog entry for an optional add-on rental item.
///
/// The catalog is fixed and ordered; prices are constants, never user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtraItem {
    /// Catalog identifier (matches the form's checkbox ids).
    pub id: &'static str,

    /// Display name.
    pub name: &'static str,

    /// Unit price in NAD cents.
    pub base_price_cents: i64,
}

impl ExtraItem {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_cents(self.base_price_cents)
    }
}

// =============================================================================
// Extra Selection
// =============================================================================

/// Per-item form input for one extra: checked or not, and at what quantity.
///
/// ## Invariants
/// - `quantity` is always within [1, 5] after construction/mutation
/// - An unselected item contributes 0 to the extras total and exposes no
///   line amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraSelection {
    /// Catalog id this selection refers to.
    pub item_id: String,

    /// Whether the checkbox is ticked.
    pub selected: bool,

    /// Requested quantity, clamped into [1, 5].
    pub quantity: i64,
}

impl ExtraSelection {
    /// Creates an unselected entry at the default quantity.
    pub fn unselected(item_id: impl Into<String>) -> Self {
        ExtraSelection {
            item_id: item_id.into(),
            selected: false,
            quantity: DEFAULT_EXTRA_QUANTITY,
        }
    }

    /// Sets the quantity, clamping into the allowed range.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity.clamp(MIN_EXTRA_QUANTITY, MAX_EXTRA_QUANTITY);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
