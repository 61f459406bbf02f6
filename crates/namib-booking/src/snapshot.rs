//! # Booking Snapshot
//!
//! The immutable result of one `recompute()` pass.
//!
//! A snapshot carries every display binding the booking summary needs:
//! NAD amounts, converted amounts, and formatted strings per line, plus the
//! raw pricing breakdown. It is a value object — rendering layers read it
//! and throw it away; nothing is ever written back into the engine from a
//! snapshot.
//!
//! Cleared lines (no vehicle chosen, unselected extra, inapplicable pickup
//! fee) render as `"-"` with no amounts, matching the form's cleared
//! display elements.

use serde::Serialize;
use uuid::Uuid;

use namib_core::{Money, PricingResult};
use namib_rates::{CurrencyService, RateSource, RateState};

/// Placeholder shown for a cleared display binding.
pub const CLEARED: &str = "-";

// =============================================================================
// Display Line
// =============================================================================

/// One priced display binding: the NAD amount, its converted counterpart,
/// and the formatted display string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLine {
    /// Amount in NAD cents; None when the line is cleared.
    pub nad_cents: Option<i64>,

    /// Converted amount in display-currency cents; None when cleared.
    pub converted_cents: Option<i64>,

    /// Localized display string, or "-" when cleared.
    pub formatted: String,
}

impl DisplayLine {
    /// A cleared line ("-", no amounts).
    pub fn cleared() -> Self {
        DisplayLine {
            nad_cents: None,
            converted_cents: None,
            formatted: CLEARED.to_string(),
        }
    }

    /// A priced line derived through the currency service.
    pub fn priced<S: RateSource>(amount: Money, currency: &CurrencyService<S>) -> Self {
        DisplayLine {
            nad_cents: Some(amount.cents()),
            converted_cents: Some(currency.convert(amount).cents()),
            formatted: currency.format(amount),
        }
    }

    /// Whether this line carries an amount.
    pub fn is_priced(&self) -> bool {
        self.nad_cents.is_some()
    }
}

// =============================================================================
// Extra Line View
// =============================================================================

/// Display bindings for one extras row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraLineView {
    /// Catalog id (matches the form's checkbox id).
    pub item_id: String,

    /// Catalog display name.
    pub name: String,

    /// Effective quantity; None when unselected.
    pub quantity: Option<i64>,

    /// The priced (or cleared) line amount.
    pub line: DisplayLine,
}

// =============================================================================
// Booking Snapshot
// =============================================================================

/// Everything the booking summary displays, derived in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSnapshot {
    /// Session this snapshot belongs to.
    pub session_id: Uuid,

    /// Currency selection the amounts were converted with.
    pub currency: RateState,

    /// Selected vehicle name, or "-" when none.
    pub vehicle_name: String,

    /// Pickup location echo, or "-" when empty.
    pub pickup_location: String,

    /// Whole-day duration; 0 until both dates are present.
    pub duration_days: u32,

    /// "1 day" / "N days", or "-" until both dates are present.
    pub duration_display: String,

    /// The selected vehicle's daily rate (cleared without a selection).
    pub daily_rate: DisplayLine,

    /// Per-extra rows in catalog order.
    pub extras: Vec<ExtraLineView>,

    /// Aggregate extras amount (always priced, 0 when nothing selected).
    pub extras_total: DisplayLine,

    /// Pickup surcharge (cleared unless confirmed with a location).
    pub pickup_fee: DisplayLine,

    /// Subtotal before tax.
    pub pre_tax_total: DisplayLine,

    /// Tax at the booking rate.
    pub tax: DisplayLine,

    /// The amount due.
    pub grand_total: DisplayLine,

    /// The raw NAD pricing breakdown behind the lines above.
    pub pricing: PricingResult,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_line() {
        let line = DisplayLine::cleared();
        assert_eq!(line.formatted, "-");
        assert!(!line.is_priced());
        assert_eq!(line.nad_cents, None);
        assert_eq!(line.converted_cents, None);
    }

    #[test]
    fn test_display_line_serializes_camel_case() {
        let line = DisplayLine::cleared();
        let json = serde_json::to_value(&line).unwrap();
        assert!(json.get("nadCents").is_some());
        assert!(json.get("convertedCents").is_some());
        assert!(json.get("formatted").is_some());
    }
}
