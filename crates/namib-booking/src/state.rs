//! # Booking State
//!
//! The single source of truth for one booking session.
//!
//! ## Design Notes
//! - Exactly one BookingState exists per session, owned by the controller;
//!   there is no process-wide singleton.
//! - Derived values (duration, line amounts, totals) are NEVER stored here;
//!   they live only in the snapshots recomputed from this state. Rendering
//!   layers must not write computed values back.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use namib_core::extras::EXTRAS_CATALOG;
use namib_core::types::{ExtraSelection, Vehicle};
use namib_core::validation::{
    validate_currency_code, validate_date_order, validate_pickup_location, validate_required,
};
use namib_core::{ValidationError, BASE_CURRENCY};

/// Length of the pre-seeded rental window offered before the user picks
/// dates: pickup today, return five days later.
pub const DEFAULT_RENTAL_DAYS: u64 = 5;

// =============================================================================
// Booking State
// =============================================================================

/// All form inputs of the booking session.
///
/// ## Invariants
/// - `extras` always holds one entry per catalog item, in catalog order
/// - Extra quantities are within [1, 5]
/// - `currency_code` mirrors the currency service's selection; the
///   controller is the only writer of both
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingState {
    /// Session identifier, carried in logs.
    pub session_id: Uuid,

    /// Selected vehicle with its frozen daily rate; None before selection.
    pub vehicle: Option<Vehicle>,

    /// Pickup calendar date.
    pub pickup_date: Option<NaiveDate>,

    /// Return calendar date.
    pub return_date: Option<NaiveDate>,

    /// One selection entry per catalog extra, in catalog order.
    pub extras: Vec<ExtraSelection>,

    /// Whether the pickup service checkbox is ticked.
    pub pickup_confirmed: bool,

    /// Free-text pickup location; meaningful only when trimmed non-empty.
    pub pickup_location: String,

    /// Selected display currency code.
    pub currency_code: String,
}

impl BookingState {
    /// Creates a fresh session: nothing selected, NAD display currency,
    /// every extra unselected at quantity 1.
    pub fn new() -> Self {
        BookingState {
            session_id: Uuid::new_v4(),
            vehicle: None,
            pickup_date: None,
            return_date: None,
            extras: EXTRAS_CATALOG
                .iter()
                .map(|item| ExtraSelection::unselected(item.id))
                .collect(),
            pickup_confirmed: false,
            pickup_location: String::new(),
            currency_code: BASE_CURRENCY.to_string(),
        }
    }

    /// The default date range seeded before the user touches the pickers.
    pub fn default_dates(today: NaiveDate) -> (NaiveDate, NaiveDate) {
        (today, today + Days::new(DEFAULT_RENTAL_DAYS))
    }

    /// Whether both dates are present.
    pub fn has_date_range(&self) -> bool {
        self.pickup_date.is_some() && self.return_date.is_some()
    }

    /// The pickup location with surrounding whitespace removed.
    pub fn trimmed_location(&self) -> &str {
        self.pickup_location.trim()
    }

    /// Finds the selection entry for a catalog item.
    pub fn extra_mut(&mut self, item_id: &str) -> Option<&mut ExtraSelection> {
        self.extras.iter_mut().find(|s| s.item_id == item_id)
    }

    /// Whole-form submit check, collecting every failure so the form can
    /// mark all offending fields at once.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.vehicle.is_none() {
            errors.push(ValidationError::Required {
                field: "vehicle".to_string(),
            });
        }

        match (self.pickup_date, self.return_date) {
            (Some(pickup), Some(ret)) => {
                if let Err(err) = validate_date_order(pickup, ret) {
                    errors.push(err);
                }
            }
            (pickup, ret) => {
                if pickup.is_none() {
                    errors.push(ValidationError::Required {
                        field: "pickup date".to_string(),
                    });
                }
                if ret.is_none() {
                    errors.push(ValidationError::Required {
                        field: "return date".to_string(),
                    });
                }
            }
        }

        if let Err(err) = validate_pickup_location(self.pickup_confirmed, &self.pickup_location) {
            errors.push(err);
        }

        if let Err(err) = validate_currency_code(&self.currency_code) {
            errors.push(err);
        }

        errors
    }

    /// Submit check for the optional contact fields the form carries next
    /// to the booking inputs.
    pub fn validate_contact(name: &str, email: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Err(err) = validate_required("name", name) {
            errors.push(err);
        }
        if let Err(err) = namib_core::validation::validate_email(email) {
            errors.push(err);
        }

        errors
    }
}

impl Default for BookingState {
    fn default() -> Self {
        BookingState::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
