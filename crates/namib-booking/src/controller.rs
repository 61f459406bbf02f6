//! # Booking Controller
//!
//! Applies form events to the booking state and recomputes the pricing
//! breakdown after every one of them.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Event Flow                                   │
//! │                                                                         │
//! │  Form Event               Controller Method        State Change         │
//! │  ──────────               ─────────────────        ────────────         │
//! │                                                                         │
//! │  Pick vehicle ───────────► select_vehicle() ─────► vehicle = Some(v)   │
//! │  Change dates ───────────► set_dates() ──────────► pickup/return       │
//! │  Tick extra ─────────────► set_extra_selected() ─► extras[i].selected  │
//! │  Type quantity ──────────► enter_extra_quantity()► extras[i].quantity  │
//! │  Toggle pickup ──────────► set_pickup_confirmed()► pickup_confirmed    │
//! │  Type location ──────────► set_pickup_location() ► pickup_location     │
//! │  Switch currency ────────► set_currency().await ─► rate refreshed      │
//! │                                                                         │
//! │  EVERY method ends in recompute() and returns the fresh snapshot.      │
//! │  No event may skip it: totals are re-derived top-to-bottom so          │
//! │  subtotal, tax and grand total can never disagree.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use tracing::debug;

use namib_core::duration::{format_duration, DurationCache};
use namib_core::extras::{calculate_extras, parse_quantity};
use namib_core::pricing::compute_totals;
use namib_core::types::Vehicle;
use namib_core::validation::{validate_currency_code, validate_manual_date};
use namib_core::{Money, DEFAULT_EXTRA_QUANTITY};
use namib_rates::{CurrencyService, RateClient, RateSource, RatesConfig};

use crate::error::BookingResult;
use crate::snapshot::{BookingSnapshot, DisplayLine, ExtraLineView, CLEARED};
use crate::state::BookingState;

// =============================================================================
// Date Field
// =============================================================================

/// Which end of the rental range a manual date entry targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Pickup,
    Return,
}

impl DateField {
    fn name(self) -> &'static str {
        match self {
            DateField::Pickup => "pickup date",
            DateField::Return => "return date",
        }
    }
}

// =============================================================================
// Booking Controller
// =============================================================================

/// Owns the booking session: state, currency service, and duration cache.
///
/// Generic over the [`RateSource`] so the whole engine can run against a
/// fixed or failing rate source in tests; production uses the HTTP client.
#[derive(Debug)]
pub struct BookingController<S: RateSource = RateClient> {
    state: BookingState,
    currency: CurrencyService<S>,
    durations: DurationCache,
}

impl BookingController<RateClient> {
    /// Builds a controller with the HTTP rate client.
    ///
    /// ## Errors
    /// Fails only if the HTTP client cannot be constructed. This is the one
    /// initialization failure surfaced to the caller; after it, nothing is
    /// half-built.
    pub fn new(config: RatesConfig) -> BookingResult<Self> {
        Ok(Self::with_service(CurrencyService::new(config)?))
    }
}

impl<S: RateSource> BookingController<S> {
    /// Builds a controller over an arbitrary currency service.
    pub fn with_service(currency: CurrencyService<S>) -> Self {
        let state = BookingState::new();
        debug!(session = %state.session_id, "booking session created");

        BookingController {
            state,
            currency,
            durations: DurationCache::new(),
        }
    }

    /// Read-only access to the form state.
    pub fn state(&self) -> &BookingState {
        &self.state
    }

    /// Read-only access to the currency service.
    pub fn currency(&self) -> &CurrencyService<S> {
        &self.currency
    }

    // =========================================================================
    // Recompute
    // =========================================================================

    /// Re-derives the complete booking summary from current state.
    ///
    /// Idempotent and total: with unchanged inputs, repeated calls yield
    /// identical snapshots. Missing inputs degrade to cleared lines and
    /// zero totals; this method cannot fail.
    pub fn recompute(&mut self) -> BookingSnapshot {
        let duration_days = match (self.state.pickup_date, self.state.return_date) {
            (Some(pickup), Some(ret)) => self.durations.duration_days(pickup, ret),
            // Incomplete range: "no booking yet", vehicle line stays zero
            _ => 0,
        };

        let extras = calculate_extras(&self.state.extras);

        let pricing = compute_totals(
            self.state.vehicle.as_ref().map(Vehicle::daily_rate),
            duration_days,
            extras.total(),
            self.state.pickup_confirmed,
            &self.state.pickup_location,
        );

        let daily_rate = match &self.state.vehicle {
            Some(vehicle) => DisplayLine::priced(vehicle.daily_rate(), &self.currency),
            None => DisplayLine::cleared(),
        };

        let extra_views = extras
            .lines
            .iter()
            .map(|line| ExtraLineView {
                item_id: line.item_id.to_string(),
                name: line.name.to_string(),
                quantity: line.quantity,
                line: match line.amount_cents {
                    Some(cents) => DisplayLine::priced(Money::from_cents(cents), &self.currency),
                    None => DisplayLine::cleared(),
                },
            })
            .collect();

        let pickup_fee = if pricing.pickup_fee_cents > 0 {
            DisplayLine::priced(pricing.pickup_fee(), &self.currency)
        } else {
            DisplayLine::cleared()
        };

        let duration_display = if duration_days > 0 {
            format_duration(duration_days)
        } else {
            CLEARED.to_string()
        };

        let vehicle_name = self
            .state
            .vehicle
            .as_ref()
            .map(|v| v.name.clone())
            .unwrap_or_else(|| CLEARED.to_string());

        let location = self.state.trimmed_location();
        let pickup_location = if location.is_empty() {
            CLEARED.to_string()
        } else {
            location.to_string()
        };

        BookingSnapshot {
            session_id: self.state.session_id,
            currency: self.currency.state(),
            vehicle_name,
            pickup_location,
            duration_days,
            duration_display,
            daily_rate,
            extras: extra_views,
            extras_total: DisplayLine::priced(extras.total(), &self.currency),
            pickup_fee,
            pre_tax_total: DisplayLine::priced(pricing.pre_tax_total(), &self.currency),
            tax: DisplayLine::priced(pricing.tax(), &self.currency),
            grand_total: DisplayLine::priced(pricing.grand_total(), &self.currency),
            pricing,
        }
    }

    // =========================================================================
    // Vehicle Events
    // =========================================================================

    /// Selects a vehicle, freezing its daily rate into the session.
    pub fn select_vehicle(&mut self, vehicle: Vehicle) -> BookingSnapshot {
        debug!(session = %self.state.session_id, vehicle = %vehicle.id, "vehicle selected");
        self.state.vehicle = Some(vehicle);
        self.recompute()
    }

    /// Clears the vehicle selection.
    pub fn clear_vehicle(&mut self) -> BookingSnapshot {
        debug!(session = %self.state.session_id, "vehicle cleared");
        self.state.vehicle = None;
        self.recompute()
    }

    // =========================================================================
    // Date Events
    // =========================================================================

    /// Seeds the default rental window (today → today + 5 days) for any
    /// date the user has not picked yet.
    pub fn seed_default_dates(&mut self, today: NaiveDate) -> BookingSnapshot {
        let (pickup, ret) = BookingState::default_dates(today);
        if self.state.pickup_date.is_none() {
            self.state.pickup_date = Some(pickup);
        }
        if self.state.return_date.is_none() {
            self.state.return_date = Some(ret);
        }
        self.recompute()
    }

    /// Sets both ends of the rental range.
    pub fn set_dates(
        &mut self,
        pickup: Option<NaiveDate>,
        ret: Option<NaiveDate>,
    ) -> BookingSnapshot {
        debug!(session = %self.state.session_id, ?pickup, ?ret, "dates set");
        self.state.pickup_date = pickup;
        self.state.return_date = ret;
        self.recompute()
    }

    /// Sets the pickup date.
    ///
    /// If the stored return date now falls before the new pickup date, the
    /// return date is pushed to the day after pickup — the pickers enforce
    /// the same minimum.
    pub fn set_pickup_date(&mut self, pickup: Option<NaiveDate>) -> BookingSnapshot {
        debug!(session = %self.state.session_id, ?pickup, "pickup date set");
        self.state.pickup_date = pickup;

        if let (Some(pickup), Some(ret)) = (self.state.pickup_date, self.state.return_date) {
            let min_return = pickup + chrono::Days::new(1);
            if ret < min_return {
                self.state.return_date = Some(min_return);
            }
        }

        self.recompute()
    }

    /// Sets the return date.
    pub fn set_return_date(&mut self, ret: Option<NaiveDate>) -> BookingSnapshot {
        debug!(session = %self.state.session_id, ?ret, "return date set");
        self.state.return_date = ret;
        self.recompute()
    }

    /// Applies a manually typed date.
    ///
    /// ## Errors
    /// Rejects malformed input (`YYYY-MM-DD` expected) and past dates with
    /// a validation error; state is left untouched so the form can clear
    /// the field and alert the user.
    pub fn enter_manual_date(
        &mut self,
        field: DateField,
        input: &str,
        today: NaiveDate,
    ) -> BookingResult<BookingSnapshot> {
        let date = validate_manual_date(field.name(), input, today)?;

        Ok(match field {
            DateField::Pickup => self.set_pickup_date(Some(date)),
            DateField::Return => self.set_return_date(Some(date)),
        })
    }

    // =========================================================================
    // Extras Events
    // =========================================================================

    /// Ticks or unticks an extra's checkbox.
    ///
    /// Either way the quantity resets to 1, mirroring the form: ticking
    /// enables the quantity input at 1, unticking clears it.
    pub fn set_extra_selected(&mut self, item_id: &str, selected: bool) -> BookingSnapshot {
        debug!(session = %self.state.session_id, item = %item_id, selected, "extra toggled");

        if let Some(extra) = self.state.extra_mut(item_id) {
            extra.selected = selected;
            extra.quantity = DEFAULT_EXTRA_QUANTITY;
        }

        self.recompute()
    }

    /// Sets an extra's quantity, clamped into [1, 5].
    pub fn set_extra_quantity(&mut self, item_id: &str, quantity: i64) -> BookingSnapshot {
        debug!(session = %self.state.session_id, item = %item_id, quantity, "extra quantity set");

        if let Some(extra) = self.state.extra_mut(item_id) {
            extra.set_quantity(quantity);
        }

        self.recompute()
    }

    /// Applies raw text from an extra's quantity input. Non-numeric input
    /// defaults to 1; out-of-range values are clamped.
    pub fn enter_extra_quantity(&mut self, item_id: &str, input: &str) -> BookingSnapshot {
        let quantity = parse_quantity(input);
        self.set_extra_quantity(item_id, quantity)
    }

    // =========================================================================
    // Pickup Events
    // =========================================================================

    /// Toggles the pickup-service confirmation.
    ///
    /// Unconfirming also clears the location, as the form hides and empties
    /// the location input.
    pub fn set_pickup_confirmed(&mut self, confirmed: bool) -> BookingSnapshot {
        debug!(session = %self.state.session_id, confirmed, "pickup confirmation toggled");

        self.state.pickup_confirmed = confirmed;
        if !confirmed {
            self.state.pickup_location.clear();
        }

        self.recompute()
    }

    /// Updates the free-text pickup location.
    pub fn set_pickup_location(&mut self, location: &str) -> BookingSnapshot {
        debug!(session = %self.state.session_id, "pickup location edited");
        self.state.pickup_location = location.to_string();
        self.recompute()
    }

    // =========================================================================
    // Currency Events
    // =========================================================================

    /// Switches the display currency.
    ///
    /// The rate refresh is awaited before recomputing, so the returned
    /// snapshot never mixes the new currency with a stale rate. A failed
    /// refresh is absorbed by the currency service (rate 1.0).
    ///
    /// ## Errors
    /// Rejects codes outside the supported set; state is unchanged.
    pub async fn set_currency(&mut self, code: &str) -> BookingResult<BookingSnapshot> {
        validate_currency_code(code)?;
        debug!(session = %self.state.session_id, currency = %code, "currency selected");

        self.state.currency_code = code.to_string();
        self.currency.set_currency(code).await;

        Ok(self.recompute())
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Whole-form submit check; see [`BookingState::validate`].
    pub fn validate(&self) -> Vec<namib_core::ValidationError> {
        self.state.validate()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
