//! # namib-booking: Booking State Controller for Namib Rentals
//!
//! The composition root of the booking engine. One [`BookingController`]
//! owns the session's [`BookingState`], the currency service, and the
//! duration cache; every form event flows through it and ends in a full
//! [`recompute`](BookingController::recompute).
//!
//! ## Derivation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Unidirectional Derivation                              │
//! │                                                                         │
//! │   form events ──► BookingState (source of truth)                        │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   recompute()                                           │
//! │                        │                                                │
//! │          ┌─────────────┼─────────────┐                                  │
//! │          ▼             ▼             ▼                                  │
//! │      duration      extras math    totals + tax     (all in NAD)        │
//! │          └─────────────┼─────────────┘                                  │
//! │                        ▼                                                │
//! │               currency conversion                                       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │               BookingSnapshot (immutable, pushed outward)               │
//! │                                                                         │
//! │   Derived values are never read back out of a snapshot into state.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use namib_booking::BookingController;
//! use namib_core::{Money, Vehicle};
//! use namib_rates::RatesConfig;
//!
//! # fn demo() -> Result<(), namib_booking::BookingError> {
//! let mut booking = BookingController::new(RatesConfig::from_env())?;
//!
//! booking.select_vehicle(Vehicle::new(
//!     "v-hilux",
//!     "Toyota Hilux 4x4",
//!     Money::from_cents(50_000),
//! ));
//! let snapshot = booking.set_dates(
//!     NaiveDate::from_ymd_opt(2025, 6, 1),
//!     NaiveDate::from_ymd_opt(2025, 6, 4),
//! );
//!
//! assert_eq!(snapshot.duration_display, "3 days");
//! assert_eq!(snapshot.pricing.grand_total_cents, 172_500);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod controller;
pub mod error;
pub mod snapshot;
pub mod state;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use controller::{BookingController, DateField};
pub use error::{BookingError, BookingResult};
pub use snapshot::{BookingSnapshot, DisplayLine, ExtraLineView, CLEARED};
pub use state::{BookingState, DEFAULT_RENTAL_DAYS};
