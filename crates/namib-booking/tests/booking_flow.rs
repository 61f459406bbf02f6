//! End-to-end booking flows over the whole engine.
//!
//! These tests drive the controller the way the form does — one event at a
//! time — against stub rate sources, and check the snapshots the rendering
//! layer would receive.

use chrono::NaiveDate;

use namib_booking::{BookingController, DateField};
use namib_core::{Money, Vehicle};
use namib_rates::{CurrencyService, RateSource, RatesError, RatesResult};

// =============================================================================
// Test Support
// =============================================================================

/// Rate source answering with a fixed rate.
struct FixedSource(f64);

impl RateSource for FixedSource {
    async fn pair_rate(&self, _target: &str) -> RatesResult<f64> {
        Ok(self.0)
    }
}

/// Rate source that fails every request, as if the API were down.
struct FailingSource;

impl RateSource for FailingSource {
    async fn pair_rate(&self, _target: &str) -> RatesResult<f64> {
        Err(RatesError::Status { status: 503 })
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn controller_with_rate(rate: f64) -> BookingController<FixedSource> {
    init_tracing();
    BookingController::with_service(CurrencyService::with_source(FixedSource(rate)))
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn hilux() -> Vehicle {
    Vehicle::new("v-hilux", "Toyota Hilux 4x4", Money::from_cents(50_000))
}

// =============================================================================
// Pricing Scenarios
// =============================================================================

#[test]
fn three_day_rental_without_options() {
    let mut booking = controller_with_rate(1.0);

    booking.select_vehicle(hilux());
    let snapshot = booking.set_dates(Some(d(2025, 6, 1)), Some(d(2025, 6, 4)));

    assert_eq!(snapshot.duration_days, 3);
    assert_eq!(snapshot.pricing.vehicle_line_cents, 150_000); // N$1,500.00
    assert_eq!(snapshot.pricing.pickup_fee_cents, 0);
    assert_eq!(snapshot.pricing.pre_tax_total_cents, 150_000);
    assert_eq!(snapshot.pricing.tax_cents, 22_500); // N$225.00
    assert_eq!(snapshot.pricing.grand_total_cents, 172_500); // N$1,725.00
}

#[test]
fn three_day_rental_with_airport_pickup() {
    let mut booking = controller_with_rate(1.0);

    booking.select_vehicle(hilux());
    booking.set_dates(Some(d(2025, 6, 1)), Some(d(2025, 6, 4)));
    booking.set_pickup_confirmed(true);
    let snapshot = booking.set_pickup_location("Airport");

    assert_eq!(snapshot.pricing.pickup_fee_cents, 10_000); // N$100.00
    assert_eq!(snapshot.pricing.pre_tax_total_cents, 160_000);
    assert_eq!(snapshot.pricing.tax_cents, 24_000); // N$240.00
    assert_eq!(snapshot.pricing.grand_total_cents, 184_000); // N$1,840.00
    assert_eq!(snapshot.pickup_location, "Airport");
}

#[test]
fn extras_flow_into_the_total() {
    let mut booking = controller_with_rate(1.0);

    booking.select_vehicle(hilux());
    booking.set_dates(Some(d(2025, 6, 1)), Some(d(2025, 6, 4)));
    booking.set_extra_selected("extra_0", true);
    let snapshot = booking.set_extra_quantity("extra_0", 3);

    // Child seat: 120.00 × 3 = 360.00
    assert_eq!(snapshot.extras[0].line.nad_cents, Some(36_000));
    assert_eq!(snapshot.pricing.extras_line_cents, 36_000);
    assert_eq!(snapshot.pricing.pre_tax_total_cents, 186_000);

    // Unselected rows stay cleared
    assert_eq!(snapshot.extras[1].line.formatted, "-");
    assert_eq!(snapshot.extras[1].quantity, None);
}

#[test]
fn quantity_edge_cases_default_and_clamp() {
    let mut booking = controller_with_rate(1.0);
    booking.set_extra_selected("extra_2", true);

    for (input, expected_qty, expected_cents) in [
        ("0", 1, 16_500),
        ("-3", 1, 16_500),
        ("seven", 1, 16_500),
        ("7", 5, 82_500),
        ("4", 4, 66_000),
    ] {
        let snapshot = booking.enter_extra_quantity("extra_2", input);
        assert_eq!(snapshot.extras[1].quantity, Some(expected_qty), "input {input:?}");
        assert_eq!(
            snapshot.extras[1].line.nad_cents,
            Some(expected_cents),
            "input {input:?}"
        );
    }
}

// =============================================================================
// Currency Scenarios
// =============================================================================

#[tokio::test]
async fn usd_rate_converts_every_line() {
    let mut booking = controller_with_rate(0.054);

    booking.select_vehicle(hilux());
    booking.set_dates(Some(d(2025, 6, 1)), Some(d(2025, 6, 4)));
    let snapshot = booking.set_currency("USD").await.unwrap();

    assert_eq!(snapshot.currency.rate, 0.054);

    // Grand total N$1,725.00 → $93.15
    assert_eq!(snapshot.grand_total.nad_cents, Some(172_500));
    assert_eq!(snapshot.grand_total.converted_cents, Some(9_315));
    assert_eq!(snapshot.grand_total.formatted, "$93.15");

    // Daily rate N$500.00 → $27.00
    assert_eq!(snapshot.daily_rate.converted_cents, Some(2_700));

    // NAD amounts are untouched by the conversion
    assert_eq!(snapshot.pricing.grand_total_cents, 172_500);
}

#[tokio::test]
async fn failed_rate_fetch_degrades_to_nad_values() {
    init_tracing();
    let mut booking =
        BookingController::with_service(CurrencyService::with_source(FailingSource));

    booking.select_vehicle(hilux());
    booking.set_dates(Some(d(2025, 6, 1)), Some(d(2025, 6, 4)));
    let snapshot = booking.set_currency("USD").await.unwrap();

    // Fallback rate 1.0: the USD label shows the NAD numeric value
    assert_eq!(snapshot.currency.currency_code, "USD");
    assert_eq!(snapshot.currency.rate, 1.0);
    assert_eq!(snapshot.grand_total.converted_cents, Some(172_500));
    assert_eq!(snapshot.grand_total.formatted, "$1,725.00");
}

#[tokio::test]
async fn switching_back_to_nad_restores_base_display() {
    let mut booking = controller_with_rate(0.054);

    booking.select_vehicle(hilux());
    booking.set_dates(Some(d(2025, 6, 1)), Some(d(2025, 6, 4)));

    let usd = booking.set_currency("USD").await.unwrap();
    assert_eq!(usd.grand_total.converted_cents, Some(9_315));

    let nad = booking.set_currency("NAD").await.unwrap();
    assert_eq!(nad.currency.rate, 1.0);
    assert_eq!(nad.grand_total.converted_cents, Some(172_500));
}

// =============================================================================
// Recompute Semantics
// =============================================================================

#[tokio::test]
async fn recompute_is_idempotent_across_the_whole_flow() {
    let mut booking = controller_with_rate(0.054);

    booking.select_vehicle(hilux());
    booking.set_dates(Some(d(2025, 6, 1)), Some(d(2025, 6, 4)));
    booking.set_extra_selected("extra_3", true);
    booking.set_pickup_confirmed(true);
    booking.set_pickup_location("Hosea Kutako Airport");
    booking.set_currency("USD").await.unwrap();

    let first = booking.recompute();
    let second = booking.recompute();
    let third = booking.recompute();

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn totals_are_internally_consistent_at_every_step() {
    let mut booking = controller_with_rate(1.0);
    booking.select_vehicle(hilux());

    let steps = [
        booking.set_dates(Some(d(2025, 6, 1)), Some(d(2025, 6, 4))),
        booking.set_extra_selected("extra_0", true),
        booking.set_extra_quantity("extra_0", 3),
        booking.set_pickup_confirmed(true),
        booking.set_pickup_location("Airport"),
        booking.set_pickup_confirmed(false),
    ];

    for snapshot in &steps {
        let p = &snapshot.pricing;
        assert_eq!(
            p.pre_tax_total_cents,
            p.vehicle_line_cents + p.extras_line_cents + p.pickup_fee_cents
        );
        assert_eq!(p.grand_total_cents, p.pre_tax_total_cents + p.tax_cents);
    }
}

#[test]
fn snapshot_serializes_camel_case_bindings() {
    let mut booking = controller_with_rate(1.0);
    booking.select_vehicle(hilux());
    let snapshot = booking.set_dates(Some(d(2025, 6, 1)), Some(d(2025, 6, 4)));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert!(json.get("durationDisplay").is_some());
    assert!(json.get("grandTotal").is_some());
    assert!(json.get("extrasTotal").is_some());
    assert_eq!(json["pricing"]["grandTotalCents"], 172_500);
}

// =============================================================================
// Validation Flow
// =============================================================================

#[test]
fn submit_validation_collects_everything_wrong() {
    let booking = controller_with_rate(1.0);
    let errors = booking.validate();

    // Fresh form: vehicle and both dates are missing
    assert_eq!(errors.len(), 3);
}

#[test]
fn manual_date_entry_rejects_bad_input() {
    let mut booking = controller_with_rate(1.0);
    let today = d(2025, 6, 1);

    assert!(booking
        .enter_manual_date(DateField::Pickup, "2025-06-03", today)
        .is_ok());
    assert!(booking
        .enter_manual_date(DateField::Return, "03-06-2025", today)
        .is_err());
    assert!(booking
        .enter_manual_date(DateField::Pickup, "2024-12-31", today)
        .is_err());

    // The accepted date stuck; the rejected ones changed nothing
    assert_eq!(booking.state().pickup_date, Some(d(2025, 6, 3)));
}
