//! # Validation Module
//!
//! Form input validation rules for the booking form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Rendering layer (widgets)                                    │
//! │  ├── Date pickers constrain selectable ranges                          │
//! │  └── Quantity inputs declare min/max                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - pure field rules                               │
//! │  ├── Manual date entry (format + not in the past)                      │
//! │  ├── Email, location, currency membership                              │
//! │  └── Whole-form submit check (collects every failure)                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: The engine itself                                            │
//! │  └── Clamps/zeros whatever slips through (never crashes)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation failures are user-facing rejections; the pricing engine never
//! depends on them — it degrades missing or bad input to safe zero values.

use chrono::NaiveDate;

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_EXTRA_QUANTITY, MAX_LOCATION_LENGTH, MIN_EXTRA_QUANTITY, SUPPORTED_CURRENCIES};

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required field is non-empty after trimming.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates an email address structurally.
///
/// ## Rules
/// - Exactly one `@` with a non-empty local part
/// - Domain contains a dot with characters on both sides
/// - No whitespace anywhere
///
/// ## Example
/// ```rust
/// use namib_core::validation::validate_email;
///
/// assert!(validate_email("guest@example.com").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// assert!(validate_email("a@b").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid("must contain exactly one @ with text on both sides"));
    }

    let dot = match domain.rfind('.') {
        Some(idx) => idx,
        None => return Err(invalid("domain must contain a dot")),
    };
    if dot == 0 || dot == domain.len() - 1 {
        return Err(invalid("domain must have characters around the dot"));
    }

    Ok(())
}

/// Validates the pickup location against the confirmation flag.
///
/// ## Rules
/// - Required (non-empty after trimming) when pickup is confirmed
/// - Bounded length either way
pub fn validate_pickup_location(pickup_confirmed: bool, location: &str) -> ValidationResult<()> {
    let trimmed = location.trim();

    if pickup_confirmed && trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "pickup location".to_string(),
        });
    }

    if trimmed.len() > MAX_LOCATION_LENGTH {
        return Err(ValidationError::TooLong {
            field: "pickup location".to_string(),
            max: MAX_LOCATION_LENGTH,
        });
    }

    Ok(())
}

/// Validates a display currency code against the supported set.
///
/// ## Example
/// ```rust
/// use namib_core::validation::validate_currency_code;
///
/// assert!(validate_currency_code("NAD").is_ok());
/// assert!(validate_currency_code("USD").is_ok());
/// assert!(validate_currency_code("JPY").is_err());
/// ```
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    if SUPPORTED_CURRENCIES.contains(&code) {
        return Ok(());
    }

    Err(ValidationError::NotAllowed {
        field: "currency".to_string(),
        allowed: SUPPORTED_CURRENCIES.iter().map(|c| c.to_string()).collect(),
    })
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates a manually typed date.
///
/// ## Rules
/// - Must parse as `YYYY-MM-DD`
/// - Must not be earlier than today
///
/// The caller supplies `today` so the rule stays pure and testable.
/// On failure the input is rejected outright (the form clears the field);
/// nothing is propagated into BookingState.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use namib_core::validation::validate_manual_date;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// assert_eq!(
///     validate_manual_date("pickup date", "2025-06-03", today).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
/// );
/// assert!(validate_manual_date("pickup date", "03/06/2025", today).is_err());
/// assert!(validate_manual_date("pickup date", "2025-05-20", today).is_err());
/// ```
pub fn validate_manual_date(
    field: &str,
    input: &str,
    today: NaiveDate,
) -> ValidationResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        }
    })?;

    if date < today {
        return Err(ValidationError::DateInPast {
            field: field.to_string(),
        });
    }

    Ok(date)
}

/// Validates the ordering of a complete date range.
pub fn validate_date_order(pickup: NaiveDate, ret: NaiveDate) -> ValidationResult<()> {
    if ret < pickup {
        return Err(ValidationError::ReturnBeforePickup);
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an extras quantity strictly (for submit-time checks).
///
/// The engine clamps out-of-range quantities while the user types; this
/// validator is the strict variant used when reporting form errors.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < MIN_EXTRA_QUANTITY || qty > MAX_EXTRA_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: MIN_EXTRA_QUANTITY,
            max: MAX_EXTRA_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Anna").is_ok());
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("guest@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.example.co").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("plainaddress").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("guest@").is_err());
        assert!(validate_email("guest@nodot").is_err());
        assert!(validate_email("gu est@example.com").is_err());
        assert!(validate_email("guest@example.").is_err());
    }

    #[test]
    fn test_validate_pickup_location() {
        assert!(validate_pickup_location(true, "Airport").is_ok());
        assert!(validate_pickup_location(false, "").is_ok());
        assert!(validate_pickup_location(true, "").is_err());
        assert!(validate_pickup_location(true, "   ").is_err());
        assert!(validate_pickup_location(false, &"x".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("NAD").is_ok());
        assert!(validate_currency_code("USD").is_ok());
        assert!(validate_currency_code("ZAR").is_ok());
        assert!(validate_currency_code("JPY").is_err());
        assert!(validate_currency_code("nad").is_err());
        assert!(validate_currency_code("").is_err());
    }

    #[test]
    fn test_validate_manual_date() {
        let today = d(2025, 6, 1);

        assert_eq!(
            validate_manual_date("pickup date", "2025-06-01", today).unwrap(),
            today,
        );
        assert_eq!(
            validate_manual_date("pickup date", " 2025-07-15 ", today).unwrap(),
            d(2025, 7, 15),
        );

        assert!(matches!(
            validate_manual_date("pickup date", "garbage", today),
            Err(ValidationError::InvalidFormat { .. }),
        ));
        assert!(matches!(
            validate_manual_date("pickup date", "15/07/2025", today),
            Err(ValidationError::InvalidFormat { .. }),
        ));
        assert!(matches!(
            validate_manual_date("pickup date", "2025-05-31", today),
            Err(ValidationError::DateInPast { .. }),
        ));
    }

    #[test]
    fn test_validate_date_order() {
        assert!(validate_date_order(d(2025, 6, 1), d(2025, 6, 4)).is_ok());
        assert!(validate_date_order(d(2025, 6, 1), d(2025, 6, 1)).is_ok());
        assert!(matches!(
            validate_date_order(d(2025, 6, 4), d(2025, 6, 1)),
            Err(ValidationError::ReturnBeforePickup),
        ));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(5).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(6).is_err());
        assert!(validate_quantity(-2).is_err());
    }
}
