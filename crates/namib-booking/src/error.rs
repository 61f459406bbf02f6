//! # Error Types
//!
//! Controller-level errors.
//!
//! Only two things can go wrong at this layer: the currency service cannot
//! be constructed at startup, or a piece of user input is rejected by
//! validation. Everything else in the engine degrades to safe values
//! instead of erroring.

use thiserror::Error;

use namib_core::ValidationError;
use namib_rates::RatesError;

// =============================================================================
// Booking Error
// =============================================================================

/// Errors surfaced by the booking controller.
#[derive(Debug, Error)]
pub enum BookingError {
    /// The engine could not be initialized (HTTP client construction).
    /// Surfaced once to the caller; nothing is left half-built.
    #[error("booking engine initialization failed: {0}")]
    Init(#[from] RatesError),

    /// User input was rejected; state is unchanged.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with BookingError.
pub type BookingResult<T> = Result<T, BookingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_wraps() {
        let err: BookingError = ValidationError::Required {
            field: "pickup location".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "invalid input: pickup location is required"
        );
    }
}
