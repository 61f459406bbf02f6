//! # Error Types
//!
//! Domain-specific error types for namib-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  namib-core errors (this file)                                         │
//! │  └── ValidationError  - Form input validation failures                 │
//! │                                                                         │
//! │  namib-rates errors (separate crate)                                   │
//! │  └── RatesError       - Exchange-rate fetch/format failures            │
//! │                                                                         │
//! │  namib-booking errors (separate crate)                                 │
//! │  └── BookingError     - Controller initialization / input rejection    │
//! │                                                                         │
//! │  Flow: ValidationError → BookingError → caller (rendering layer)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing itself never errors: missing inputs degrade to zero lines, and
//! currency faults are absorbed inside namib-rates. Validation errors exist
//! for the submit path, where the user must be told what to fix.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Form input validation errors.
///
/// These occur when user input doesn't meet requirements. They are surfaced
/// to the rendering layer as field-level messages; they never interrupt
/// recomputation.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email, malformed date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// A manually entered date lies in the past.
    #[error("{field} must not be earlier than today")]
    DateInPast { field: String },

    /// Return date entered before the pickup date.
    #[error("return date must not be earlier than the pickup date")]
    ReturnBeforePickup,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "pickup location".to_string(),
        };
        assert_eq!(err.to_string(), "pickup location is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 5,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 5");

        let err = ValidationError::DateInPast {
            field: "pickup date".to_string(),
        };
        assert_eq!(err.to_string(), "pickup date must not be earlier than today");
    }
}
