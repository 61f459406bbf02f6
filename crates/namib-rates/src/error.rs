//! # Error Types
//!
//! Typed failures for the currency service.
//!
//! Every variant here is recovered from inside the service: a failed fetch
//! resets the rate to 1.0, a failed format falls back to a plain
//! `"<code> <amount>"` string. Errors carry enough context for the warning
//! logs; they never escape to interrupt pricing.

use thiserror::Error;

// =============================================================================
// Rates Error
// =============================================================================

/// Failures while fetching or applying an exchange rate.
#[derive(Debug, Error)]
pub enum RatesError {
    /// Transport-level failure (connect, timeout, TLS, body read) or
    /// HTTP client construction failure.
    #[error("rate request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("rate API returned HTTP status {status}")]
    Status { status: u16 },

    /// The API payload reported an unsuccessful result.
    #[error("rate API reported failure: {kind}")]
    Api { kind: String },

    /// The payload claimed success but carried no usable rate.
    #[error("rate API response is missing a conversion rate")]
    MissingRate,

    /// The payload carried a rate that is not a positive finite number.
    #[error("rate API returned an unusable conversion rate: {rate}")]
    InvalidRate { rate: f64 },

    /// The selected code is not a known ISO-4217 currency, so no localized
    /// format exists for it.
    #[error("unsupported display currency: {code}")]
    UnsupportedCurrency { code: String },
}

/// Convenience type alias for Results with RatesError.
pub type RatesResult<T> = Result<T, RatesError>;

// =============================================================================
// Unit Tests
// =============================================================================
