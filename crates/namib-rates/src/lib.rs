//! # namib-rates: Currency Service for Namib Rentals
//!
//! Owns the selected display currency and the NAD→currency exchange rate,
//! fetches rates from the external pair-conversion API, and renders every
//! converted display amount.
//!
//! This is the only crate in the workspace that performs I/O, and the rate
//! fetch is the engine's only suspension point. Every failure mode folds
//! back to rate 1.0 with a logged warning: a currency-service fault
//! degrades the display, never the pricing.
//!
//! ## Modules
//!
//! - [`client`] - HTTP rate client and the [`client::RateSource`] seam
//! - [`config`] - Base URL / API key configuration with env overrides
//! - [`service`] - Rate state, conversion, and localized formatting
//! - [`error`] - Typed failures (all recovered internally)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use namib_core::Money;
//! use namib_rates::{CurrencyService, RatesConfig};
//!
//! # async fn demo() -> Result<(), namib_rates::RatesError> {
//! let mut currency = CurrencyService::new(RatesConfig::from_env())?;
//!
//! currency.set_currency("USD").await;
//! let display = currency.format(Money::from_cents(172_500));
//! # let _ = display;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod service;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use client::{RateClient, RateSource};
pub use config::RatesConfig;
pub use error::{RatesError, RatesResult};
pub use service::{CurrencyService, RateState, DEFAULT_RATE};
