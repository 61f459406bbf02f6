//! # Currency Service
//!
//! Holds the selected display currency and the NAD→currency exchange rate,
//! and produces every converted/formatted display amount.
//!
//! ## Rate Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Exchange Rate Lifecycle                            │
//! │                                                                         │
//! │  startup ──────────────► { "NAD", 1.0 }                                │
//! │                                                                         │
//! │  set_currency("USD") ──► refresh ──► fetch pair NAD/USD                │
//! │                              │                                          │
//! │                              ├── success ──► { "USD", 0.054 }          │
//! │                              │                                          │
//! │                              └── any failure ──► { "USD", 1.0 }        │
//! │                                  (logged; pricing keeps working)        │
//! │                                                                         │
//! │  set_currency("NAD") ──► { "NAD", 1.0 }  (no fetch)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! While a refresh is in flight the previous rate stays in effect; callers
//! recompute with the last-known rate and again once the refresh resolves.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use namib_core::{Money, BASE_CURRENCY};
use rusty_money::{iso, Money as IsoMoney};

use crate::client::{RateClient, RateSource};
use crate::config::RatesConfig;
use crate::error::{RatesError, RatesResult};

/// The neutral rate: NAD to NAD, and the fallback after any fetch failure.
pub const DEFAULT_RATE: f64 = 1.0;

// =============================================================================
// Rate State
// =============================================================================

/// Read-only snapshot of the current currency selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateState {
    /// Selected display currency code.
    pub currency_code: String,

    /// Multiplier from NAD into the display currency.
    pub rate: f64,
}

impl Default for RateState {
    fn default() -> Self {
        RateState {
            currency_code: BASE_CURRENCY.to_string(),
            rate: DEFAULT_RATE,
        }
    }
}

// =============================================================================
// Currency Service
// =============================================================================

/// Owns the rate state and performs conversion + formatting.
///
/// Generic over the [`RateSource`] so the engine can be driven without a
/// network; production code uses the HTTP [`RateClient`].
#[derive(Debug)]
pub struct CurrencyService<S: RateSource = RateClient> {
    source: S,
    state: RateState,
}

impl CurrencyService<RateClient> {
    /// Builds the service with the HTTP rate client.
    ///
    /// ## Errors
    /// Fails only on HTTP client construction; see [`RateClient::new`].
    pub fn new(config: RatesConfig) -> RatesResult<Self> {
        Ok(CurrencyService {
            source: RateClient::new(config)?,
            state: RateState::default(),
        })
    }
}

impl<S: RateSource> CurrencyService<S> {
    /// Builds the service over an arbitrary rate source.
    pub fn with_source(source: S) -> Self {
        CurrencyService {
            source,
            state: RateState::default(),
        }
    }

    /// Returns a read-only snapshot of the current {code, rate} pair.
    pub fn state(&self) -> RateState {
        self.state.clone()
    }

    /// The selected display currency code.
    pub fn currency_code(&self) -> &str {
        &self.state.currency_code
    }

    /// The current NAD→currency multiplier.
    pub fn rate(&self) -> f64 {
        self.state.rate
    }

    /// Selects a display currency and refreshes its rate.
    ///
    /// The code is stored first; until the refresh resolves, the previous
    /// rate remains in effect for any concurrent reads.
    pub async fn set_currency(&mut self, code: &str) {
        self.state.currency_code = code.to_string();
        self.refresh_rate().await;
    }

    /// Refreshes the exchange rate for the selected currency.
    ///
    /// NAD resolves synchronously to 1.0 without touching the network. For
    /// any other code the rate is fetched; on any failure the service logs
    /// a warning and falls back to 1.0 — a currency fault never makes
    /// pricing itself fail.
    pub async fn refresh_rate(&mut self) {
        if self.state.currency_code == BASE_CURRENCY {
            self.state.rate = DEFAULT_RATE;
            return;
        }

        match self.source.pair_rate(&self.state.currency_code).await {
            Ok(rate) => {
                info!(currency = %self.state.currency_code, rate, "exchange rate refreshed");
                self.state.rate = rate;
            }
            Err(err) => {
                warn!(
                    currency = %self.state.currency_code,
                    error = %err,
                    "exchange rate fetch failed, falling back to rate 1.0"
                );
                self.state.rate = DEFAULT_RATE;
            }
        }
    }

    /// Converts a NAD amount into the display currency, rounded to cents.
    pub fn convert(&self, amount: Money) -> Money {
        Money::from_cents((amount.cents() as f64 * self.state.rate).round() as i64)
    }

    /// Formats a NAD amount as a localized display-currency string.
    ///
    /// On formatting failure (a code outside the ISO table) the fallback is
    /// `"<code> <amount>"`. The fallback amount is the raw converted value,
    /// NOT rounded to 2 decimals — this mirrors the production site's
    /// degraded path and is kept as-is; see DESIGN.md.
    pub fn format(&self, amount: Money) -> String {
        match self.try_format(amount) {
            Ok(formatted) => formatted,
            Err(err) => {
                warn!(
                    currency = %self.state.currency_code,
                    error = %err,
                    "currency formatting failed, using plain fallback"
                );
                format!(
                    "{} {}",
                    self.state.currency_code,
                    amount.cents() as f64 / 100.0 * self.state.rate
                )
            }
        }
    }

    fn try_format(&self, amount: Money) -> RatesResult<String> {
        let currency =
            iso::find(&self.state.currency_code).ok_or_else(|| RatesError::UnsupportedCurrency {
                code: self.state.currency_code.clone(),
            })?;

        Ok(IsoMoney::from_minor(self.convert(amount).cents(), currency).to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
