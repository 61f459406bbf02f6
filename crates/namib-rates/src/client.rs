//! # Rate Client
//!
//! HTTP client for the exchange-rate pair-conversion endpoint.
//!
//! ## Wire Format
//! ```text
//! GET {base_url}/{api_key}/pair/NAD/{code}
//!
//! 200 OK
//! { "result": "success", "conversion_rate": 0.054 }
//!
//! 200 OK (API-level failure)
//! { "result": "error", "error-type": "invalid-key" }
//! ```
//!
//! Any other shape — non-success HTTP status, non-"success" result field,
//! missing or non-positive rate — is a typed [`RatesError`]. The caller
//! (the currency service) decides what a failure means; this client only
//! reports it.

use serde::Deserialize;
use tracing::debug;

use namib_core::BASE_CURRENCY;

use crate::config::RatesConfig;
use crate::error::{RatesError, RatesResult};

// =============================================================================
// API Payload
// =============================================================================

/// The pair-conversion response body.
#[derive(Debug, Deserialize)]
struct PairRateResponse {
    /// "success" on a usable answer; anything else is a failure.
    result: String,

    /// NAD→target multiplier; present only on success.
    conversion_rate: Option<f64>,

    /// Failure kind reported by the API, e.g. "invalid-key".
    #[serde(rename = "error-type")]
    error_type: Option<String>,
}

// =============================================================================
// Rate Source Seam
// =============================================================================

/// Anything that can resolve a NAD→target exchange rate.
///
/// The HTTP [`RateClient`] is the production implementation; tests plug in
/// fixed or failing sources to drive the fallback paths without a network.
pub trait RateSource {
    /// Resolves the NAD→`target` rate.
    async fn pair_rate(&self, target: &str) -> RatesResult<f64>;
}

// =============================================================================
// Rate Client
// =============================================================================

/// HTTP implementation of [`RateSource`] against the exchange-rate API.
#[derive(Debug, Clone)]
pub struct RateClient {
    http: reqwest::Client,
    config: RatesConfig,
}

impl RateClient {
    /// Builds the client from a config.
    ///
    /// ## Errors
    /// Fails only if the underlying HTTP client cannot be constructed; this
    /// is the one initialization failure the engine surfaces instead of
    /// absorbing.
    pub fn new(config: RatesConfig) -> RatesResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(RateClient { http, config })
    }

    /// The request URL for a target code. The API key is a path segment,
    /// so it is never logged — log `target` instead.
    fn pair_url(&self, target: &str) -> String {
        format!(
            "{}/{}/pair/{}/{}",
            self.config.base_url, self.config.api_key, BASE_CURRENCY, target
        )
    }
}

impl RateSource for RateClient {
    async fn pair_rate(&self, target: &str) -> RatesResult<f64> {
        debug!(target = %target, "requesting pair rate");

        let response = self.http.get(self.pair_url(target)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RatesError::Status {
                status: status.as_u16(),
            });
        }

        let payload: PairRateResponse = response.json().await?;

        if payload.result != "success" {
            return Err(RatesError::Api {
                kind: payload
                    .error_type
                    .unwrap_or_else(|| "unknown".to_string()),
            });
        }

        let rate = payload.conversion_rate.ok_or(RatesError::MissingRate)?;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RatesError::InvalidRate { rate });
        }

        Ok(rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
