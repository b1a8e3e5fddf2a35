//! Email validation against the Abstract API email-validation endpoint.
//!
//! One synchronous request per address, strictly sequential: a row's
//! request (including any rate-limit retries) resolves before the next
//! row is touched, per the provider's per-second rate limit.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, warn};

use ccl_model::{CclError, ValidationOutcome};

/// Quality score a deliverable address must exceed to be kept.
pub const QUALITY_THRESHOLD: f64 = 0.7;

/// Default validation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://emailvalidation.abstractapi.com/v1/";

/// Wait between attempts after an HTTP 429.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Attempts per address before surfacing `RateLimitExceeded`.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// The seam between pipelines and the network. Pipelines only see this
/// trait, so tests drive them with canned outcomes.
pub trait EmailChecker {
    /// Validate one address. `Err` means the check could not complete
    /// at all (for example, retries exhausted under sustained rate
    /// limiting); callers degrade that to "not kept".
    fn check(&self, email: &str) -> Result<ValidationOutcome>;
}

/// Blocking client for the Abstract API email-validation service.
pub struct AbstractApiValidator {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    retry_delay: Duration,
    max_attempts: u32,
}

impl AbstractApiValidator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            retry_delay: DEFAULT_RETRY_DELAY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Point the validator at a different endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the rate-limit retry policy.
    #[must_use]
    pub fn with_retry(mut self, delay: Duration, max_attempts: u32) -> Self {
        self.retry_delay = delay;
        self.max_attempts = max_attempts.max(1);
        self
    }
}

impl EmailChecker for AbstractApiValidator {
    fn check(&self, email: &str) -> Result<ValidationOutcome> {
        for attempt in 1..=self.max_attempts {
            let response = self
                .client
                .get(&self.endpoint)
                .query(&[("api_key", self.api_key.as_str()), ("email", email)])
                .send();
            let outcome = match response {
                Ok(response) => {
                    let status = response.status().as_u16();
                    let body = response.text().unwrap_or_default();
                    classify_response(status, &body)
                }
                Err(error) => {
                    warn!(%error, "email validation request failed");
                    ValidationOutcome::RequestFailed
                }
            };
            if outcome != ValidationOutcome::RateLimited {
                debug!(attempt, outcome = outcome.label(), "email validated");
                return Ok(outcome);
            }
            if attempt < self.max_attempts {
                warn!(
                    attempt,
                    max_attempts = self.max_attempts,
                    delay_ms = self.retry_delay.as_millis() as u64,
                    "rate limited, retrying"
                );
                thread::sleep(self.retry_delay);
            }
        }
        Err(CclError::RateLimitExceeded {
            attempts: self.max_attempts,
        }
        .into())
    }
}

#[derive(Debug, Deserialize)]
struct ValidationResponse {
    deliverability: Option<String>,
    quality_score: Option<serde_json::Value>,
    is_valid_format: Option<FormatCheck>,
}

#[derive(Debug, Deserialize)]
struct FormatCheck {
    value: Option<bool>,
}

/// Map an HTTP status and body onto a [`ValidationOutcome`].
///
/// Pure so the decision rule is testable without a network. Missing or
/// malformed response fields default to values that reject the address
/// (absent quality score counts as 0).
pub fn classify_response(status: u16, body: &str) -> ValidationOutcome {
    match status {
        200 => classify_body(body),
        429 => ValidationOutcome::RateLimited,
        422 => ValidationOutcome::QuotaExceeded,
        other => {
            debug!(status = other, "unexpected validation status");
            ValidationOutcome::RequestFailed
        }
    }
}

fn classify_body(body: &str) -> ValidationOutcome {
    let parsed: ValidationResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(error) => {
            warn!(%error, "malformed validation response");
            return ValidationOutcome::RequestFailed;
        }
    };
    let deliverable = parsed.deliverability.as_deref() == Some("DELIVERABLE");
    if !deliverable {
        return ValidationOutcome::NotDeliverable;
    }
    let valid_format = parsed
        .is_valid_format
        .and_then(|check| check.value)
        .unwrap_or(false);
    if !valid_format {
        return ValidationOutcome::MalformedAddress;
    }
    if quality_score(parsed.quality_score.as_ref()) <= QUALITY_THRESHOLD {
        return ValidationOutcome::LowQuality;
    }
    ValidationOutcome::Deliverable
}

/// The service reports `quality_score` as a JSON string; accept a bare
/// number as well and fall back to 0 for anything unparseable.
fn quality_score(value: Option<&serde_json::Value>) -> f64 {
    match value {
        Some(serde_json::Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(text)) => text.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
