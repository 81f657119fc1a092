//! Failure classification and backoff schedule
//!
//! An attempt's outcome is an explicit tag, not an unwound error: the retry
//! loop inspects it and decides, so ordinary transient conditions never
//! travel through error paths.

use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

use crate::error::AuthError;
use crate::transport::{TransportError, TransportResponse};

/// Retries after the initial attempt, for transient outcomes only
pub const DEFAULT_MAX_RETRIES: u32 = 5;

const BASE_DELAY: Duration = Duration::from_millis(500);
const MAX_DELAY: Duration = Duration::from_secs(10);

/// Outcome of one physical attempt
#[derive(Debug)]
pub enum AttemptOutcome {
    /// 2xx/3xx response, returned on the attempt that produced it
    Success(TransportResponse),
    /// Retry-worthy: network-level failure, or 502/503/504
    Transient(AttemptFailure),
    /// Never retried: any other non-2xx/3xx status
    Permanent(AttemptFailure),
}

/// The failing half of an outcome
#[derive(Debug)]
pub enum AttemptFailure {
    /// No HTTP response was obtained
    Network(TransportError),
    /// An HTTP response with a failing status
    Status(TransportResponse),
}

impl AttemptFailure {
    /// Surface this failure to the caller, unchanged in substance
    pub fn into_error(self, url: &Url) -> AuthError {
        match self {
            AttemptFailure::Network(e) => AuthError::Network { message: e.message },
            AttemptFailure::Status(response) => AuthError::Status {
                status: response.status.as_u16(),
                url: url.to_string(),
                body: response.body,
            },
        }
    }
}

/// Classifies attempts and computes backoff delays
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Retries allowed after the initial attempt
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Classify the result of one attempt
    pub fn classify(
        &self,
        result: std::result::Result<TransportResponse, TransportError>,
    ) -> AttemptOutcome {
        match result {
            Err(e) => AttemptOutcome::Transient(AttemptFailure::Network(e)),
            Ok(response) => {
                let status = response.status;
                if status.is_success() || status.is_redirection() {
                    AttemptOutcome::Success(response)
                } else if is_transient_status(status) {
                    AttemptOutcome::Transient(AttemptFailure::Status(response))
                } else {
                    AttemptOutcome::Permanent(AttemptFailure::Status(response))
                }
            }
        }
    }

    /// Delay before the `retry`-th retry (1-based)
    ///
    /// Exponential from a 500ms base, capped at 10s. Pure in the attempt
    /// index, so the schedule is the same for every request.
    pub fn delay_before(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(16);
        BASE_DELAY.saturating_mul(1 << exponent).min(MAX_DELAY)
    }
}

fn is_transient_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT
    )
}
