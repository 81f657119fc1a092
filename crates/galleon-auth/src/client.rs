//! Resilient request execution
//!
//! Drives the retry policy across repeated transport attempts. The backoff
//! wait is a plain await scoped to the calling task; concurrent requests
//! share no retry state.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::retry::{AttemptOutcome, RetryPolicy};
use crate::transport::{Transport, TransportRequest, TransportResponse};

/// Sleep capability, injected so tests can record or skip waits
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Executes one logical request as up to `1 + max_retries` physical attempts
pub struct ResilientClient {
    transport: Arc<dyn Transport>,
    sleeper: Arc<dyn Sleeper>,
    policy: RetryPolicy,
}

impl ResilientClient {
    /// Create a client with the default policy and tokio sleep
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_parts(transport, Arc::new(TokioSleeper), RetryPolicy::default())
    }

    /// Create a client with explicit collaborators
    pub fn with_parts(
        transport: Arc<dyn Transport>,
        sleeper: Arc<dyn Sleeper>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            sleeper,
            policy,
        }
    }

    /// Execute a request, retrying transient failures with backoff
    ///
    /// Returns the first successful response, raises a permanent failure
    /// immediately, and re-surfaces the last transient failure once the
    /// retry budget is exhausted.
    pub async fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        let mut retries = 0u32;

        loop {
            let attempt = self.transport.send(&request).await;
            match self.policy.classify(attempt) {
                AttemptOutcome::Success(response) => return Ok(response),
                AttemptOutcome::Permanent(failure) => {
                    return Err(failure.into_error(&request.url));
                }
                AttemptOutcome::Transient(failure) => {
                    if retries >= self.policy.max_retries() {
                        return Err(failure.into_error(&request.url));
                    }
                    retries += 1;
                    let delay = self.policy.delay_before(retries);
                    tracing::debug!("retrying HTTP request in {:?}", delay);
                    self.sleeper.sleep(delay).await;
                }
            }
        }
    }
}
