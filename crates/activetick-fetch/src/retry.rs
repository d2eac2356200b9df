//! Opt-in retry with exponential backoff at the transport boundary.
//!
//! The request client never retries on its own. Wrapping a transport in
//! [`RetryTransport`] re-issues the same GET on connection failures, `429`
//! and `5xx` responses; page contents and paging decisions are unaffected.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::transport::{HttpResponse, Transport, TransportError};

/// Backoff schedule for [`RetryTransport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum extra attempts after the first one.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on every attempt.
    pub base_delay: Duration,
    /// Upper bound on a single delay, before jitter.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Sets the retry count.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Delay before retry number `attempt` (1-based).
    ///
    /// `base_delay * 2^attempt`, capped at `max_delay`, with a deterministic
    /// jitter of up to ±25%.
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        let base = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        let max = u64::try_from(self.max_delay.as_millis()).unwrap_or(u64::MAX);
        let capped = base.saturating_mul(1u64 << attempt.min(10)).min(max);

        let jitter_range = capped / 4;
        if jitter_range == 0 {
            return Duration::from_millis(capped);
        }
        let offset = (u64::from(attempt) * 17) % (jitter_range * 2);
        Duration::from_millis(capped - jitter_range + offset)
    }
}

/// Returns true for statuses worth retrying.
#[must_use]
pub const fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500..=599)
}

/// Wraps a transport and retries failed GETs per a [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct RetryTransport<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T: Transport> RetryTransport<T> {
    /// Wraps `inner`.
    pub const fn new(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    /// Returns the wrapped transport.
    pub const fn inner(&self) -> &T {
        &self.inner
    }

    /// Returns the retry policy.
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

#[async_trait]
impl<T: Transport> Transport for RetryTransport<T> {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let mut attempt = 0;
        loop {
            let result = self.inner.get(url).await;
            let retryable = match &result {
                Ok(response) => is_retryable_status(response.status),
                Err(_) => true,
            };
            if !retryable || attempt >= self.policy.max_retries {
                return result;
            }

            attempt += 1;
            let delay = self.policy.delay(attempt);
            match &result {
                Ok(response) => tracing::warn!(
                    %url, status = response.status, attempt, ?delay, "retrying after server error"
                ),
                Err(e) => tracing::warn!(%url, error = %e, attempt, ?delay, "retrying after transport error"),
            }
            tokio::time::sleep(delay).await;
        }
    }
}
