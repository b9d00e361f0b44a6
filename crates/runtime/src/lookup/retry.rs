//! Fixed-delay retry for fallible async operations.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::config::LookupConfig;

/// Retry schedule: up to `max_retries + 1` attempts, each bounded by
/// `attempt_timeout`, separated by a fixed `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            delay: Duration::from_secs(1),
            attempt_timeout: Duration::from_secs(10),
        }
    }
}

impl From<&LookupConfig> for RetryPolicy {
    fn from(config: &LookupConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            delay: config.retry_delay,
            attempt_timeout: config.attempt_timeout,
        }
    }
}

/// Every attempt failed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("gave up after {attempts} attempts")]
pub struct RetryError<E> {
    pub attempts: u32,
    /// Failure of the final attempt; `None` when it timed out.
    pub last: Option<E>,
}

impl RetryPolicy {
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Runs `operation` until it succeeds or the attempts are exhausted.
    pub async fn run<T, E, F, Fut>(&self, mut operation: F) -> Result<T, RetryError<E>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let last = match tokio::time::timeout(self.attempt_timeout, operation(attempt)).await {
                Ok(Ok(value)) => return Ok(value),
                Ok(Err(err)) => {
                    tracing::debug!(target: "runtime::lookup", attempt, error = %err, "Attempt failed");
                    Some(err)
                }
                Err(_) => {
                    tracing::debug!(target: "runtime::lookup", attempt, "Attempt timed out");
                    None
                }
            };

            if attempt >= self.max_attempts() {
                return Err(RetryError {
                    attempts: attempt,
                    last,
                });
            }
            tokio::time::sleep(self.delay).await;
        }
    }
}
