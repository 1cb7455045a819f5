//! Linear-backoff retry for provider calls.

use std::future::Future;
use std::time::Duration;

use tokio_retry::RetryIf;
use tracing::warn;

use crate::errors::AssistError;

pub const DEFAULT_MAX_ATTEMPTS: usize = 2;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: usize,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub const fn new(max_attempts: usize, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Waits before attempts 2..=max_attempts: `base`, `2 * base`, `3 * base`, ...
    pub fn delays(&self) -> impl Iterator<Item = Duration> + use<> {
        let base = self.base_delay;
        (1..self.max_attempts).map(move |n| base.saturating_mul(u32::try_from(n).unwrap_or(u32::MAX)))
    }

    /// Run `operation` until it succeeds, fails with a non-retryable error, or
    /// the attempts run out. `operation` receives the 1-based attempt number.
    ///
    /// # Errors
    ///
    /// Returns the last error observed, or `RetriesExhausted` if the policy
    /// allows no attempts at all.
    pub async fn run<F, Fut, T>(&self, mut operation: F) -> Result<T, AssistError>
    where
        F: FnMut(usize) -> Fut,
        Fut: Future<Output = Result<T, AssistError>>,
    {
        if self.max_attempts == 0 {
            return Err(AssistError::RetriesExhausted);
        }

        let max_attempts = self.max_attempts;
        let mut attempt = 0usize;

        RetryIf::spawn(
            self.delays(),
            || {
                attempt += 1;
                let current = attempt;
                let fut = operation(current);
                async move {
                    let result = fut.await;
                    if let Err(e) = &result {
                        warn!(
                            attempt = current,
                            max_attempts,
                            retryable = e.is_retryable(),
                            "Provider call failed: {}",
                            e
                        );
                    }
                    result
                }
            },
            AssistError::is_retryable,
        )
        .await
    }
}
