use std::sync::Arc;
use std::time::Duration;

use crate::error::EmbedError;

/// Default total number of attempts.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Default delay before the first retry; doubles on each further retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(2);

type RetryPredicate = Arc<dyn Fn(&EmbedError) -> bool + Send + Sync>;

/// Retry policy for the embedding transport.
///
/// `max_retries` is the total attempt ceiling (5 means one initial attempt
/// plus up to four retries). The default predicate treats every attempt
/// error as retryable: under a flaky connection even authentication
/// failures can be indistinguishable from transient network issues, so the
/// policy retries unconditionally and lets the final attempt's error text
/// carry the diagnostic detail. Callers who want to fail fast on permanent
/// errors can tighten this with [`RetryPolicy::with_retryable`].
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    retryable: RetryPredicate,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_BASE_DELAY)
    }
}

impl Clone for RetryPolicy {
    fn clone(&self) -> Self {
        Self {
            max_retries: self.max_retries,
            base_delay: self.base_delay,
            retryable: Arc::clone(&self.retryable),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            retryable: Arc::new(|_| true),
        }
    }

    /// Replaces the retryability predicate.
    pub fn with_retryable(
        mut self,
        pred: impl Fn(&EmbedError) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.retryable = Arc::new(pred);
        self
    }

    /// Returns true if the error is worth another attempt.
    pub fn is_retryable(&self, err: &EmbedError) -> bool {
        (self.retryable)(err)
    }

    /// Backoff before the retry that follows failed attempt `n` (0-based).
    /// Exponential: base, 2*base, 4*base, ...
    pub fn delay_before(&self, failed_attempt: u32) -> Duration {
        self.base_delay * (1u32 << failed_attempt)
    }
}
