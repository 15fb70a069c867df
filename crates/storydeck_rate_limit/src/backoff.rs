//! Backoff-driven retry execution.

use crate::RetryPolicy;
use std::future::Future;
use storydeck_error::RetryableError;
use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};
use tracing::warn;

/// Run an operation under bounded exponential backoff.
///
/// Retryable errors (per [`RetryableError::is_retryable`]) are retried up to
/// the policy's limit with jittered exponential delays; permanent errors fail
/// immediately. The last error is returned once retries exhaust.
///
/// # Errors
///
/// Returns the operation's error when it is permanent or retries exhaust.
///
/// # Examples
///
/// ```
/// use storydeck_error::{RegenerationError, RegenerationErrorKind};
/// use storydeck_rate_limit::{RetryPolicy, RetryPolicyBuilder, run_with_backoff};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let policy = RetryPolicyBuilder::default()
///     .initial_backoff_ms(1u64)
///     .max_retries(2usize)
///     .build()
///     .unwrap();
///
/// // A permanent error is not retried.
/// let result: Result<(), _> = run_with_backoff(&policy, || async {
///     Err(RegenerationError::new(RegenerationErrorKind::UnsavedStoryline))
/// })
/// .await;
/// assert!(result.is_err());
/// # }
/// ```
pub async fn run_with_backoff<T, E, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: RetryableError + std::fmt::Display,
{
    let strategy = ExponentialBackoff::from_millis(*policy.initial_backoff_ms())
        .factor(2)
        .max_delay(std::time::Duration::from_secs(*policy.max_delay_secs()))
        .map(jitter)
        .take(*policy.max_retries());

    Retry::spawn(strategy, || {
        let attempt = operation();
        async move {
            match attempt.await {
                Ok(value) => Ok(value),
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, "Transient failure, will retry with backoff");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Permanent failure, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        }
    })
    .await
}
