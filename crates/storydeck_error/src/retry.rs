//! Retry classification for transient failures.

/// Trait for errors that support retry logic.
///
/// This trait allows error types to specify whether they should trigger a
/// retry and what retry strategy parameters to use.
///
/// # Examples
///
/// ```
/// use storydeck_error::{RegenerationError, RegenerationErrorKind, RetryableError};
///
/// let err = RegenerationError::new(RegenerationErrorKind::RateLimited(
///     "quota exhausted".to_string(),
/// ));
///
/// assert!(err.is_retryable());
/// let (backoff, retries, max_delay) = err.retry_strategy_params();
/// assert_eq!(backoff, 5000);
/// assert_eq!(retries, 3);
/// assert_eq!(max_delay, 40);
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Rate-limit rejections return true. Validation errors, malformed
    /// payloads, and everything the caller can do nothing about by waiting
    /// return false.
    fn is_retryable(&self) -> bool;

    /// Get retry strategy parameters for this error.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    /// Default implementation returns standard parameters.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (2000, 5, 60)
    }
}
