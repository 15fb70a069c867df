//! Retry policy configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storydeck_error::RetryableError;

fn default_initial_backoff_ms() -> u64 {
    2000
}

fn default_max_retries() -> usize {
    5
}

fn default_max_delay_secs() -> u64 {
    60
}

/// Bounded exponential backoff parameters.
///
/// # Examples
///
/// ```
/// use storydeck_rate_limit::RetryPolicy;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(*policy.max_retries(), 5);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[builder(default)]
#[setters(prefix = "with_")]
pub struct RetryPolicy {
    /// Delay before the first retry
    #[serde(default = "default_initial_backoff_ms")]
    initial_backoff_ms: u64,
    /// Maximum number of retries after the initial attempt
    #[serde(default = "default_max_retries")]
    max_retries: usize,
    /// Ceiling on any single backoff delay
    #[serde(default = "default_max_delay_secs")]
    max_delay_secs: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_backoff_ms: default_initial_backoff_ms(),
            max_retries: default_max_retries(),
            max_delay_secs: default_max_delay_secs(),
        }
    }
}

impl RetryPolicy {
    /// Derive the policy an error asks for.
    ///
    /// # Examples
    ///
    /// ```
    /// use storydeck_error::{RegenerationError, RegenerationErrorKind};
    /// use storydeck_rate_limit::RetryPolicy;
    ///
    /// let err = RegenerationError::new(RegenerationErrorKind::RateLimited(
    ///     "429".to_string(),
    /// ));
    /// let policy = RetryPolicy::for_error(&err);
    /// assert_eq!(*policy.initial_backoff_ms(), 5000);
    /// assert_eq!(*policy.max_retries(), 3);
    /// ```
    pub fn for_error(error: &impl RetryableError) -> Self {
        let (initial_backoff_ms, max_retries, max_delay_secs) = error.retry_strategy_params();
        Self {
            initial_backoff_ms,
            max_retries,
            max_delay_secs,
        }
    }
}
