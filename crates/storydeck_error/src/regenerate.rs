//! Regeneration error types and retry classification.

use crate::RetryableError;

/// Specific error conditions for storyline regeneration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RegenerationErrorKind {
    /// Every section is locked, so there is nothing to regenerate
    #[display("No draft sections to regenerate")]
    NothingToRegenerate,
    /// The storyline has never been persisted
    #[display("Storyline must be saved before regenerating")]
    UnsavedStoryline,
    /// A regeneration for the same storyline is already in flight
    #[display("Regeneration already running for storyline '{}'", _0)]
    AlreadyRunning(String),
    /// The service rejected the request because of rate limiting
    #[display("Regeneration rate limited: {}", _0)]
    RateLimited(String),
    /// The service call failed; detail surfaced verbatim when available
    #[display("Regeneration service failed: {}", _0)]
    ServiceFailure(String),
    /// The service returned a payload no section could be read from
    #[display("Malformed regeneration response: {}", _0)]
    MalformedResponse(String),
}

impl RegenerationErrorKind {
    /// Check if this error condition should be retried.
    ///
    /// Only rate-limit rejections are retryable on the regeneration path;
    /// every other class fails immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RegenerationErrorKind::RateLimited(_))
    }

    /// Get retry strategy parameters for this error condition.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    pub fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self {
            RegenerationErrorKind::RateLimited(_) => (5000, 3, 40),
            _ => (2000, 5, 60),
        }
    }
}

/// Regeneration error with source location tracking.
///
/// # Examples
///
/// ```
/// use storydeck_error::{RegenerationError, RegenerationErrorKind, RetryableError};
///
/// let err = RegenerationError::new(RegenerationErrorKind::RateLimited(
///     "429 Too Many Requests".to_string(),
/// ));
/// assert!(err.is_retryable());
///
/// let err = RegenerationError::new(RegenerationErrorKind::UnsavedStoryline);
/// assert!(!err.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Regeneration Error: {} at line {} in {}", kind, line, file)]
pub struct RegenerationError {
    /// The specific error condition
    pub kind: RegenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl RegenerationError {
    /// Create a new RegenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RegenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl RetryableError for RegenerationError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        self.kind.retry_strategy_params()
    }
}
