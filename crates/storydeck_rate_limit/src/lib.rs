//! Rate limiting and error recovery for Storydeck service calls.
//!
//! Only the regeneration path retries, and only on rate-limit rejections:
//! every other error class fails immediately. The retry strategy is bounded
//! exponential backoff with jitter, parameterized per error through the
//! [`RetryableError`](storydeck_error::RetryableError) trait.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backoff;
mod policy;

pub use backoff::run_with_backoff;
pub use policy::{RetryPolicy, RetryPolicyBuilder};
