//! Error types for the Storydeck library.
//!
//! This crate provides the foundation error types used throughout the
//! Storydeck ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storydeck_error::{StorydeckResult, HttpError};
//!
//! fn fetch_storyline() -> StorydeckResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_storyline() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod http;
mod json;
mod layout;
mod regenerate;
mod retry;
mod slides;
mod store;
mod suggestion;

pub use error::{StorydeckError, StorydeckErrorKind, StorydeckResult};
pub use http::HttpError;
pub use json::JsonError;
pub use layout::{LayoutError, LayoutErrorKind};
pub use regenerate::{RegenerationError, RegenerationErrorKind};
pub use retry::RetryableError;
pub use slides::{SlideError, SlideErrorKind};
pub use store::{StoreError, StoreErrorKind};
pub use suggestion::{SuggestionError, SuggestionErrorKind};
