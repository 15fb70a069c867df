//! Top-level error wrapper types.

use crate::{
    HttpError, JsonError, LayoutError, RegenerationError, RetryableError, SlideError, StoreError,
    SuggestionError,
};

/// This is the foundation error enum aggregating every Storydeck domain
/// error.
///
/// # Examples
///
/// ```
/// use storydeck_error::{StorydeckError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: StorydeckError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorydeckErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Layout catalog error
    #[from(LayoutError)]
    Layout(LayoutError),
    /// Section state store error
    #[from(StoreError)]
    Store(StoreError),
    /// Storyline regeneration error
    #[from(RegenerationError)]
    Regeneration(RegenerationError),
    /// Slide generation error
    #[from(SlideError)]
    Slide(SlideError),
    /// Design suggestion error
    #[from(SuggestionError)]
    Suggestion(SuggestionError),
}

/// Storydeck error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storydeck_error::{StorydeckResult, StoreError, StoreErrorKind};
///
/// fn might_fail() -> StorydeckResult<()> {
///     Err(StoreError::new(StoreErrorKind::SectionNotFound("s1".into())))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storydeck Error: {}", _0)]
pub struct StorydeckError(Box<StorydeckErrorKind>);

impl StorydeckError {
    /// Create a new error from a kind.
    pub fn new(kind: StorydeckErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorydeckErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StorydeckErrorKind
impl<T> From<T> for StorydeckError
where
    T: Into<StorydeckErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

impl RetryableError for StorydeckError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            StorydeckErrorKind::Regeneration(e) => e.is_retryable(),
            _ => false,
        }
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self.kind() {
            StorydeckErrorKind::Regeneration(e) => e.retry_strategy_params(),
            _ => (2000, 5, 60),
        }
    }
}

/// Result type for Storydeck operations.
///
/// # Examples
///
/// ```
/// use storydeck_error::{StorydeckResult, HttpError};
///
/// fn fetch_storyline() -> StorydeckResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type StorydeckResult<T> = std::result::Result<T, StorydeckError>;
