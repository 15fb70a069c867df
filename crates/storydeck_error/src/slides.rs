//! Slide generation error types.

/// Specific error conditions for per-section slide generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SlideErrorKind {
    /// The service answered successfully but returned zero slides
    #[display("Slide service returned an empty deck for section '{}'", _0)]
    EmptyDeck(String),
    /// The service reported a failure for one section
    #[display("Slide generation failed for section '{}': {}", section, message)]
    ServiceFailure {
        /// Section the failure belongs to
        section: String,
        /// Error detail from the service
        message: String,
    },
}

/// Error type for slide generation.
///
/// # Examples
///
/// ```
/// use storydeck_error::{SlideError, SlideErrorKind};
///
/// let err = SlideError::new(SlideErrorKind::EmptyDeck("s1".into()));
/// assert!(format!("{}", err).contains("empty deck"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Slide Error: {} at line {} in {}", kind, line, file)]
pub struct SlideError {
    /// The specific error condition
    pub kind: SlideErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SlideError {
    /// Create a new SlideError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SlideErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
