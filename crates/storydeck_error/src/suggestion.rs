//! Design suggestion error types.

/// Specific error conditions for AI design suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SuggestionErrorKind {
    /// The section's framework does not qualify for a design suggestion
    #[display("Section '{}' is not eligible for a design suggestion", _0)]
    IneligibleSection(String),
    /// A suggestion for the same section is already in flight
    #[display("Suggestion already loading for section '{}'", _0)]
    AlreadyLoading(String),
    /// The section has no cached layout preview to apply
    #[display("Section '{}' has no layout preview to apply", _0)]
    MissingPreview(String),
    /// The selected layout does not match the layout the preview was computed for
    #[display(
        "Preview was computed for layout '{}' but '{}' is selected",
        recommended,
        selected
    )]
    LayoutMismatch {
        /// Layout currently selected on the section
        selected: String,
        /// Layout the cached preview recommends
        recommended: String,
    },
    /// The response arrived after the target section changed identity
    #[display("Discarded stale suggestion response for section '{}'", _0)]
    StaleResponse(String),
    /// The response carried no usable recommendation payload
    #[display("Malformed suggestion response: {}", _0)]
    MalformedResponse(String),
}

/// Error type for design suggestion operations.
///
/// # Examples
///
/// ```
/// use storydeck_error::{SuggestionError, SuggestionErrorKind};
///
/// let err = SuggestionError::new(SuggestionErrorKind::LayoutMismatch {
///     selected: "full-width".into(),
///     recommended: "grid-2x2".into(),
/// });
/// assert!(format!("{}", err).contains("grid-2x2"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Suggestion Error: {} at line {} in {}", kind, line, file)]
pub struct SuggestionError {
    /// The specific error condition
    pub kind: SuggestionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SuggestionError {
    /// Create a new SuggestionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SuggestionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
