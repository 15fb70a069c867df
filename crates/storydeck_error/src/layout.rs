//! Layout catalog error types.

/// Specific error conditions for layout catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LayoutErrorKind {
    /// Layout id not present in the catalog
    #[display("Unknown layout id: {}", _0)]
    UnknownLayout(String),
    /// Layout is not compatible with the section's framework
    #[display("Layout '{}' is not supported for framework '{}'", layout, framework)]
    UnsupportedLayout {
        /// The rejected layout id
        layout: String,
        /// The section's framework tag
        framework: String,
    },
}

/// Error type for layout catalog operations.
///
/// # Examples
///
/// ```
/// use storydeck_error::{LayoutError, LayoutErrorKind};
///
/// let err = LayoutError::new(LayoutErrorKind::UnknownLayout("hexagon".into()));
/// assert!(format!("{}", err).contains("hexagon"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Layout Error: {} at line {} in {}", kind, line, file)]
pub struct LayoutError {
    /// The specific error condition
    pub kind: LayoutErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl LayoutError {
    /// Create a new LayoutError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LayoutErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
