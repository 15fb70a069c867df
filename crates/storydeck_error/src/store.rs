//! Section state store error types.

/// Specific error conditions for state store operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// No section with the given id exists in the storyline
    #[display("No section with id '{}' in storyline", _0)]
    SectionNotFound(String),
    /// Two sections carry the same id
    #[display("Duplicate section id '{}'", _0)]
    DuplicateSection(String),
}

/// Error type for state store operations.
///
/// # Examples
///
/// ```
/// use storydeck_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::SectionNotFound("s9".into()));
/// assert!(format!("{}", err).contains("s9"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The specific error condition
    pub kind: StoreErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoreError {
    /// Create a new StoreError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
