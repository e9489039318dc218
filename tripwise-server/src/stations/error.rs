//! Station catalog error types.

/// Errors from strict catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StationError {
    /// No station with this name exists in the catalog
    #[error("station not found: {0}")]
    NotFound(String),

    /// Two stations share the same name
    #[error("duplicate station name: {0}")]
    DuplicateName(String),
}
