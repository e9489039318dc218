//! Fare estimation error types.

/// Errors from fare estimation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FareError {
    /// An argument was outside its valid domain (negative distance, bad hour)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A rate card or roster failed validation
    #[error("invalid roster: {0}")]
    InvalidRoster(String),
}
