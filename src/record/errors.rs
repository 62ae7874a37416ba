//! # Validation Errors
//!
//! Each variant's display text is the exact message returned to clients.

use thiserror::Error;

/// Result type for record validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A request payload failed one of the record rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required.")]
    TitleRequired,

    #[error("Type is required.")]
    TypeRequired,

    /// Only raised when strict categories are enabled
    #[error("Invalid type.")]
    InvalidType,

    #[error("Genre is required.")]
    GenreRequired,

    #[error("Year must be a whole number.")]
    YearNotWholeNumber,

    #[error("Year must be between 1900 and 2100.")]
    YearOutOfRange,

    #[error("Status is required.")]
    StatusRequired,

    /// Only raised when strict categories are enabled
    #[error("Invalid status.")]
    InvalidStatus,

    #[error("Rating must be a whole number.")]
    RatingNotWholeNumber,

    #[error("Rating must be between 1 and 10.")]
    RatingOutOfRange,
}
