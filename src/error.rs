//! Error types.
//!
//! Catalog problems surface as [`TimetableError::Validation`] before any
//! solution is generated. Entry invariant violations and bad engine
//! parameters have their own variants. Conflicts are never errors; they
//! are the fitness signal.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Top-level error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimetableError {
    /// The course catalog failed validation.
    #[error("catalog validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A schedule entry would break a domain invariant.
    #[error("invalid schedule entry: {0}")]
    InvalidEntry(String),

    /// Semester tag outside {2, 4, 6}.
    #[error("semester must be 2, 4 or 6, got {0}")]
    InvalidSemester(u8),

    /// Engine parameters out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A catalog validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of catalog validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A `semester_N` bucket is absent.
    MissingSemester,
    /// A course record has an empty code or name.
    MissingField,
    /// Credit weight is not a positive integer.
    InvalidCredits,
    /// A course has no eligible instructor (or a blank one).
    NoInstructors,
    /// The room pool is empty.
    NoRooms,
    /// Two courses share a code.
    DuplicateCourse,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err: TimetableError =
            ValidationError::new(ValidationErrorKind::NoRooms, "room pool is empty").into();
        assert_eq!(
            err.to_string(),
            "catalog validation failed: NoRooms: room pool is empty"
        );
    }

    #[test]
    fn test_invalid_semester_display() {
        assert_eq!(
            TimetableError::InvalidSemester(5).to_string(),
            "semester must be 2, 4 or 6, got 5"
        );
    }
}
