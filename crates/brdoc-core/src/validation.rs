use thiserror::Error;

use crate::schema::IdClass;

/// Broad category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input cannot be evaluated at all (wrong digit count, too wide).
    Malformed,
    /// The input is well-formed but its check digits do not match.
    Invalid,
}

/// Validation errors for Brazilian identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// When the normalized digit string has the wrong length.
    #[error("{class} ('{value}') must have {expected} digits, found {found}")]
    PatternMismatch {
        /// Identifier class being processed.
        class: IdClass,
        /// Offending value, as supplied.
        value: String,
        /// Digits required by the class.
        expected: usize,
        /// Digits left after normalization.
        found: usize,
    },
    /// When a number needs more digits than the class allows.
    #[error("{class} ({value}) does not fit in {width} digits")]
    OutOfBounds {
        /// Identifier class being processed.
        class: IdClass,
        /// Offending value.
        value: String,
        /// Total width of the class.
        width: usize,
    },
    /// When the check digits do not match the base digits.
    #[error("{class} ('{value}') has invalid check digits")]
    InvalidCheckDigits {
        /// Identifier class being processed.
        class: IdClass,
        /// Canonical value that failed validation.
        value: String,
    },
}

impl ValidationError {
    /// Returns whether the input was malformed or merely invalid.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::PatternMismatch { .. } | ValidationError::OutOfBounds { .. } => {
                ErrorKind::Malformed
            }
            ValidationError::InvalidCheckDigits { .. } => ErrorKind::Invalid,
        }
    }

    /// Identifier class the error refers to.
    pub fn class(&self) -> IdClass {
        match self {
            ValidationError::PatternMismatch { class, .. }
            | ValidationError::OutOfBounds { class, .. }
            | ValidationError::InvalidCheckDigits { class, .. } => *class,
        }
    }
}
