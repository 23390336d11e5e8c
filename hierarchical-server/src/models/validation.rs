//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty (or only whitespace) when it shouldn't be
    Empty { field: &'static str },

    /// String doesn't match required format
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Empty { field: "syllabus id" };
        assert_eq!(err.to_string(), "syllabus id cannot be empty");

        let err = ValidationError::InvalidFormat {
            field: "syllabus id",
            reason: "not valid UTF-8",
        };
        assert_eq!(err.to_string(), "syllabus id: not valid UTF-8");
    }
}
