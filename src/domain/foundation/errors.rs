//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    InvalidFormat,
    InputTooLarge,

    // Calculation errors
    ShapeMismatch,
    InvalidRange,
    DegenerateInput,
    UndefinedConsistency,

    // Infrastructure errors
    InternalError,
}

impl ErrorCode {
    /// Returns true if the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorCode::InternalError)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InputTooLarge => "INPUT_TOO_LARGE",
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::InvalidRange => "INVALID_RANGE",
            ErrorCode::DegenerateInput => "DEGENERATE_INPUT",
            ErrorCode::UndefinedConsistency => "UNDEFINED_CONSISTENCY",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        match &err {
            ValidationError::InvalidFormat { field, .. } => {
                DomainError::new(ErrorCode::InvalidFormat, err.to_string())
                    .with_detail("field", field)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("direction", "expected 'benefit' or 'cost'");
        assert_eq!(
            format!("{}", err),
            "Field 'direction' has invalid format: expected 'benefit' or 'cost'"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::ShapeMismatch, "Weight count mismatch");
        assert_eq!(format!("{}", err), "[SHAPE_MISMATCH] Weight count mismatch");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::InvalidRange, "Negative score")
            .with_detail("row", "2")
            .with_detail("column", "0");

        assert_eq!(err.details.get("row"), Some(&"2".to_string()));
        assert_eq!(err.details.get("column"), Some(&"0".to_string()));
    }

    #[test]
    fn domain_error_from_validation_error_keeps_field() {
        let err: DomainError = ValidationError::invalid_format("direction", "bad").into();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.details.get("field"), Some(&"direction".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::DegenerateInput), "DEGENERATE_INPUT");
        assert_eq!(
            format!("{}", ErrorCode::UndefinedConsistency),
            "UNDEFINED_CONSISTENCY"
        );
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }

    #[test]
    fn only_internal_errors_are_server_side() {
        assert!(ErrorCode::ShapeMismatch.is_client_error());
        assert!(ErrorCode::InputTooLarge.is_client_error());
        assert!(!ErrorCode::InternalError.is_client_error());
    }
}
