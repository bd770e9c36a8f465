//! Calculation failures for the MCDA methods.
//!
//! Every failure names where in the input it happened so a caller can point
//! the user at the offending cell, column, or weight.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Position of a bad value within the calculator input.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// A decision matrix cell.
    Cell { row: usize, column: usize },
    /// A whole criterion column.
    Column { column: usize, criterion: String },
    /// An entry in a weight vector.
    Weight { index: usize },
    /// An entry in a pairwise comparison matrix.
    Pairwise { row: usize, column: usize },
    /// An alternative's aggregated score.
    Alternative { row: usize, name: String },
}

impl Location {
    /// Key/value pairs suitable for error details.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        match self {
            Location::Cell { row, column } => {
                vec![("row", row.to_string()), ("column", column.to_string())]
            }
            Location::Column { column, criterion } => {
                vec![("column", column.to_string()), ("criterion", criterion.clone())]
            }
            Location::Weight { index } => vec![("index", index.to_string())],
            Location::Pairwise { row, column } => {
                vec![("row", row.to_string()), ("column", column.to_string())]
            }
            Location::Alternative { row, name } => {
                vec![("row", row.to_string()), ("alternative", name.clone())]
            }
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Cell { row, column } => write!(f, "cell ({}, {})", row, column),
            Location::Column { column, criterion } if criterion.is_empty() => {
                write!(f, "criterion {}", column)
            }
            Location::Column { column, criterion } => {
                write!(f, "criterion {} '{}'", column, criterion)
            }
            Location::Weight { index } => write!(f, "weight {}", index),
            Location::Pairwise { row, column } => {
                write!(f, "pairwise entry ({}, {})", row, column)
            }
            Location::Alternative { row, name } => write!(f, "alternative {} '{}'", row, name),
        }
    }
}

/// Errors produced by the normalizers, derivers, aggregators, and ranker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum McdaError {
    #[error("Shape mismatch for {subject}: expected {expected}, got {actual}")]
    ShapeMismatch {
        subject: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid value {value} at {location}: {reason}")]
    InvalidRange {
        location: Location,
        value: f64,
        reason: String,
    },

    #[error("Degenerate input at {location}: {reason}")]
    DegenerateInput { location: Location, reason: String },

    #[error("Consistency ratio is undefined for a {size}x{size} comparison matrix")]
    UndefinedConsistency { size: usize },
}

impl McdaError {
    /// Creates a shape mismatch between two counts.
    pub fn shape(subject: impl Into<String>, expected: usize, actual: usize) -> Self {
        McdaError::ShapeMismatch {
            subject: subject.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Creates a shape mismatch for a dimension that must not be empty.
    pub fn empty(subject: impl Into<String>) -> Self {
        McdaError::ShapeMismatch {
            subject: subject.into(),
            expected: "at least 1".to_string(),
            actual: "0".to_string(),
        }
    }

    /// Creates an out-of-range error.
    pub fn invalid_range(location: Location, value: f64, reason: impl Into<String>) -> Self {
        McdaError::InvalidRange {
            location,
            value,
            reason: reason.into(),
        }
    }

    /// Creates a degenerate input error.
    pub fn degenerate(location: Location, reason: impl Into<String>) -> Self {
        McdaError::DegenerateInput {
            location,
            reason: reason.into(),
        }
    }

    /// Returns the domain error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            McdaError::ShapeMismatch { .. } => ErrorCode::ShapeMismatch,
            McdaError::InvalidRange { .. } => ErrorCode::InvalidRange,
            McdaError::DegenerateInput { .. } => ErrorCode::DegenerateInput,
            McdaError::UndefinedConsistency { .. } => ErrorCode::UndefinedConsistency,
        }
    }
}

impl From<McdaError> for DomainError {
    fn from(err: McdaError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            McdaError::ShapeMismatch {
                subject,
                expected,
                actual,
            } => base
                .with_detail("subject", subject)
                .with_detail("expected", expected)
                .with_detail("actual", actual),
            McdaError::InvalidRange {
                location, value, ..
            } => location
                .details()
                .into_iter()
                .fold(base.with_detail("value", value.to_string()), |e, (k, v)| {
                    e.with_detail(k, v)
                }),
            McdaError::DegenerateInput { location, .. } => location
                .details()
                .into_iter()
                .fold(base, |e, (k, v)| e.with_detail(k, v)),
            McdaError::UndefinedConsistency { size } => base.with_detail("size", size.to_string()),
        }
    }
}
