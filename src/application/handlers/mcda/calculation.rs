//! Calculation envelope and input limits shared by the MCDA handlers.

use std::fmt;

use serde::Serialize;

use crate::config::{LimitsConfig, MAX_SUPPORTED_DIMENSION};
use crate::domain::foundation::{CalculationId, DomainError, ErrorCode, Timestamp};

/// Which MCDA method produced a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum McdaMethod {
    Ahp,
    Saw,
    Wp,
    Topsis,
}

impl McdaMethod {
    /// Short display name.
    pub fn label(&self) -> &'static str {
        match self {
            McdaMethod::Ahp => "AHP",
            McdaMethod::Saw => "SAW",
            McdaMethod::Wp => "WP",
            McdaMethod::Topsis => "TOPSIS",
        }
    }
}

impl fmt::Display for McdaMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A finished calculation, identified for log correlation.
#[derive(Debug, Clone, Serialize)]
pub struct Calculation<T> {
    pub calculation_id: CalculationId,
    pub method: McdaMethod,
    pub computed_at: Timestamp,
    pub outcome: T,
}

impl<T> Calculation<T> {
    pub(crate) fn new(method: McdaMethod, outcome: T) -> Self {
        Self {
            calculation_id: CalculationId::new(),
            method,
            computed_at: Timestamp::now(),
            outcome,
        }
    }
}

/// Upper bounds enforced before any calculation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationLimits {
    pub max_alternatives: usize,
    pub max_criteria: usize,
}

impl CalculationLimits {
    pub fn new(max_alternatives: usize, max_criteria: usize) -> Self {
        Self {
            max_alternatives,
            max_criteria,
        }
    }

    /// Fails with `InputTooLarge` if there are too many alternatives.
    pub fn check_alternatives(&self, actual: usize) -> Result<(), DomainError> {
        check("alternatives", self.max_alternatives, actual)
    }

    /// Fails with `InputTooLarge` if there are too many criteria.
    pub fn check_criteria(&self, actual: usize) -> Result<(), DomainError> {
        check("criteria", self.max_criteria, actual)
    }
}

impl Default for CalculationLimits {
    fn default() -> Self {
        Self::new(MAX_SUPPORTED_DIMENSION, MAX_SUPPORTED_DIMENSION)
    }
}

impl From<&LimitsConfig> for CalculationLimits {
    fn from(config: &LimitsConfig) -> Self {
        Self::new(config.max_alternatives, config.max_criteria)
    }
}

fn check(field: &str, limit: usize, actual: usize) -> Result<(), DomainError> {
    if actual > limit {
        return Err(DomainError::new(
            ErrorCode::InputTooLarge,
            format!("Too many {}: {} exceeds the limit of {}", field, actual, limit),
        )
        .with_detail("field", field)
        .with_detail("limit", limit.to_string())
        .with_detail("actual", actual.to_string()));
    }
    Ok(())
}
