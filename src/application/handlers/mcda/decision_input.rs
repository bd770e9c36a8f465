//! Raw decision-matrix input shared by SAW, WP, and TOPSIS.

use std::collections::HashSet;

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::mcda::{Criterion, DecisionMatrix, Direction, WeightVector};

use super::calculation::CalculationLimits;

/// A criterion as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionInput {
    pub name: String,
    pub direction: Direction,
}

/// Alternatives x criteria scores plus one weight per criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionInput {
    pub alternatives: Vec<String>,
    pub criteria: Vec<CriterionInput>,
    /// One row per alternative, one column per criterion.
    pub matrix: Vec<Vec<f64>>,
    pub weights: Vec<f64>,
}

impl DecisionInput {
    /// Checks limits and names, then builds the validated domain inputs.
    ///
    /// Blank names are replaced by their positional label.
    pub(crate) fn assemble(
        mut self,
        limits: &CalculationLimits,
    ) -> Result<(DecisionMatrix, WeightVector), DomainError> {
        limits.check_alternatives(self.alternatives.len())?;
        limits.check_criteria(self.criteria.len())?;

        label_blank_names(self.alternatives.iter_mut(), ALTERNATIVE_LABEL);
        label_blank_names(self.criteria.iter_mut().map(|c| &mut c.name), CRITERION_LABEL);
        ensure_unique_names("alternatives", self.alternatives.iter())?;
        ensure_unique_names("criteria", self.criteria.iter().map(|c| &c.name))?;

        let criteria = self
            .criteria
            .into_iter()
            .map(|c| Criterion::new(c.name, c.direction))
            .collect();
        let matrix = DecisionMatrix::new(self.alternatives, criteria, self.matrix)?;
        let weights = WeightVector::new(self.weights)?;

        Ok((matrix, weights))
    }
}

pub(crate) const ALTERNATIVE_LABEL: &str = "Alternative";
pub(crate) const CRITERION_LABEL: &str = "Criterion";

/// Names are display only; a blank one becomes e.g. "Alternative 2".
pub(crate) fn label_blank_names<'a>(names: impl Iterator<Item = &'a mut String>, label: &str) {
    for (i, name) in names.enumerate() {
        if name.trim().is_empty() {
            *name = format!("{} {}", label, i + 1);
        }
    }
}

/// Results are keyed by name, so names must be distinct.
pub(crate) fn ensure_unique_names<'a>(
    field: &str,
    names: impl Iterator<Item = &'a String>,
) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(ValidationError::invalid_format(
                field,
                format!("duplicate name '{}'", name),
            )
            .into());
        }
    }
    Ok(())
}
