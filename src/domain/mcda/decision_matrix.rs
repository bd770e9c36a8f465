//! Decision Matrix - Alternatives x criteria scores with criterion directionality.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::error::{Location, McdaError};
use super::linalg;

/// Whether higher or lower scores are preferred for a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Higher is better.
    #[default]
    Benefit,
    /// Lower is better.
    Cost,
}

/// A decision criterion (matrix column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    /// Display name; may be empty.
    pub name: String,
    pub direction: Direction,
}

impl Criterion {
    /// Creates a criterion.
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }
}

/// Scores of every alternative against every criterion.
///
/// Always rectangular, non-empty in both dimensions, and holds only finite
/// non-negative scores. Construct through [`DecisionMatrix::new`] or the
/// builder; both validate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    alternatives: Vec<String>,
    criteria: Vec<Criterion>,
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a validated decision matrix.
    ///
    /// # Errors
    /// - `ShapeMismatch` if there are no alternatives or criteria, the row
    ///   count differs from the alternative count, or a row is not exactly one
    ///   score per criterion
    /// - `InvalidRange` for negative or non-finite scores
    pub fn new(
        alternatives: Vec<String>,
        criteria: Vec<Criterion>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, McdaError> {
        if alternatives.is_empty() {
            return Err(McdaError::empty("alternatives"));
        }
        if criteria.is_empty() {
            return Err(McdaError::empty("criteria"));
        }
        if rows.len() != alternatives.len() {
            return Err(McdaError::shape(
                "decision matrix rows",
                alternatives.len(),
                rows.len(),
            ));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != criteria.len() {
                return Err(McdaError::shape(
                    format!("decision matrix row {} ('{}')", i, alternatives[i]),
                    criteria.len(),
                    row.len(),
                ));
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(McdaError::invalid_range(
                        Location::Cell { row: i, column: j },
                        value,
                        "scores must be finite and non-negative",
                    ));
                }
            }
        }

        Ok(Self {
            alternatives,
            criteria,
            rows,
        })
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Alternative names in row order.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Criteria in column order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Column location used in error reports.
    pub(crate) fn column_location(&self, column: usize) -> Location {
        Location::Column {
            column,
            criterion: self
                .criteria
                .get(column)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
        }
    }

    pub(crate) fn to_dmatrix(&self) -> DMatrix<f64> {
        linalg::from_rows(&self.rows, self.criteria.len())
    }
}

/// Builder for constructing DecisionMatrix instances row by row.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    alternatives: Vec<String>,
    criteria: Vec<Criterion>,
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion column.
    pub fn criterion(mut self, name: impl Into<String>, direction: Direction) -> Self {
        self.criteria.push(Criterion::new(name, direction));
        self
    }

    /// Adds an alternative with its scores in criterion order.
    pub fn alternative(mut self, name: impl Into<String>, scores: Vec<f64>) -> Self {
        self.alternatives.push(name.into());
        self.rows.push(scores);
        self
    }

    /// Builds and validates the decision matrix.
    pub fn build(self) -> Result<DecisionMatrix, McdaError> {
        DecisionMatrix::new(self.alternatives, self.criteria, self.rows)
    }
}

/// Criterion weights, aligned positionally with criterion order.
///
/// Weights are finite and non-negative but need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates a validated weight vector.
    ///
    /// # Errors
    /// - `ShapeMismatch` if empty
    /// - `InvalidRange` for negative or non-finite weights
    pub fn new(weights: Vec<f64>) -> Result<Self, McdaError> {
        if weights.is_empty() {
            return Err(McdaError::empty("weights"));
        }
        for (index, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(McdaError::invalid_range(
                    Location::Weight { index },
                    w,
                    "weights must be finite and non-negative",
                ));
            }
        }
        Ok(Self(weights))
    }

    /// Returns the weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Checks that there is exactly one weight per criterion.
    pub fn ensure_matches(&self, matrix: &DecisionMatrix) -> Result<(), McdaError> {
        if self.0.len() != matrix.criterion_count() {
            return Err(McdaError::shape(
                "weight vector",
                matrix.criterion_count(),
                self.0.len(),
            ));
        }
        Ok(())
    }
}
