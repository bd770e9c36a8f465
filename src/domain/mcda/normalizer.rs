//! Matrix Normalizer - Min-max (SAW, WP) and vector-norm (TOPSIS) variants.

use nalgebra::DMatrix;

use super::decision_matrix::{DecisionMatrix, Direction};
use super::error::{Location, McdaError};
use super::linalg;

/// Column-wise normalization of decision matrices.
pub struct Normalizer;

impl Normalizer {
    /// Ratio normalization used by SAW and WP.
    ///
    /// # Algorithm
    /// - Benefit column: `x / max(column)`
    /// - Cost column: `min(column) / x`
    ///
    /// # Errors
    /// - `DegenerateInput` if a benefit column has no positive score
    /// - `InvalidRange` if a cost column contains a zero score
    pub fn min_max(matrix: &DecisionMatrix) -> Result<Vec<Vec<f64>>, McdaError> {
        let raw = matrix.to_dmatrix();
        let mut normalized = DMatrix::<f64>::zeros(raw.nrows(), raw.ncols());

        for (j, criterion) in matrix.criteria().iter().enumerate() {
            match criterion.direction {
                Direction::Benefit => {
                    let max = linalg::column_max(&raw, j);
                    if max <= 0.0 {
                        return Err(McdaError::degenerate(
                            matrix.column_location(j),
                            "benefit criterion has no positive score",
                        ));
                    }
                    for i in 0..raw.nrows() {
                        normalized[(i, j)] = raw[(i, j)] / max;
                    }
                }
                Direction::Cost => {
                    if let Some(i) = (0..raw.nrows()).find(|&i| raw[(i, j)] <= 0.0) {
                        return Err(McdaError::invalid_range(
                            Location::Cell { row: i, column: j },
                            raw[(i, j)],
                            "cost criterion scores must be positive",
                        ));
                    }
                    let min = linalg::column_min(&raw, j);
                    for i in 0..raw.nrows() {
                        normalized[(i, j)] = min / raw[(i, j)];
                    }
                }
            }
        }

        Ok(linalg::to_rows(&normalized))
    }

    /// Euclidean (vector) normalization used by TOPSIS.
    ///
    /// Each cell is divided by the square root of the sum of squares of its
    /// column. Direction does not affect this step.
    ///
    /// # Errors
    /// - `DegenerateInput` if a column's norm is zero
    pub fn vector(matrix: &DecisionMatrix) -> Result<Vec<Vec<f64>>, McdaError> {
        let mut normalized = matrix.to_dmatrix();

        for j in 0..normalized.ncols() {
            let norm = normalized.column(j).norm();
            if norm == 0.0 {
                return Err(McdaError::degenerate(
                    matrix.column_location(j),
                    "column vector norm is zero",
                ));
            }
            normalized.column_mut(j).unscale_mut(norm);
        }

        Ok(linalg::to_rows(&normalized))
    }
}
