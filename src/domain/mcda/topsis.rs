//! TOPSIS - Ranking by relative closeness to the ideal and anti-ideal solutions.

use serde::Serialize;

use super::decision_matrix::{DecisionMatrix, Direction, WeightVector};
use super::error::{Location, McdaError};
use super::linalg;
use super::normalizer::Normalizer;
use super::ranker::{Ranker, RankedResult, RankingMethod};

/// Euclidean distances of one alternative to both ideal solutions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdealDistance {
    pub alternative: String,
    pub to_positive: f64,
    pub to_negative: f64,
}

/// Everything a TOPSIS calculation produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopsisOutcome {
    pub normalized_matrix: Vec<Vec<f64>>,
    pub weighted_matrix: Vec<Vec<f64>>,
    pub ideal_positive: Vec<f64>,
    pub ideal_negative: Vec<f64>,
    /// Distances in input order.
    pub distances: Vec<IdealDistance>,
    /// Closeness coefficients in input order, each in `[0, 1]`.
    pub closeness_coefficients: Vec<f64>,
    pub ranking: RankedResult,
}

/// TOPSIS calculator.
pub struct TopsisCalculator;

impl TopsisCalculator {
    /// Runs TOPSIS and ranks with competition ("min") ranking.
    ///
    /// # Algorithm
    /// 1. Vector-normalize each column
    /// 2. Multiply each column by its weight
    /// 3. Ideal positive: column max for benefit, min for cost; ideal negative
    ///    is the opposite
    /// 4. Euclidean distance of each row to both ideals
    /// 5. Closeness = `d- / (d+ + d-)`
    ///
    /// An alternative at zero distance from both ideals (every alternative
    /// identical after weighting) gets closeness 0.
    ///
    /// # Errors
    /// - `ShapeMismatch` if the weight count differs from the criterion count
    /// - `DegenerateInput` for a zero-norm column or a non-finite closeness
    pub fn compute(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<TopsisOutcome, McdaError> {
        weights.ensure_matches(matrix)?;

        let normalized_matrix = Normalizer::vector(matrix)?;

        let mut weighted = linalg::from_rows(&normalized_matrix, matrix.criterion_count());
        for (j, &weight) in weights.as_slice().iter().enumerate() {
            weighted.column_mut(j).scale_mut(weight);
        }

        let mut ideal_positive = Vec::with_capacity(weighted.ncols());
        let mut ideal_negative = Vec::with_capacity(weighted.ncols());
        for (j, criterion) in matrix.criteria().iter().enumerate() {
            let max = linalg::column_max(&weighted, j);
            let min = linalg::column_min(&weighted, j);
            match criterion.direction {
                Direction::Benefit => {
                    ideal_positive.push(max);
                    ideal_negative.push(min);
                }
                Direction::Cost => {
                    ideal_positive.push(min);
                    ideal_negative.push(max);
                }
            }
        }

        let mut distances = Vec::with_capacity(weighted.nrows());
        let mut closeness_coefficients = Vec::with_capacity(weighted.nrows());
        for (i, name) in matrix.alternatives().iter().enumerate() {
            let row = weighted.row(i);
            let to_positive = euclidean(row.iter().copied(), &ideal_positive);
            let to_negative = euclidean(row.iter().copied(), &ideal_negative);

            let spread = to_positive + to_negative;
            let closeness = if spread == 0.0 { 0.0 } else { to_negative / spread };
            if !closeness.is_finite() {
                return Err(McdaError::degenerate(
                    Location::Alternative {
                        row: i,
                        name: name.clone(),
                    },
                    "closeness coefficient is not a finite number",
                ));
            }

            distances.push(IdealDistance {
                alternative: name.clone(),
                to_positive,
                to_negative,
            });
            closeness_coefficients.push(closeness);
        }

        let ranking = Ranker::rank(
            matrix.alternatives(),
            &closeness_coefficients,
            RankingMethod::Competition,
        )?
        .with_selection_labels();

        Ok(TopsisOutcome {
            normalized_matrix,
            weighted_matrix: linalg::to_rows(&weighted),
            ideal_positive,
            ideal_negative,
            distances,
            closeness_coefficients,
            ranking,
        })
    }
}

fn euclidean(point: impl Iterator<Item = f64>, ideal: &[f64]) -> f64 {
    point
        .zip(ideal)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
