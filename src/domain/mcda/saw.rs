//! Simple Additive Weighting - Weighted sum of min-max normalized scores.

use serde::Serialize;

use super::decision_matrix::{DecisionMatrix, WeightVector};
use super::error::McdaError;
use super::normalizer::Normalizer;
use super::ranker::{Ranker, RankedResult, RankingMethod};

/// Everything a SAW calculation produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SawOutcome {
    pub normalized_matrix: Vec<Vec<f64>>,
    /// Normalized matrix with each column multiplied by its weight.
    pub weighted_matrix: Vec<Vec<f64>>,
    /// Final scores in input order.
    pub scores: Vec<f64>,
    pub ranking: RankedResult,
}

/// SAW calculator.
pub struct SawCalculator;

impl SawCalculator {
    /// Scores each alternative as the dot product of its normalized row and
    /// the weights, then ranks ordinally.
    ///
    /// # Errors
    /// - `ShapeMismatch` if the weight count differs from the criterion count
    /// - any normalization error from [`Normalizer::min_max`]
    pub fn compute(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<SawOutcome, McdaError> {
        weights.ensure_matches(matrix)?;

        let normalized_matrix = Normalizer::min_max(matrix)?;
        let weighted_matrix: Vec<Vec<f64>> = normalized_matrix
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights.as_slice())
                    .map(|(value, weight)| value * weight)
                    .collect()
            })
            .collect();
        let scores: Vec<f64> = weighted_matrix.iter().map(|row| row.iter().sum()).collect();

        let ranking = Ranker::rank(matrix.alternatives(), &scores, RankingMethod::Ordinal)?;

        Ok(SawOutcome {
            normalized_matrix,
            weighted_matrix,
            scores,
            ranking,
        })
    }
}
