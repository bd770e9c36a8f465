//! Weighted Product - Product of normalized scores raised to their weights.

use serde::Serialize;

use super::decision_matrix::{DecisionMatrix, WeightVector};
use super::error::{Location, McdaError};
use super::normalizer::Normalizer;
use super::ranker::{Ranker, RankedResult, RankingMethod};

/// Everything a WP calculation produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WpOutcome {
    pub normalized_matrix: Vec<Vec<f64>>,
    /// Final scores in input order.
    pub scores: Vec<f64>,
    pub ranking: RankedResult,
}

/// WP calculator.
pub struct WpCalculator;

impl WpCalculator {
    /// Scores each alternative as `prod(normalized[j] ^ weight[j])`, then
    /// ranks ordinally.
    ///
    /// Weights are exponents here, not factors.
    ///
    /// # Errors
    /// - `ShapeMismatch` if the weight count differs from the criterion count
    /// - `InvalidRange` if a normalized score is not strictly positive
    /// - any normalization error from [`Normalizer::min_max`]
    pub fn compute(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<WpOutcome, McdaError> {
        weights.ensure_matches(matrix)?;

        let normalized_matrix = Normalizer::min_max(matrix)?;

        let mut scores = Vec::with_capacity(normalized_matrix.len());
        for (i, row) in normalized_matrix.iter().enumerate() {
            let mut product = 1.0;
            for (j, (&value, &weight)) in row.iter().zip(weights.as_slice()).enumerate() {
                if value <= 0.0 {
                    return Err(McdaError::invalid_range(
                        Location::Cell { row: i, column: j },
                        value,
                        "weighted product requires strictly positive normalized scores",
                    ));
                }
                product *= value.powf(weight);
            }
            scores.push(product);
        }

        let ranking = Ranker::rank(matrix.alternatives(), &scores, RankingMethod::Ordinal)?;

        Ok(WpOutcome {
            normalized_matrix,
            scores,
            ranking,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mcda::Direction;

    fn example() -> DecisionMatrix {
        DecisionMatrix::builder()
            .criterion("Benefit", Direction::Benefit)
            .criterion("Cost", Direction::Cost)
            .alternative("A1", vec![250.0, 200.0])
            .alternative("A2", vec![180.0, 150.0])
            .alternative("A3", vec![300.0, 250.0])
            .build()
            .unwrap()
    }

    #[test]
    fn scores_are_weighted_products() {
        let weights = WeightVector::new(vec![0.6, 0.4]).unwrap();
        let outcome = WpCalculator::compute(&example(), &weights).unwrap();

        let a1 = (250.0f64 / 300.0).powf(0.6) * (150.0f64 / 200.0).powf(0.4);
        let a2 = (180.0f64 / 300.0).powf(0.6) * 1.0f64.powf(0.4);
        let a3 = 1.0f64.powf(0.6) * (150.0f64 / 250.0).powf(0.4);
        for (score, e) in outcome.scores.iter().zip([a1, a2, a3]) {
            assert!((score - e).abs() < 1e-12);
        }

        assert_eq!(outcome.ranking.order(), vec!["A3", "A1", "A2"]);
    }

    #[test]
    fn weights_act_as_exponents_not_factors() {
        let matrix = DecisionMatrix::builder()
            .criterion("C", Direction::Benefit)
            .alternative("Low", vec![1.0])
            .alternative("High", vec![4.0])
            .build()
            .unwrap();
        let weights = WeightVector::new(vec![2.0]).unwrap();
        let outcome = WpCalculator::compute(&matrix, &weights).unwrap();

        // (1/4)^2, not 2 * 1/4
        assert!((outcome.scores[0] - 0.0625).abs() < 1e-12);
        assert!((outcome.scores[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn shifting_every_weight_can_reverse_the_order() {
        let matrix = DecisionMatrix::builder()
            .criterion("C1", Direction::Benefit)
            .criterion("C2", Direction::Benefit)
            .alternative("A", vec![4.0, 1.0])
            .alternative("B", vec![2.0, 4.0])
            .build()
            .unwrap();

        let base = WeightVector::new(vec![0.9, 0.1]).unwrap();
        let doubled = WeightVector::new(vec![1.8, 0.2]).unwrap();
        let shifted = WeightVector::new(vec![1.9, 1.1]).unwrap();

        // A = 0.25^0.1 ~ 0.871, B = 0.5^0.9 ~ 0.536
        let outcome = WpCalculator::compute(&matrix, &base).unwrap();
        assert_eq!(outcome.ranking.order(), vec!["A", "B"]);

        let outcome = WpCalculator::compute(&matrix, &doubled).unwrap();
        assert_eq!(outcome.ranking.order(), vec!["A", "B"]);

        // A = 0.25^1.1 ~ 0.218, B = 0.5^1.9 ~ 0.268
        let outcome = WpCalculator::compute(&matrix, &shifted).unwrap();
        assert_eq!(outcome.ranking.order(), vec!["B", "A"]);
    }

    #[test]
    fn zero_weights_give_unit_scores() {
        let weights = WeightVector::new(vec![0.0, 0.0]).unwrap();
        let outcome = WpCalculator::compute(&example(), &weights).unwrap();
        assert!(outcome.scores.iter().all(|s| *s == 1.0));
        assert_eq!(outcome.ranking.order(), vec!["A1", "A2", "A3"]);
    }

    #[test]
    fn rejects_zero_normalized_score() {
        let matrix = DecisionMatrix::builder()
            .criterion("Quality", Direction::Benefit)
            .alternative("A", vec![0.0])
            .alternative("B", vec![3.0])
            .build()
            .unwrap();
        let weights = WeightVector::new(vec![0.5]).unwrap();

        let err = WpCalculator::compute(&matrix, &weights).unwrap_err();
        assert!(matches!(
            err,
            McdaError::InvalidRange {
                location: Location::Cell { row: 0, column: 0 },
                ..
            }
        ));
    }

    #[test]
    fn rejects_weight_count_mismatch() {
        let weights = WeightVector::new(vec![0.2, 0.3, 0.5]).unwrap();
        let err = WpCalculator::compute(&example(), &weights).unwrap_err();
        assert_eq!(err, McdaError::shape("weight vector", 2, 3));
    }
}
