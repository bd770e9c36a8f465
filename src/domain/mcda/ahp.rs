//! Analytic Hierarchy Process - Criteria priorities combined with per-criterion
//! alternative priorities.

use serde::Serialize;

use super::consistency::{Consistency, ConsistencyChecker};
use super::error::McdaError;
use super::pairwise::PairwiseComparisonMatrix;
use super::priority::{PriorityDeriver, PriorityIndex};
use super::ranker::{Ranker, RankedResult, RankingMethod};

/// Alternative priorities derived under one criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionPriorities {
    pub criterion: String,
    pub priorities: PriorityIndex,
    pub consistency: Consistency,
}

/// Everything an AHP calculation produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AhpOutcome {
    pub criteria_priority: PriorityIndex,
    pub criteria_consistency: Consistency,
    /// One entry per criterion, in criteria order.
    pub alternative_priorities: Vec<CriterionPriorities>,
    /// Global scores in alternative input order.
    pub scores: Vec<f64>,
    pub ranking: RankedResult,
}

impl AhpOutcome {
    /// CI of the criteria matrix; `None` below size 3.
    pub fn consistency_index(&self) -> Option<f64> {
        self.criteria_consistency.consistency_index()
    }

    /// CR of the criteria matrix; `None` below size 3.
    pub fn consistency_ratio(&self) -> Option<f64> {
        self.criteria_consistency.consistency_ratio()
    }

    pub fn is_consistent(&self) -> Option<bool> {
        self.criteria_consistency.is_consistent()
    }

    /// Names of criteria whose alternative judgments were measured inconsistent.
    pub fn inconsistent_criteria(&self) -> Vec<&str> {
        self.alternative_priorities
            .iter()
            .filter(|p| !p.consistency.is_acceptable())
            .map(|p| p.criterion.as_str())
            .collect()
    }
}

/// AHP calculator.
pub struct AhpCalculator;

impl AhpCalculator {
    /// Runs a full AHP synthesis.
    ///
    /// `alternatives[k]` compares the alternatives under criterion `k` of the
    /// `criteria` matrix. Every alternative matrix must compare the same items
    /// in the same order.
    ///
    /// # Algorithm
    /// 1. Derive criteria priorities and assess their consistency
    /// 2. Derive alternative priorities per criterion, each assessed too
    /// 3. Global score of alternative `a`: `sum_k criteria[k] * local_k[a]`
    /// 4. Rank ordinally
    ///
    /// Inconsistent judgments do not abort the calculation; the verdicts are
    /// reported alongside the ranking.
    ///
    /// # Errors
    /// - `ShapeMismatch` if the matrix count differs from the criteria count,
    ///   or the alternative matrices disagree on their items
    /// - `UndefinedConsistency` if any matrix is larger than 20x20
    pub fn compute(
        criteria: &PairwiseComparisonMatrix,
        alternatives: &[PairwiseComparisonMatrix],
    ) -> Result<AhpOutcome, McdaError> {
        if alternatives.len() != criteria.size() {
            return Err(McdaError::shape(
                "alternative comparison matrices",
                criteria.size(),
                alternatives.len(),
            ));
        }

        let reference = &alternatives[0];
        for (k, matrix) in alternatives.iter().enumerate().skip(1) {
            if matrix.items() != reference.items() {
                return Err(McdaError::ShapeMismatch {
                    subject: format!("alternatives compared under '{}'", criteria.items()[k]),
                    expected: reference.items().join(", "),
                    actual: matrix.items().join(", "),
                });
            }
        }

        let criteria_priority = PriorityDeriver::derive(criteria);
        let criteria_consistency = ConsistencyChecker::assess(criteria, &criteria_priority)?;

        let mut alternative_priorities = Vec::with_capacity(alternatives.len());
        for (criterion, matrix) in criteria.items().iter().zip(alternatives) {
            let priorities = PriorityDeriver::derive(matrix);
            let consistency = ConsistencyChecker::assess(matrix, &priorities)?;
            alternative_priorities.push(CriterionPriorities {
                criterion: criterion.clone(),
                priorities,
                consistency,
            });
        }

        let scores: Vec<f64> = (0..reference.size())
            .map(|a| {
                criteria_priority
                    .values()
                    .iter()
                    .zip(&alternative_priorities)
                    .map(|(weight, local)| weight * local.priorities.values()[a])
                    .sum()
            })
            .collect();

        let ranking = Ranker::rank(reference.items(), &scores, RankingMethod::Ordinal)?;

        Ok(AhpOutcome {
            criteria_priority,
            criteria_consistency,
            alternative_priorities,
            scores,
            ranking,
        })
    }
}
