//! Consistency Checker - AHP consistency index and ratio.

use nalgebra::DVector;
use serde::Serialize;

use super::error::{Location, McdaError};
use super::pairwise::PairwiseComparisonMatrix;
use super::priority::PriorityIndex;

/// Random consistency index for matrix sizes 1 through 20.
pub const RANDOM_INDEX: [f64; 20] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
    1.605, 1.61, 1.615, 1.62, 1.625,
];

/// Judgments are consistent when the ratio is strictly below this value.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Looks up the random index for an `n x n` matrix.
///
/// Returns `None` outside the tabulated sizes.
pub fn random_index(size: usize) -> Option<f64> {
    size.checked_sub(1)
        .and_then(|i| RANDOM_INDEX.get(i))
        .copied()
}

/// Measured consistency of a pairwise matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyReport {
    pub size: usize,
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub random_index: f64,
    pub consistency_ratio: f64,
    pub consistent: bool,
}

/// Consistency verdict for a pairwise matrix of any supported size.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Consistency {
    Measured(ConsistencyReport),
    /// 1x1 and 2x2 matrices: the random index is 0 and CR has no meaning.
    NotApplicable { size: usize },
}

impl Consistency {
    /// Returns the measured report, if any.
    pub fn report(&self) -> Option<&ConsistencyReport> {
        match self {
            Consistency::Measured(report) => Some(report),
            Consistency::NotApplicable { .. } => None,
        }
    }

    pub fn consistency_index(&self) -> Option<f64> {
        self.report().map(|r| r.consistency_index)
    }

    pub fn consistency_ratio(&self) -> Option<f64> {
        self.report().map(|r| r.consistency_ratio)
    }

    /// `None` when consistency is not applicable.
    pub fn is_consistent(&self) -> Option<bool> {
        self.report().map(|r| r.consistent)
    }

    /// True unless the matrix was measured and found inconsistent.
    ///
    /// A reciprocal matrix of size 1 or 2 cannot contradict itself.
    pub fn is_acceptable(&self) -> bool {
        self.is_consistent().unwrap_or(true)
    }
}

/// Checks the logical coherence of pairwise judgments.
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Computes lambda max, CI, and CR for a matrix and its priority index.
    ///
    /// # Algorithm
    /// 1. Weighted sums: `ws = A * w`
    /// 2. Per-row lambda: `ws[i] / w[i]`; `lambda_max` is their mean
    /// 3. `CI = (lambda_max - n) / (n - 1)`
    /// 4. `CR = CI / RI(n)`
    ///
    /// # Errors
    /// - `UndefinedConsistency` for sizes 1, 2, and above 20
    /// - `ShapeMismatch` if the priority index does not match the matrix
    pub fn check(
        matrix: &PairwiseComparisonMatrix,
        priority: &PriorityIndex,
    ) -> Result<ConsistencyReport, McdaError> {
        let n = matrix.size();
        if priority.len() != n {
            return Err(McdaError::shape("priority index", n, priority.len()));
        }

        let ri = random_index(n)
            .filter(|ri| *ri > 0.0)
            .ok_or(McdaError::UndefinedConsistency { size: n })?;

        let weights = DVector::from_column_slice(priority.values());
        let weighted_sums = matrix.to_dmatrix() * &weights;

        let mut lambda_total = 0.0;
        for i in 0..n {
            if weights[i] <= 0.0 {
                return Err(McdaError::degenerate(
                    Location::Weight { index: i },
                    "priority must be positive",
                ));
            }
            lambda_total += weighted_sums[i] / weights[i];
        }

        let lambda_max = lambda_total / n as f64;
        let consistency_index = (lambda_max - n as f64) / (n as f64 - 1.0);
        let consistency_ratio = consistency_index / ri;

        Ok(ConsistencyReport {
            size: n,
            lambda_max,
            consistency_index,
            random_index: ri,
            consistency_ratio,
            consistent: consistency_ratio < CONSISTENCY_THRESHOLD,
        })
    }

    /// Like [`check`](Self::check), but reports small matrices as not applicable.
    ///
    /// # Errors
    /// - `UndefinedConsistency` above the tabulated sizes
    pub fn assess(
        matrix: &PairwiseComparisonMatrix,
        priority: &PriorityIndex,
    ) -> Result<Consistency, McdaError> {
        if matrix.size() <= 2 {
            return Ok(Consistency::NotApplicable {
                size: matrix.size(),
            });
        }
        Self::check(matrix, priority).map(Consistency::Measured)
    }
}
