//! Priority Deriver - AHP priority index from a pairwise comparison matrix.

use serde::Serialize;

use super::pairwise::PairwiseComparisonMatrix;

/// Relative importance of each compared item, aligned with the matrix order.
///
/// Derived once from a [`PairwiseComparisonMatrix`] and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityIndex {
    items: Vec<String>,
    values: Vec<f64>,
}

impl PriorityIndex {
    /// Item names in matrix order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Priority values in matrix order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no items.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Derives AHP priorities.
pub struct PriorityDeriver;

impl PriorityDeriver {
    /// Approximates the principal eigenvector of a pairwise matrix.
    ///
    /// # Algorithm
    /// 1. Sum each column
    /// 2. Divide every cell by its column sum (column-stochastic matrix)
    /// 3. Average each row
    ///
    /// The result sums to 1. Entries are positive, so column sums never vanish.
    pub fn derive(matrix: &PairwiseComparisonMatrix) -> PriorityIndex {
        let a = matrix.to_dmatrix();
        let n = a.ncols();

        let column_sums: Vec<f64> = (0..n).map(|j| a.column(j).sum()).collect();

        let values = (0..a.nrows())
            .map(|i| {
                let row_total: f64 = (0..n).map(|j| a[(i, j)] / column_sums[j]).sum();
                row_total / n as f64
            })
            .collect();

        PriorityIndex {
            items: matrix.items().to_vec(),
            values,
        }
    }
}
