//! Pairwise Comparison Matrix - Reciprocal judgment matrix for AHP.

use nalgebra::DMatrix;
use serde::Serialize;

use super::error::{Location, McdaError};
use super::linalg;

/// Relative tolerance for the reciprocal check on fully specified matrices.
pub const RECIPROCAL_TOLERANCE: f64 = 1e-9;

/// Square matrix of pairwise judgments over a set of named items.
///
/// Invariants: diagonal is 1, every entry is finite and positive, and
/// `entry(i, j) * entry(j, i) == 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseComparisonMatrix {
    items: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl PairwiseComparisonMatrix {
    /// Builds a matrix from its upper triangle.
    ///
    /// `upper` lists the judgments `(i, j)` for `i < j` in row-major order:
    /// for three items that is `[a01, a02, a12]`. The lower triangle is filled
    /// with reciprocals and the diagonal with ones.
    ///
    /// # Errors
    /// - `ShapeMismatch` if there are no items or `upper` has the wrong length
    /// - `InvalidRange` for non-positive or non-finite judgments, or one so
    ///   small that its reciprocal overflows
    pub fn from_upper_triangle(
        items: Vec<impl Into<String>>,
        upper: &[f64],
    ) -> Result<Self, McdaError> {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let n = items.len();
        if n == 0 {
            return Err(McdaError::empty("pairwise comparison items"));
        }

        let expected = upper_triangle_len(n);
        if upper.len() != expected {
            return Err(McdaError::shape(
                "pairwise upper triangle",
                expected,
                upper.len(),
            ));
        }

        let mut rows = vec![vec![1.0; n]; n];
        let mut judgments = upper.iter().copied();
        for i in 0..n {
            for j in (i + 1)..n {
                // Length checked above.
                let value = judgments.next().unwrap_or(f64::NAN);
                ensure_positive(value, i, j)?;
                let reciprocal = 1.0 / value;
                if !reciprocal.is_finite() {
                    return Err(McdaError::invalid_range(
                        Location::Pairwise { row: j, column: i },
                        reciprocal,
                        format!("reciprocal of ({}, {}) overflows", i, j),
                    ));
                }
                rows[i][j] = value;
                rows[j][i] = reciprocal;
            }
        }

        Ok(Self { items, rows })
    }

    /// Builds a matrix from all of its rows, re-validating the invariants.
    ///
    /// # Errors
    /// - `ShapeMismatch` if the matrix is empty or not square over `items`
    /// - `InvalidRange` for non-positive entries, a diagonal other than 1, or
    ///   a broken reciprocal pair
    pub fn from_rows(
        items: Vec<impl Into<String>>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, McdaError> {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let n = items.len();
        if n == 0 {
            return Err(McdaError::empty("pairwise comparison items"));
        }
        if rows.len() != n {
            return Err(McdaError::shape("pairwise matrix rows", n, rows.len()));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(McdaError::shape(
                    format!("pairwise matrix row {}", i),
                    n,
                    row.len(),
                ));
            }
        }

        for i in 0..n {
            for j in 0..n {
                ensure_positive(rows[i][j], i, j)?;
            }
            if !approx_eq(rows[i][i], 1.0) {
                return Err(McdaError::invalid_range(
                    Location::Pairwise { row: i, column: i },
                    rows[i][i],
                    "diagonal entries must be 1",
                ));
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if !approx_eq(rows[i][j] * rows[j][i], 1.0) {
                    return Err(McdaError::invalid_range(
                        Location::Pairwise { row: j, column: i },
                        rows[j][i],
                        format!("entry must be the reciprocal of ({}, {})", i, j),
                    ));
                }
            }
        }

        Ok(Self { items, rows })
    }

    /// Names of the compared items.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Full matrix rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the number of compared items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns entry `(i, j)`.
    pub fn value(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|r| r.get(j)).copied()
    }

    pub(crate) fn to_dmatrix(&self) -> DMatrix<f64> {
        linalg::from_rows(&self.rows, self.size())
    }
}

/// Number of judgments above the diagonal of an `n x n` matrix.
pub fn upper_triangle_len(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

fn ensure_positive(value: f64, row: usize, column: usize) -> Result<(), McdaError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(McdaError::invalid_range(
            Location::Pairwise { row, column },
            value,
            "pairwise judgments must be finite and positive",
        ));
    }
    Ok(())
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= RECIPROCAL_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> PairwiseComparisonMatrix {
        PairwiseComparisonMatrix::from_upper_triangle(
            vec!["Cost", "Quality", "Speed"],
            &[2.0, 3.0, 2.0],
        )
        .unwrap()
    }

    #[test]
    fn upper_triangle_fills_reciprocals() {
        let m = classic();
        assert_eq!(m.size(), 3);
        assert_eq!(m.value(0, 1), Some(2.0));
        assert_eq!(m.value(1, 0), Some(0.5));
        assert_eq!(m.value(0, 2), Some(3.0));
        assert!((m.value(2, 0).unwrap() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(m.value(1, 2), Some(2.0));
        assert_eq!(m.value(2, 1), Some(0.5));
    }

    #[test]
    fn reciprocal_invariant_holds() {
        let m = PairwiseComparisonMatrix::from_upper_triangle(
            vec!["A", "B", "C", "D"],
            &[3.0, 0.2, 7.0, 0.125, 9.0, 0.5],
        )
        .unwrap();
        for i in 0..m.size() {
            assert_eq!(m.value(i, i), Some(1.0));
            for j in 0..m.size() {
                let product = m.value(i, j).unwrap() * m.value(j, i).unwrap();
                assert!((product - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn single_item_matrix_is_identity() {
        let m = PairwiseComparisonMatrix::from_upper_triangle(vec!["Only"], &[]).unwrap();
        assert_eq!(m.rows(), &[vec![1.0]]);
    }

    #[test]
    fn rejects_wrong_triangle_length() {
        let err = PairwiseComparisonMatrix::from_upper_triangle(vec!["A", "B", "C"], &[2.0, 3.0])
            .unwrap_err();
        assert_eq!(err, McdaError::shape("pairwise upper triangle", 3, 2));
    }

    #[test]
    fn rejects_empty_items() {
        let err =
            PairwiseComparisonMatrix::from_upper_triangle(Vec::<String>::new(), &[]).unwrap_err();
        assert_eq!(err, McdaError::empty("pairwise comparison items"));
    }

    #[test]
    fn rejects_non_positive_judgment() {
        let err =
            PairwiseComparisonMatrix::from_upper_triangle(vec!["A", "B", "C"], &[2.0, 0.0, 1.0])
                .unwrap_err();
        assert!(matches!(
            err,
            McdaError::InvalidRange {
                location: Location::Pairwise { row: 0, column: 2 },
                ..
            }
        ));
    }

    #[test]
    fn rejects_judgment_whose_reciprocal_overflows() {
        let err =
            PairwiseComparisonMatrix::from_upper_triangle(vec!["X", "Y"], &[1e-310]).unwrap_err();
        assert!(matches!(
            err,
            McdaError::InvalidRange {
                location: Location::Pairwise { row: 1, column: 0 },
                ..
            }
        ));
    }

    #[test]
    fn accepts_small_judgment_with_finite_reciprocal() {
        let m = PairwiseComparisonMatrix::from_upper_triangle(vec!["X", "Y"], &[1e-300]).unwrap();
        assert!(m.value(1, 0).unwrap().is_finite());
    }

    #[test]
    fn from_rows_accepts_consistent_reciprocals() {
        let m = PairwiseComparisonMatrix::from_rows(
            vec!["A", "B", "C"],
            vec![
                vec![1.0, 2.0, 3.0],
                vec![0.5, 1.0, 2.0],
                vec![1.0 / 3.0, 0.5, 1.0],
            ],
        )
        .unwrap();
        assert_eq!(m.value(0, 2), Some(3.0));
        assert_eq!(m.value(2, 1), Some(0.5));
    }

    #[test]
    fn from_rows_rejects_broken_reciprocal() {
        let err = PairwiseComparisonMatrix::from_rows(
            vec!["A", "B"],
            vec![vec![1.0, 2.0], vec![0.4, 1.0]],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            McdaError::InvalidRange {
                location: Location::Pairwise { row: 1, column: 0 },
                ..
            }
        ));
    }

    #[test]
    fn from_rows_rejects_bad_diagonal() {
        let err = PairwiseComparisonMatrix::from_rows(
            vec!["A", "B"],
            vec![vec![2.0, 2.0], vec![0.5, 1.0]],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            McdaError::InvalidRange {
                location: Location::Pairwise { row: 0, column: 0 },
                ..
            }
        ));
    }

    #[test]
    fn from_rows_rejects_non_square() {
        let err = PairwiseComparisonMatrix::from_rows(
            vec!["A", "B"],
            vec![vec![1.0, 2.0], vec![0.5]],
        )
        .unwrap_err();
        assert!(matches!(err, McdaError::ShapeMismatch { .. }));
    }

    #[test]
    fn upper_triangle_len_matches_pairs() {
        assert_eq!(upper_triangle_len(0), 0);
        assert_eq!(upper_triangle_len(1), 0);
        assert_eq!(upper_triangle_len(2), 1);
        assert_eq!(upper_triangle_len(5), 10);
    }
}
