//! Conversions between row vectors and `nalgebra` matrices.

use nalgebra::DMatrix;

/// Builds a dense matrix from rectangular rows.
///
/// Callers guarantee every row has `ncols` entries.
pub(crate) fn from_rows(rows: &[Vec<f64>], ncols: usize) -> DMatrix<f64> {
    DMatrix::from_fn(rows.len(), ncols, |i, j| rows[i][j])
}

/// Flattens a dense matrix back into row vectors.
pub(crate) fn to_rows(matrix: &DMatrix<f64>) -> Vec<Vec<f64>> {
    (0..matrix.nrows())
        .map(|i| matrix.row(i).iter().copied().collect())
        .collect()
}

/// Largest entry of column `j`.
pub(crate) fn column_max(matrix: &DMatrix<f64>, j: usize) -> f64 {
    matrix
        .column(j)
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Smallest entry of column `j`.
pub(crate) fn column_min(matrix: &DMatrix<f64>, j: usize) -> f64 {
    matrix
        .column(j)
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_round_trip() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let m = from_rows(&rows, 3);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m[(1, 2)], 6.0);
        assert_eq!(to_rows(&m), rows);
    }

    #[test]
    fn column_extremes() {
        let m = from_rows(&[vec![3.0, 9.0], vec![1.0, 4.0], vec![2.0, 7.0]], 2);
        assert_eq!(column_max(&m, 0), 3.0);
        assert_eq!(column_min(&m, 0), 1.0);
        assert_eq!(column_max(&m, 1), 9.0);
        assert_eq!(column_min(&m, 1), 4.0);
    }
}
