//! Reciprocal pairwise-comparison matrix.

use crate::domain::ahp::consistency::MAX_SUPPORTED_ORDER;
use crate::domain::ahp::errors::MatrixError;

/// Multiplicative tolerance for the reciprocal invariant.
pub(crate) const RECIPROCITY_TOLERANCE: f64 = 1e-6;

/// Absolute tolerance for identity diagonal entries.
pub(crate) const DIAGONAL_TOLERANCE: f64 = 1e-9;

/// A square matrix of positive pairwise judgments.
///
/// Construction enforces the classical AHP invariants: every entry is a
/// positive finite number, the diagonal is 1, mirrored entries multiply
/// to 1 within [`RECIPROCITY_TOLERANCE`], and the order does not exceed
/// the random-index table. A value of this type is therefore always a
/// valid reciprocal matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    order: usize,
    /// Row-major entries, `order * order` of them.
    entries: Vec<f64>,
}

impl ComparisonMatrix {
    /// Builds a matrix from rows, validating every invariant.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let order = rows.len();
        if order == 0 {
            return Err(MatrixError::Empty);
        }
        if order > MAX_SUPPORTED_ORDER {
            return Err(MatrixError::UnsupportedOrder {
                order,
                max: MAX_SUPPORTED_ORDER,
            });
        }
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != order {
                return Err(MatrixError::RowLengthMismatch {
                    row,
                    found: entries.len(),
                    expected: order,
                });
            }
        }

        let mut entries = Vec::with_capacity(order * order);
        for row in &rows {
            entries.extend_from_slice(row);
        }
        let matrix = Self { order, entries };
        matrix.check_invariants()?;
        Ok(matrix)
    }

    fn check_invariants(&self) -> Result<(), MatrixError> {
        for row in 0..self.order {
            for col in 0..self.order {
                let value = self.entry(row, col);
                if !value.is_finite() || value <= 0.0 {
                    return Err(MatrixError::InvalidEntry { row, col, value });
                }
            }
        }
        for index in 0..self.order {
            let value = self.entry(index, index);
            if (value - 1.0).abs() > DIAGONAL_TOLERANCE {
                return Err(MatrixError::InvalidDiagonal { index, value });
            }
        }
        for row in 0..self.order {
            for col in (row + 1)..self.order {
                let value = self.entry(row, col);
                let mirror = self.entry(col, row);
                if (value * mirror - 1.0).abs() > RECIPROCITY_TOLERANCE {
                    return Err(MatrixError::ReciprocityViolation {
                        row,
                        col,
                        value,
                        mirror,
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of criteria being compared.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The judgment at (`row`, `col`).
    pub fn entry(&self, row: usize, col: usize) -> f64 {
        self.entries[row * self.order + col]
    }

    /// Matrix-vector product `X * v`.
    pub fn apply(&self, vector: &[f64]) -> Vec<f64> {
        debug_assert_eq!(vector.len(), self.order);
        (0..self.order)
            .map(|row| {
                (0..self.order)
                    .map(|col| self.entry(row, col) * vector[col])
                    .sum()
            })
            .collect()
    }

    /// Rows as owned vectors, for serialization.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..self.order)
            .map(|row| self.entries[row * self.order..(row + 1) * self.order].to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_rows() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 2.0, 6.0],
            vec![1.0 / 2.0, 1.0, 2.0],
            vec![1.0 / 6.0, 1.0 / 2.0, 1.0],
        ]
    }

    #[test]
    fn accepts_valid_reciprocal_matrix() {
        let matrix = ComparisonMatrix::from_rows(valid_rows()).unwrap();
        assert_eq!(matrix.order(), 3);
        assert_eq!(matrix.entry(0, 2), 6.0);
        assert_eq!(matrix.entry(2, 0), 1.0 / 6.0);
    }

    #[test]
    fn rejects_empty_matrix() {
        assert_eq!(ComparisonMatrix::from_rows(vec![]), Err(MatrixError::Empty));
    }

    #[test]
    fn rejects_non_square_rows() {
        let rows = vec![vec![1.0, 2.0], vec![0.5, 1.0], vec![1.0, 1.0]];
        assert_eq!(
            ComparisonMatrix::from_rows(rows),
            Err(MatrixError::RowLengthMismatch {
                row: 0,
                found: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn rejects_order_above_random_index_table() {
        let order = MAX_SUPPORTED_ORDER + 1;
        let rows = vec![vec![1.0; order]; order];
        assert_eq!(
            ComparisonMatrix::from_rows(rows),
            Err(MatrixError::UnsupportedOrder {
                order,
                max: MAX_SUPPORTED_ORDER
            })
        );
    }

    #[test]
    fn rejects_non_positive_entry() {
        let mut rows = valid_rows();
        rows[0][1] = 0.0;
        let err = ComparisonMatrix::from_rows(rows).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidEntry { row: 0, col: 1, .. }));
    }

    #[test]
    fn rejects_non_finite_entry() {
        let mut rows = valid_rows();
        rows[1][2] = f64::NAN;
        let err = ComparisonMatrix::from_rows(rows).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidEntry { row: 1, col: 2, .. }));
    }

    #[test]
    fn rejects_non_unit_diagonal() {
        let mut rows = valid_rows();
        rows[1][1] = 1.5;
        let err = ComparisonMatrix::from_rows(rows).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidDiagonal { index: 1, .. }));
    }

    #[test]
    fn rejects_non_reciprocal_pair() {
        let mut rows = valid_rows();
        rows[2][0] = 1.0 / 3.0;
        let err = ComparisonMatrix::from_rows(rows).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::ReciprocityViolation { row: 0, col: 2, .. }
        ));
    }

    #[test]
    fn tolerates_reciprocal_rounding_noise() {
        let rows = vec![vec![1.0, 3.0], vec![0.3333333, 1.0]];
        assert!(ComparisonMatrix::from_rows(rows).is_ok());
    }

    #[test]
    fn apply_multiplies_matrix_by_vector() {
        let matrix = ComparisonMatrix::from_rows(valid_rows()).unwrap();
        let product = matrix.apply(&[1.0, 1.0, 1.0]);
        assert!((product[0] - 9.0).abs() < 1e-12);
        assert!((product[1] - 3.5).abs() < 1e-12);
        assert!((product[2] - (1.0 / 6.0 + 1.0 / 2.0 + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn rows_round_trip() {
        let rows = valid_rows();
        let matrix = ComparisonMatrix::from_rows(rows.clone()).unwrap();
        assert_eq!(matrix.rows(), rows);
    }
}
