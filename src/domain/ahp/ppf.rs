//! PPF-AHP: weights from Pythagorean preference pairs.
//!
//! Each judgment is a membership / non-membership pair on the unit
//! circle. The score function `d = membership^2 - non_membership^2`
//! gives a net preference in `[-1, 1]`, which is mapped to a
//! multiplicative intensity `s = sqrt(1000^d)`. The intensities form a
//! reciprocal comparison matrix; weights are its normalized row sums and
//! consistency is evaluated classically on it.

use crate::domain::ahp::consistency::{self, Consistency, MAX_SUPPORTED_ORDER};
use crate::domain::ahp::errors::{ComputationError, MatrixError};
use crate::domain::ahp::matrix::ComparisonMatrix;

/// Base of the score-to-intensity mapping.
const INTENSITY_BASE: f64 = 1000.0;

/// Slack on the unit-circle constraint `membership^2 + non_membership^2 <= 1`.
const PAIR_NORM_TOLERANCE: f64 = 1e-9;

/// Absolute tolerance for diagonal and mirrored pair components.
const PAIR_TOLERANCE: f64 = 1e-9;

/// A Pythagorean membership / non-membership pair.
///
/// Both components lie in `[0, 1]` and their squares sum to at most 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PythagoreanPair {
    membership: f64,
    non_membership: f64,
}

impl PythagoreanPair {
    /// Builds a pair, validating the unit-circle constraint.
    pub fn new(membership: f64, non_membership: f64) -> Result<Self, MatrixError> {
        for value in [membership, non_membership] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(MatrixError::InvalidMembershipPair {
                    membership,
                    non_membership,
                });
            }
        }
        let norm = membership * membership + non_membership * non_membership;
        if norm > 1.0 + PAIR_NORM_TOLERANCE {
            return Err(MatrixError::InvalidMembershipPair {
                membership,
                non_membership,
            });
        }
        Ok(Self {
            membership,
            non_membership,
        })
    }

    pub fn membership(&self) -> f64 {
        self.membership
    }

    pub fn non_membership(&self) -> f64 {
        self.non_membership
    }

    /// Net preference, `membership^2 - non_membership^2`, in `[-1, 1]`.
    pub fn score(&self) -> f64 {
        self.membership * self.membership - self.non_membership * self.non_membership
    }

    /// The reverse judgment: components swapped.
    pub fn swapped(&self) -> Self {
        Self {
            membership: self.non_membership,
            non_membership: self.membership,
        }
    }

    /// The two components as an array, for serialization.
    pub fn as_pair(&self) -> [f64; 2] {
        [self.membership, self.non_membership]
    }
}

/// A square matrix of Pythagorean preference pairs.
///
/// The diagonal is the neutral pair `(0, 0)` and mirrored entries are
/// componentwise swaps of each other.
#[derive(Debug, Clone, PartialEq)]
pub struct PpfComparisonMatrix {
    order: usize,
    entries: Vec<PythagoreanPair>,
}

impl PpfComparisonMatrix {
    /// Builds a matrix from rows of `(membership, non_membership)` pairs.
    pub fn from_rows(rows: Vec<Vec<(f64, f64)>>) -> Result<Self, MatrixError> {
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
        for row in rows {
            for (membership, non_membership) in row {
                entries.push(PythagoreanPair::new(membership, non_membership)?);
            }
        }
        let matrix = Self { order, entries };
        matrix.check_invariants()?;
        Ok(matrix)
    }

    fn check_invariants(&self) -> Result<(), MatrixError> {
        for index in 0..self.order {
            let diagonal = self.entry(index, index);
            if diagonal.membership().abs() > PAIR_TOLERANCE
                || diagonal.non_membership().abs() > PAIR_TOLERANCE
            {
                return Err(MatrixError::InvalidDiagonal {
                    index,
                    value: diagonal.membership(),
                });
            }
        }
        for row in 0..self.order {
            for col in (row + 1)..self.order {
                let value = self.entry(row, col);
                let mirror = self.entry(col, row);
                let expected = value.swapped();
                if (mirror.membership() - expected.membership()).abs() > PAIR_TOLERANCE
                    || (mirror.non_membership() - expected.non_membership()).abs() > PAIR_TOLERANCE
                {
                    return Err(MatrixError::ReciprocityViolation {
                        row,
                        col,
                        value: value.membership(),
                        mirror: mirror.membership(),
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
    pub fn entry(&self, row: usize, col: usize) -> PythagoreanPair {
        self.entries[row * self.order + col]
    }

    /// Rows as owned vectors, for serialization.
    pub fn rows(&self) -> Vec<Vec<PythagoreanPair>> {
        (0..self.order)
            .map(|row| self.entries[row * self.order..(row + 1) * self.order].to_vec())
            .collect()
    }

    /// The crisp intensity matrix `s_ij = sqrt(BASE^score_ij)`.
    ///
    /// Swapped pairs have opposite scores, so the result is reciprocal
    /// and its diagonal is 1.
    pub fn intensity_matrix(&self) -> Result<ComparisonMatrix, MatrixError> {
        let rows = (0..self.order)
            .map(|row| {
                (0..self.order)
                    .map(|col| INTENSITY_BASE.powf(self.entry(row, col).score() / 2.0))
                    .collect()
            })
            .collect();
        ComparisonMatrix::from_rows(rows)
    }
}

/// Outcome of a PPF weight derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct PpfDerivation {
    /// One weight per criterion, in matrix row order, summing to 1.
    pub weights: Vec<f64>,
    /// Consistency of the derived intensity matrix.
    pub consistency: Consistency,
}

/// Derives weights and consistency figures from a matrix of Pythagorean
/// preference pairs.
pub fn derive_ppf_weights(
    matrix: &PpfComparisonMatrix,
) -> Result<PpfDerivation, ComputationError> {
    let intensity = matrix.intensity_matrix()?;
    let order = intensity.order();

    let row_totals: Vec<f64> = (0..order)
        .map(|row| (0..order).map(|col| intensity.entry(row, col)).sum())
        .collect();
    let total: f64 = row_totals.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(ComputationError::DegenerateNormalization {
            stage: "normalizing preference intensities",
        });
    }

    let weights: Vec<f64> = row_totals.iter().map(|sum| sum / total).collect();
    let consistency = consistency::evaluate(&intensity, &weights)?;
    Ok(PpfDerivation {
        weights,
        consistency,
    })
}
