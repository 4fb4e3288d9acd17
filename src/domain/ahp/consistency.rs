//! Saaty consistency figures: maximum-eigenvalue estimate, consistency
//! index and consistency ratio.

use crate::domain::ahp::errors::ComputationError;
use crate::domain::ahp::matrix::ComparisonMatrix;

/// Saaty's random consistency indices for matrix orders 1 through 15.
pub const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Largest matrix order with a defined random index.
pub const MAX_SUPPORTED_ORDER: usize = RANDOM_INDEX.len();

/// Accepted upper bound for the consistency ratio.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Human-readable verdict for a consistent matrix.
pub const CONSISTENT_MESSAGE: &str = "The solution is consistent";

/// Human-readable verdict for an inconsistent matrix.
pub const INCONSISTENT_MESSAGE: &str =
    "The solution is inconsistent, the pairwise comparisons must be reviewed";

/// The random consistency index for a matrix order, if defined.
pub fn random_index(order: usize) -> Option<f64> {
    if order == 0 {
        None
    } else {
        RANDOM_INDEX.get(order - 1).copied()
    }
}

/// Consistency figures for one judgment matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Consistency {
    /// Estimated maximum eigenvalue of the matrix.
    pub lambda_max: f64,
    /// Consistency index, `(lambda_max - n) / (n - 1)`.
    pub index: f64,
    /// Consistency ratio, the index over the order's random index.
    pub ratio: f64,
}

impl Consistency {
    /// Whether the ratio is within the accepted threshold.
    pub fn is_consistent(&self) -> bool {
        self.ratio <= CONSISTENCY_THRESHOLD
    }

    /// The verdict string for this ratio.
    pub fn message(&self) -> &'static str {
        if self.is_consistent() {
            CONSISTENT_MESSAGE
        } else {
            INCONSISTENT_MESSAGE
        }
    }
}

/// Evaluates the consistency of a matrix against a derived weight vector.
///
/// The maximum eigenvalue is estimated as the mean of `(X * w)_i / w_i`,
/// which is exact when `w` is the principal eigenvector and a close
/// estimate for the other derivation modes. Orders below 3 are
/// consistent by construction and report a zero index and ratio.
pub fn evaluate(
    matrix: &ComparisonMatrix,
    weights: &[f64],
) -> Result<Consistency, ComputationError> {
    let order = matrix.order();
    if order < 3 {
        return Ok(Consistency {
            lambda_max: order as f64,
            index: 0.0,
            ratio: 0.0,
        });
    }

    let random = random_index(order).ok_or(ComputationError::MissingRandomIndex { order })?;
    let weighted = matrix.apply(weights);
    let mut ratio_sum = 0.0;
    for (row_total, weight) in weighted.iter().zip(weights) {
        if !(*weight > 0.0) {
            return Err(ComputationError::DegenerateNormalization {
                stage: "estimating the maximum eigenvalue",
            });
        }
        ratio_sum += row_total / weight;
    }

    let lambda_max = ratio_sum / order as f64;
    if !lambda_max.is_finite() {
        return Err(ComputationError::NonFiniteIntermediate {
            stage: "estimating the maximum eigenvalue",
        });
    }

    // lambda_max >= order holds for any positive weight vector on a
    // reciprocal matrix; the clamp only absorbs rounding noise.
    let index = ((lambda_max - order as f64) / (order as f64 - 1.0)).max(0.0);
    let ratio = index / random;
    Ok(Consistency {
        lambda_max,
        index,
        ratio,
    })
}
