//! Classical AHP weight derivation.

use crate::domain::ahp::consistency::{self, Consistency};
use crate::domain::ahp::derivation::WeightDerivation;
use crate::domain::ahp::errors::ComputationError;
use crate::domain::ahp::matrix::ComparisonMatrix;

/// Maximum power-iteration steps before giving up.
const MAX_POWER_ITERATIONS: usize = 256;

/// Componentwise convergence threshold for power iteration.
const POWER_ITERATION_TOLERANCE: f64 = 1e-10;

/// Outcome of a classical weight derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    /// One weight per criterion, in matrix row order, summing to 1.
    pub weights: Vec<f64>,
    /// Consistency figures for the judgment matrix.
    pub consistency: Consistency,
}

/// Derives a weight vector and its consistency figures from a
/// reciprocal comparison matrix.
pub fn derive_weights(
    matrix: &ComparisonMatrix,
    mode: WeightDerivation,
) -> Result<Derivation, ComputationError> {
    let weights = match mode {
        WeightDerivation::Mean => column_normalized_row_means(matrix),
        WeightDerivation::Geometric => normalized_row_geometric_means(matrix)?,
        WeightDerivation::MaxEigen => principal_eigenvector(matrix)?,
    };
    let consistency = consistency::evaluate(matrix, &weights)?;
    Ok(Derivation {
        weights,
        consistency,
    })
}

/// Normalizes each column to sum 1, then averages across each row.
fn column_normalized_row_means(matrix: &ComparisonMatrix) -> Vec<f64> {
    let order = matrix.order();
    let column_sums: Vec<f64> = (0..order)
        .map(|col| (0..order).map(|row| matrix.entry(row, col)).sum())
        .collect();
    (0..order)
        .map(|row| {
            (0..order)
                .map(|col| matrix.entry(row, col) / column_sums[col])
                .sum::<f64>()
                / order as f64
        })
        .collect()
}

/// Takes the geometric mean of each row, then normalizes to sum 1.
fn normalized_row_geometric_means(
    matrix: &ComparisonMatrix,
) -> Result<Vec<f64>, ComputationError> {
    let order = matrix.order();
    let mut weights: Vec<f64> = (0..order)
        .map(|row| {
            let product: f64 = (0..order).map(|col| matrix.entry(row, col)).product();
            product.powf(1.0 / order as f64)
        })
        .collect();
    let sum: f64 = weights.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return Err(ComputationError::DegenerateNormalization {
            stage: "normalizing row geometric means",
        });
    }
    for weight in &mut weights {
        *weight /= sum;
    }
    Ok(weights)
}

/// Estimates the principal eigenvector by repeated application of the
/// matrix, renormalizing to sum 1 after each step. Iteration stops when
/// no component moves by more than [`POWER_ITERATION_TOLERANCE`].
fn principal_eigenvector(matrix: &ComparisonMatrix) -> Result<Vec<f64>, ComputationError> {
    let order = matrix.order();
    let mut weights = vec![1.0 / order as f64; order];

    for _ in 0..MAX_POWER_ITERATIONS {
        let raw = matrix.apply(&weights);
        let sum: f64 = raw.iter().sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Err(ComputationError::DegenerateNormalization {
                stage: "renormalizing the power iterate",
            });
        }
        let next: Vec<f64> = raw.into_iter().map(|value| value / sum).collect();

        let max_change = next
            .iter()
            .zip(&weights)
            .map(|(new, old)| (new - old).abs())
            .fold(0.0_f64, f64::max);
        weights = next;
        if max_change < POWER_ITERATION_TOLERANCE {
            return Ok(weights);
        }
    }

    Err(ComputationError::DidNotConverge {
        iterations: MAX_POWER_ITERATIONS,
    })
}
