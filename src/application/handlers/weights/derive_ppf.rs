//! DerivePpfWeightsHandler - query handler for PPF-AHP weights.
//!
//! Maps the fixed five-criteria Pythagorean-pair dataset to preference
//! intensities and derives weights from their row sums.

use std::sync::Arc;

use thiserror::Error;

use crate::config::Datasets;
use crate::domain::ahp::{derive_ppf_weights, ComputationError, Consistency, PythagoreanPair};

/// Result of a successful PPF weight derivation.
#[derive(Debug, Clone)]
pub struct DerivePpfWeightsResult {
    /// One weight per criterion, in matrix row order, summing to 1.
    pub weights: Vec<f64>,
    /// Consistency figures for the derived intensity matrix.
    pub consistency: Consistency,
    /// The Pythagorean-pair judgment matrix, row by row.
    pub dataset: Vec<Vec<PythagoreanPair>>,
}

/// Error from the PPF weight derivation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DerivePpfWeightsError {
    /// The numerical routine failed.
    #[error(transparent)]
    Computation(#[from] ComputationError),
}

/// Handler computing PPF-AHP weights over the fixed dataset.
pub struct DerivePpfWeightsHandler {
    datasets: Arc<Datasets>,
}

impl DerivePpfWeightsHandler {
    pub fn new(datasets: Arc<Datasets>) -> Self {
        Self { datasets }
    }

    pub fn handle(&self) -> Result<DerivePpfWeightsResult, DerivePpfWeightsError> {
        let matrix = &self.datasets.ppf;
        let derivation = derive_ppf_weights(matrix)?;

        tracing::debug!(
            consistency_ratio = derivation.consistency.ratio,
            "derived PPF weights"
        );

        Ok(DerivePpfWeightsResult {
            weights: derivation.weights,
            consistency: derivation.consistency,
            dataset: matrix.rows(),
        })
    }
}
