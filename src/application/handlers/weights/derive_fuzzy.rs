//! DeriveFuzzyWeightsHandler - query handler for fuzzy AHP weights.
//!
//! Runs Buckley's geometric-mean method over the fixed four-criteria
//! triangular-fuzzy dataset.

use std::sync::Arc;

use thiserror::Error;

use crate::config::Datasets;
use crate::domain::ahp::{
    derive_fuzzy_weights, ComputationError, Consistency, TriangularFuzzyNumber,
};

/// Result of a successful fuzzy weight derivation.
#[derive(Debug, Clone)]
pub struct DeriveFuzzyWeightsResult {
    /// Fuzzy weight per criterion, the row geometric means.
    pub fuzzy_weights: Vec<TriangularFuzzyNumber>,
    /// Centroid-defuzzified weight per criterion.
    pub crisp_weights: Vec<f64>,
    /// Crisp weights normalized to sum 1.
    pub normalized_weights: Vec<f64>,
    /// Consistency figures for the defuzzified judgment matrix.
    pub consistency: Consistency,
    /// The fuzzy judgment matrix, row by row.
    pub dataset: Vec<Vec<TriangularFuzzyNumber>>,
}

/// Error from the fuzzy weight derivation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeriveFuzzyWeightsError {
    /// The numerical routine failed.
    #[error(transparent)]
    Computation(#[from] ComputationError),
}

/// Handler computing fuzzy AHP weights over the fixed dataset.
pub struct DeriveFuzzyWeightsHandler {
    datasets: Arc<Datasets>,
}

impl DeriveFuzzyWeightsHandler {
    pub fn new(datasets: Arc<Datasets>) -> Self {
        Self { datasets }
    }

    pub fn handle(&self) -> Result<DeriveFuzzyWeightsResult, DeriveFuzzyWeightsError> {
        let matrix = &self.datasets.fuzzy;
        let derivation = derive_fuzzy_weights(matrix)?;

        tracing::debug!(
            consistency_ratio = derivation.consistency.ratio,
            "derived fuzzy weights"
        );

        Ok(DeriveFuzzyWeightsResult {
            fuzzy_weights: derivation.fuzzy_weights,
            crisp_weights: derivation.crisp_weights,
            normalized_weights: derivation.normalized_weights,
            consistency: derivation.consistency,
            dataset: matrix.rows(),
        })
    }
}
