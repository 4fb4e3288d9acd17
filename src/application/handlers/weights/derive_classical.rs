//! DeriveClassicalWeightsHandler - query handler for classical AHP weights.
//!
//! Computes a weight vector and consistency figures over the fixed
//! seven-criteria dataset in the requested derivation mode.

use std::sync::Arc;

use thiserror::Error;

use crate::config::Datasets;
use crate::domain::ahp::{self, ComputationError, Consistency, WeightDerivation};

/// Query for a classical weight derivation.
#[derive(Debug, Clone, Copy)]
pub struct DeriveClassicalWeightsQuery {
    /// How to turn the comparison matrix into weights.
    pub derivation: WeightDerivation,
}

/// Result of a successful classical weight derivation.
#[derive(Debug, Clone)]
pub struct DeriveClassicalWeightsResult {
    /// One weight per criterion, in matrix row order, summing to 1.
    pub weights: Vec<f64>,
    /// Consistency figures for the judgment matrix.
    pub consistency: Consistency,
    /// The judgment matrix the weights were derived from, row by row.
    pub dataset: Vec<Vec<f64>>,
}

/// Error from the classical weight derivation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeriveClassicalWeightsError {
    /// The numerical routine failed.
    #[error(transparent)]
    Computation(#[from] ComputationError),
}

/// Handler computing classical AHP weights over the fixed dataset.
pub struct DeriveClassicalWeightsHandler {
    datasets: Arc<Datasets>,
}

impl DeriveClassicalWeightsHandler {
    pub fn new(datasets: Arc<Datasets>) -> Self {
        Self { datasets }
    }

    pub fn handle(
        &self,
        query: DeriveClassicalWeightsQuery,
    ) -> Result<DeriveClassicalWeightsResult, DeriveClassicalWeightsError> {
        let matrix = &self.datasets.classical;
        let derivation = ahp::derive_weights(matrix, query.derivation)?;

        tracing::debug!(
            mode = %query.derivation,
            consistency_ratio = derivation.consistency.ratio,
            "derived classical weights"
        );

        Ok(DeriveClassicalWeightsResult {
            weights: derivation.weights,
            consistency: derivation.consistency,
            dataset: matrix.rows(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> DeriveClassicalWeightsHandler {
        let datasets = Arc::new(Datasets::standard().unwrap());
        DeriveClassicalWeightsHandler::new(datasets)
    }

    #[test]
    fn handle_returns_weights_for_each_criterion() {
        let result = handler()
            .handle(DeriveClassicalWeightsQuery {
                derivation: WeightDerivation::Geometric,
            })
            .unwrap();

        assert_eq!(result.weights.len(), 7);
        let sum: f64 = result.weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn handle_echoes_the_dataset() {
        let result = handler()
            .handle(DeriveClassicalWeightsQuery {
                derivation: WeightDerivation::Mean,
            })
            .unwrap();

        assert_eq!(result.dataset.len(), 7);
        assert_eq!(result.dataset[2][0], 5.0);
        assert_eq!(result.dataset[0][2], 1.0 / 5.0);
    }

    #[test]
    fn handle_reports_inconsistency_of_fixed_dataset() {
        for mode in WeightDerivation::ALL {
            let result = handler()
                .handle(DeriveClassicalWeightsQuery { derivation: mode })
                .unwrap();
            assert!(!result.consistency.is_consistent());
            assert!(result.consistency.ratio > 0.10);
        }
    }

    #[test]
    fn modes_disagree_on_the_fixed_dataset() {
        let geometric = handler()
            .handle(DeriveClassicalWeightsQuery {
                derivation: WeightDerivation::Geometric,
            })
            .unwrap();
        let mean = handler()
            .handle(DeriveClassicalWeightsQuery {
                derivation: WeightDerivation::Mean,
            })
            .unwrap();
        assert_ne!(geometric.weights, mean.weights);
    }
}
