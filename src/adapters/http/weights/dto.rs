//! HTTP DTOs (Data Transfer Objects) for the weighting endpoints.
//!
//! These types define the JSON request/response structure for the AHP API.
//! They serve as the boundary between HTTP and the application layer, and
//! apply the wire rounding policy: weights to three decimals, consistency
//! ratios to two. Verdict strings are computed on the unrounded ratio.

use serde::{Deserialize, Serialize};

use crate::application::handlers::weights::{
    DeriveClassicalWeightsResult, DeriveFuzzyWeightsResult, DerivePpfWeightsResult,
};

/// Decimal places kept for weight vectors on the wire.
const WEIGHT_DECIMALS: i32 = 3;

/// Decimal places kept for consistency ratios on the wire.
const RATIO_DECIMALS: i32 = 2;

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn round_weights(weights: &[f64]) -> Vec<f64> {
    weights
        .iter()
        .map(|weight| round_to(*weight, WEIGHT_DECIMALS))
        .collect()
}

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request for a classical AHP calculation.
///
/// A missing body or a missing field selects the default mode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AhpCalculationRequest {
    /// Derivation mode: "mean", "geometric" or "max_eigen".
    #[serde(default)]
    pub weight_derivation: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for the classical AHP calculation.
#[derive(Debug, Clone, Serialize)]
pub struct AhpCalculationResponse {
    /// One weight per criterion, rounded to three decimals.
    pub weights: Vec<f64>,
    /// Consistency ratio, rounded to two decimals.
    pub consistency_ratio: f64,
    /// Verdict on the unrounded ratio against the 0.10 threshold.
    pub consistency_message: String,
    /// The judgment matrix the weights were derived from.
    pub dataset: Vec<Vec<f64>>,
}

impl From<DeriveClassicalWeightsResult> for AhpCalculationResponse {
    fn from(result: DeriveClassicalWeightsResult) -> Self {
        Self {
            weights: round_weights(&result.weights),
            consistency_ratio: round_to(result.consistency.ratio, RATIO_DECIMALS),
            consistency_message: result.consistency.message().to_string(),
            dataset: result.dataset,
        }
    }
}

/// Response for the fuzzy AHP calculation.
#[derive(Debug, Clone, Serialize)]
pub struct FuzzyAhpResponse {
    /// The fuzzy judgment matrix as `[lower, mode, upper]` triples.
    pub dataset: Vec<Vec<[f64; 3]>>,
    /// Fuzzy weight per criterion, components rounded to three decimals.
    pub fuzzy_weights: Vec<[f64; 3]>,
    /// Defuzzified weights. The misspelled key is kept for wire
    /// compatibility with existing clients.
    #[serde(rename = "crisp_weigths")]
    pub crisp_weights: Vec<f64>,
    /// Crisp weights normalized to sum 1, rounded to three decimals.
    pub normalized_weights: Vec<f64>,
    /// Consistency ratio of the defuzzified matrix, rounded to two decimals.
    pub consistency_ratio: f64,
    /// Verdict on the unrounded ratio against the 0.10 threshold.
    pub consistency_message: String,
}

impl From<DeriveFuzzyWeightsResult> for FuzzyAhpResponse {
    fn from(result: DeriveFuzzyWeightsResult) -> Self {
        let round_triple = |triple: [f64; 3]| {
            [
                round_to(triple[0], WEIGHT_DECIMALS),
                round_to(triple[1], WEIGHT_DECIMALS),
                round_to(triple[2], WEIGHT_DECIMALS),
            ]
        };
        Self {
            dataset: result
                .dataset
                .iter()
                .map(|row| row.iter().map(|entry| entry.as_triple()).collect())
                .collect(),
            fuzzy_weights: result
                .fuzzy_weights
                .iter()
                .map(|weight| round_triple(weight.as_triple()))
                .collect(),
            crisp_weights: round_weights(&result.crisp_weights),
            normalized_weights: round_weights(&result.normalized_weights),
            consistency_ratio: round_to(result.consistency.ratio, RATIO_DECIMALS),
            consistency_message: result.consistency.message().to_string(),
        }
    }
}

/// Response for the PPF-AHP calculation.
#[derive(Debug, Clone, Serialize)]
pub struct PpfAhpResponse {
    /// One weight per criterion, rounded to three decimals.
    pub weights: Vec<f64>,
    /// Consistency ratio of the intensity matrix, rounded to two decimals.
    pub consistency_ratio: f64,
    /// Whether the unrounded ratio is within the 0.10 threshold.
    pub is_consistent: bool,
    /// The pair matrix as `[membership, non_membership]` pairs. The key
    /// is kept for wire compatibility with existing clients.
    #[serde(rename = "dataset3")]
    pub dataset: Vec<Vec<[f64; 2]>>,
    /// Verdict on the unrounded ratio against the 0.10 threshold.
    pub consistency_message: String,
}

impl From<DerivePpfWeightsResult> for PpfAhpResponse {
    fn from(result: DerivePpfWeightsResult) -> Self {
        Self {
            weights: round_weights(&result.weights),
            consistency_ratio: round_to(result.consistency.ratio, RATIO_DECIMALS),
            is_consistent: result.consistency.is_consistent(),
            dataset: result
                .dataset
                .iter()
                .map(|row| row.iter().map(|entry| entry.as_pair()).collect())
                .collect(),
            consistency_message: result.consistency.message().to_string(),
        }
    }
}

/// Error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
