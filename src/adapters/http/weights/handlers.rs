//! HTTP handlers for the weighting endpoints.
//!
//! These handlers connect Axum routes to the application layer query
//! handlers. Derivation failures map to 500; an unrecognized mode maps
//! to 400 with a descriptive message.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::weights::{
    DeriveClassicalWeightsError, DeriveClassicalWeightsHandler, DeriveClassicalWeightsQuery,
    DeriveFuzzyWeightsError, DeriveFuzzyWeightsHandler, DerivePpfWeightsError,
    DerivePpfWeightsHandler,
};
use crate::config::Datasets;
use crate::domain::ahp::WeightDerivation;

use super::dto::{
    AhpCalculationRequest, AhpCalculationResponse, ErrorResponse, FuzzyAhpResponse, PpfAhpResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing the fixed datasets.
#[derive(Clone)]
pub struct WeightsAppState {
    pub datasets: Arc<Datasets>,
}

impl WeightsAppState {
    pub fn new(datasets: Arc<Datasets>) -> Self {
        Self { datasets }
    }

    pub fn classical_handler(&self) -> DeriveClassicalWeightsHandler {
        DeriveClassicalWeightsHandler::new(self.datasets.clone())
    }

    pub fn fuzzy_handler(&self) -> DeriveFuzzyWeightsHandler {
        DeriveFuzzyWeightsHandler::new(self.datasets.clone())
    }

    pub fn ppf_handler(&self) -> DerivePpfWeightsHandler {
        DerivePpfWeightsHandler::new(self.datasets.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Endpoint Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /calculate-ahp/ - Classical AHP over the fixed dataset
pub async fn calculate_ahp(
    State(state): State<WeightsAppState>,
    payload: Result<Json<AhpCalculationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, WeightsApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        // No JSON body at all: fall back to the default mode.
        Err(JsonRejection::MissingJsonContentType(_)) => AhpCalculationRequest::default(),
        Err(rejection) => return Err(WeightsApiError::BadRequest(rejection.body_text())),
    };

    let derivation = match request.weight_derivation.as_deref() {
        None => WeightDerivation::default(),
        Some(raw) => raw
            .parse::<WeightDerivation>()
            .map_err(|err| WeightsApiError::BadRequest(err.to_string()))?,
    };

    let handler = state.classical_handler();
    let result = handler.handle(DeriveClassicalWeightsQuery { derivation })?;

    Ok((StatusCode::OK, Json(AhpCalculationResponse::from(result))))
}

/// GET /fuzzy-ahp - Fuzzy AHP over the fixed dataset
pub async fn fuzzy_ahp(
    State(state): State<WeightsAppState>,
) -> Result<impl IntoResponse, WeightsApiError> {
    let handler = state.fuzzy_handler();
    let result = handler.handle()?;

    Ok((StatusCode::OK, Json(FuzzyAhpResponse::from(result))))
}

/// GET /ppf-ahp - PPF-AHP over the fixed dataset
pub async fn ppf_ahp(
    State(state): State<WeightsAppState>,
) -> Result<impl IntoResponse, WeightsApiError> {
    let handler = state.ppf_handler();
    let result = handler.handle()?;

    Ok((StatusCode::OK, Json(PpfAhpResponse::from(result))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts derivation errors to HTTP responses.
#[derive(Debug)]
pub enum WeightsApiError {
    BadRequest(String),
    Internal(String),
}

impl From<DeriveClassicalWeightsError> for WeightsApiError {
    fn from(err: DeriveClassicalWeightsError) -> Self {
        WeightsApiError::Internal(err.to_string())
    }
}

impl From<DeriveFuzzyWeightsError> for WeightsApiError {
    fn from(err: DeriveFuzzyWeightsError) -> Self {
        WeightsApiError::Internal(err.to_string())
    }
}

impl From<DerivePpfWeightsError> for WeightsApiError {
    fn from(err: DerivePpfWeightsError) -> Self {
        WeightsApiError::Internal(err.to_string())
    }
}

impl IntoResponse for WeightsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            WeightsApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            WeightsApiError::Internal(msg) => {
                tracing::error!(error = %msg, "weight derivation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal(msg),
                )
            }
        };
        (status, Json(error)).into_response()
    }
}
