//! HTTP adapter for the weighting endpoints.
//!
//! This module exposes the AHP derivations via REST endpoints.
//!
//! # Endpoints
//!
//! - `POST /calculate-ahp/` - Classical AHP over the fixed 7x7 dataset
//! - `GET /fuzzy-ahp` - Fuzzy AHP over the fixed 4x4 dataset
//! - `GET /ppf-ahp` - PPF-AHP over the fixed 5x5 dataset
//!
//! The route shapes and JSON key names (including `crisp_weigths` and
//! `dataset3`) are frozen for compatibility with existing clients.

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::WeightsAppState;
pub use routes::weights_router;
