//! Application layer - query handlers.
//!
//! This layer wires the HTTP surface to the domain engine. Each handler
//! owns the shared datasets and exposes one derivation operation.

pub mod handlers;

pub use handlers::weights::{
    // Classical AHP
    DeriveClassicalWeightsError, DeriveClassicalWeightsHandler, DeriveClassicalWeightsQuery,
    DeriveClassicalWeightsResult,
    // Fuzzy AHP
    DeriveFuzzyWeightsError, DeriveFuzzyWeightsHandler, DeriveFuzzyWeightsResult,
    // PPF-AHP
    DerivePpfWeightsError, DerivePpfWeightsHandler, DerivePpfWeightsResult,
};
