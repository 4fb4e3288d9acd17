//! Weight-derivation handlers, one per endpoint.

mod derive_classical;
mod derive_fuzzy;
mod derive_ppf;

pub use derive_classical::{
    DeriveClassicalWeightsError, DeriveClassicalWeightsHandler, DeriveClassicalWeightsQuery,
    DeriveClassicalWeightsResult,
};
pub use derive_fuzzy::{DeriveFuzzyWeightsError, DeriveFuzzyWeightsHandler, DeriveFuzzyWeightsResult};
pub use derive_ppf::{DerivePpfWeightsError, DerivePpfWeightsHandler, DerivePpfWeightsResult};
