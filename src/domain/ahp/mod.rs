//! Pairwise-comparison weight engine.
//!
//! Three derivation variants over validated judgment matrices:
//!
//! - [`classical`] - crisp reciprocal matrices, three derivation modes
//! - [`fuzzy`] - triangular fuzzy judgments, Buckley geometric means
//! - [`ppf`] - Pythagorean preference pairs, score-function intensities
//!
//! All variants report Saaty consistency figures through [`consistency`].

pub mod classical;
pub mod consistency;
pub mod derivation;
pub mod errors;
pub mod fuzzy;
pub mod matrix;
pub mod ppf;

pub use classical::{derive_weights, Derivation};
pub use consistency::{Consistency, CONSISTENCY_THRESHOLD, MAX_SUPPORTED_ORDER};
pub use derivation::{InvalidDerivationMode, WeightDerivation};
pub use errors::{ComputationError, MatrixError};
pub use fuzzy::{
    derive_fuzzy_weights, FuzzyComparisonMatrix, FuzzyDerivation, TriangularFuzzyNumber,
};
pub use matrix::ComparisonMatrix;
pub use ppf::{derive_ppf_weights, PpfComparisonMatrix, PpfDerivation, PythagoreanPair};
