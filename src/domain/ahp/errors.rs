//! Error types for matrix construction and weight derivation.

use thiserror::Error;

/// Violations of the comparison-matrix invariants.
///
/// All datasets are built and validated once at startup, so these are
/// startup-time errors; a request can never observe them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// The matrix has no rows.
    #[error("Comparison matrix cannot be empty")]
    Empty,

    /// A row does not have as many entries as there are rows.
    #[error("Row {row} has {found} entries, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// The matrix is larger than the random-index table supports.
    #[error("Matrix order {order} exceeds the supported maximum of {max}")]
    UnsupportedOrder { order: usize, max: usize },

    /// A crisp entry is not a positive finite number.
    #[error("Entry ({row}, {col}) must be a positive finite number, got {value}")]
    InvalidEntry { row: usize, col: usize, value: f64 },

    /// A diagonal entry is not the identity for its matrix kind.
    #[error("Diagonal entry at index {index} must be the identity, got {value}")]
    InvalidDiagonal { index: usize, value: f64 },

    /// A pair of mirrored entries violates the reciprocal relation.
    #[error("Entries ({row}, {col}) = {value} and ({col}, {row}) = {mirror} are not reciprocal")]
    ReciprocityViolation {
        row: usize,
        col: usize,
        value: f64,
        mirror: f64,
    },

    /// A triangular fuzzy number has a non-positive or non-finite component.
    #[error("Fuzzy number ({lower}, {mode}, {upper}) must have positive finite components")]
    InvalidFuzzyComponent { lower: f64, mode: f64, upper: f64 },

    /// A triangular fuzzy number's bounds are out of order.
    #[error("Fuzzy number ({lower}, {mode}, {upper}) must satisfy lower <= mode <= upper")]
    UnorderedFuzzyBounds { lower: f64, mode: f64, upper: f64 },

    /// A Pythagorean pair is outside the unit square or the unit circle.
    #[error("Pair ({membership}, {non_membership}) must lie in [0, 1] with membership^2 + non_membership^2 <= 1")]
    InvalidMembershipPair { membership: f64, non_membership: f64 },
}

/// Failures of the numerical derivation routines.
///
/// These surface to callers as internal errors; the derivation is not
/// retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    /// Power iteration hit the iteration cap before stabilizing.
    #[error("Power iteration did not converge within {iterations} iterations")]
    DidNotConverge { iterations: usize },

    /// A normalization sum vanished or overflowed.
    #[error("Weight normalization degenerated while {stage}")]
    DegenerateNormalization { stage: &'static str },

    /// An intermediate quantity left the finite range.
    #[error("Derivation produced a non-finite value while {stage}")]
    NonFiniteIntermediate { stage: &'static str },

    /// A value derived during computation broke its own invariants.
    #[error("Derived value violates its invariants: {0}")]
    InvalidDerivedValue(#[from] MatrixError),

    /// No random index exists for the matrix order.
    #[error("No random consistency index is defined for order {order}")]
    MissingRandomIndex { order: usize },
}
