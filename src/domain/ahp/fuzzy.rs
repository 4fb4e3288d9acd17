//! Fuzzy AHP over triangular fuzzy numbers.
//!
//! Weights follow Buckley's geometric-mean method: the fuzzy weight of a
//! criterion is the componentwise geometric mean of its row, normalized
//! with the bound swap `(l/U, m/M, u/L)` and defuzzified by centroid.
//! Consistency is evaluated classically on the defuzzified matrix.

use crate::domain::ahp::consistency::{self, Consistency, MAX_SUPPORTED_ORDER};
use crate::domain::ahp::errors::{ComputationError, MatrixError};
use crate::domain::ahp::matrix::{ComparisonMatrix, DIAGONAL_TOLERANCE, RECIPROCITY_TOLERANCE};

/// A triangular fuzzy number `(lower, mode, upper)`.
///
/// Components are positive, finite and ordered `lower <= mode <= upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularFuzzyNumber {
    lower: f64,
    mode: f64,
    upper: f64,
}

impl TriangularFuzzyNumber {
    /// Builds a fuzzy number, validating its bounds.
    pub fn new(lower: f64, mode: f64, upper: f64) -> Result<Self, MatrixError> {
        for value in [lower, mode, upper] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MatrixError::InvalidFuzzyComponent { lower, mode, upper });
            }
        }
        if lower > mode || mode > upper {
            return Err(MatrixError::UnorderedFuzzyBounds { lower, mode, upper });
        }
        Ok(Self { lower, mode, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn mode(&self) -> f64 {
        self.mode
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// The reverse judgment `(1/upper, 1/mode, 1/lower)`.
    pub fn reciprocal(&self) -> Self {
        Self {
            lower: 1.0 / self.upper,
            mode: 1.0 / self.mode,
            upper: 1.0 / self.lower,
        }
    }

    /// Centroid defuzzification, `(l + m + u) / 3`.
    pub fn centroid(&self) -> f64 {
        (self.lower + self.mode + self.upper) / 3.0
    }

    /// Geometric-mean defuzzification, `(l * m * u)^(1/3)`.
    pub fn geometric_mean(&self) -> f64 {
        (self.lower * self.mode * self.upper).powf(1.0 / 3.0)
    }

    /// The three components as an array, for serialization.
    pub fn as_triple(&self) -> [f64; 3] {
        [self.lower, self.mode, self.upper]
    }
}

/// A square matrix of triangular fuzzy judgments.
///
/// The diagonal is `(1, 1, 1)` and mirrored entries are componentwise
/// reciprocal with the bound swap, so `lower_ji * upper_ij`, `mode_ji *
/// mode_ij` and `upper_ji * lower_ij` are all 1 within tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyComparisonMatrix {
    order: usize,
    entries: Vec<TriangularFuzzyNumber>,
}

impl FuzzyComparisonMatrix {
    /// Builds a matrix from rows of `(lower, mode, upper)` triples.
    pub fn from_rows(rows: Vec<Vec<(f64, f64, f64)>>) -> Result<Self, MatrixError> {
        let order = rows.len();
        if order == 0 {
            return Err(MatrixError::Empty);
        }
        if order > MAX_SUPPORTED_ORDER {
            return Err(MatrixError::UnsupportedOrder {
                order,
                max: MAX_SUPPORTED_ORDER,
            });
        }
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != order {
                return Err(MatrixError::RowLengthMismatch {
                    row,
                    found: entries.len(),
                    expected: order,
                });
            }
        }

        let mut entries = Vec::with_capacity(order * order);
        for row in rows {
            for (lower, mode, upper) in row {
                entries.push(TriangularFuzzyNumber::new(lower, mode, upper)?);
            }
        }
        let matrix = Self { order, entries };
        matrix.check_invariants()?;
        Ok(matrix)
    }

    fn check_invariants(&self) -> Result<(), MatrixError> {
        for index in 0..self.order {
            let diagonal = self.entry(index, index);
            let off_identity = diagonal
                .as_triple()
                .iter()
                .any(|component| (component - 1.0).abs() > DIAGONAL_TOLERANCE);
            if off_identity {
                return Err(MatrixError::InvalidDiagonal {
                    index,
                    value: diagonal.mode(),
                });
            }
        }
        for row in 0..self.order {
            for col in (row + 1)..self.order {
                let value = self.entry(row, col);
                let mirror = self.entry(col, row);
                let products = [
                    value.upper() * mirror.lower(),
                    value.mode() * mirror.mode(),
                    value.lower() * mirror.upper(),
                ];
                if products
                    .iter()
                    .any(|product| (product - 1.0).abs() > RECIPROCITY_TOLERANCE)
                {
                    return Err(MatrixError::ReciprocityViolation {
                        row,
                        col,
                        value: value.mode(),
                        mirror: mirror.mode(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of criteria being compared.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The judgment at (`row`, `col`).
    pub fn entry(&self, row: usize, col: usize) -> TriangularFuzzyNumber {
        self.entries[row * self.order + col]
    }

    /// Rows as owned vectors, for serialization.
    pub fn rows(&self) -> Vec<Vec<TriangularFuzzyNumber>> {
        (0..self.order)
            .map(|row| self.entries[row * self.order..(row + 1) * self.order].to_vec())
            .collect()
    }

    /// The crisp matrix with each entry replaced by its geometric mean.
    ///
    /// Exactly reciprocal for a valid fuzzy matrix, up to rounding.
    pub fn defuzzified(&self) -> Result<ComparisonMatrix, MatrixError> {
        let rows = (0..self.order)
            .map(|row| {
                (0..self.order)
                    .map(|col| self.entry(row, col).geometric_mean())
                    .collect()
            })
            .collect();
        ComparisonMatrix::from_rows(rows)
    }
}

/// Outcome of a fuzzy weight derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyDerivation {
    /// Componentwise geometric mean of each row, unnormalized.
    pub fuzzy_weights: Vec<TriangularFuzzyNumber>,
    /// Centroid of each bound-swap-normalized fuzzy weight.
    pub crisp_weights: Vec<f64>,
    /// Crisp weights normalized to sum 1.
    pub normalized_weights: Vec<f64>,
    /// Consistency of the defuzzified judgment matrix.
    pub consistency: Consistency,
}

/// Derives fuzzy, crisp and normalized weights plus consistency figures
/// from a fuzzy comparison matrix.
pub fn derive_fuzzy_weights(
    matrix: &FuzzyComparisonMatrix,
) -> Result<FuzzyDerivation, ComputationError> {
    let order = matrix.order();
    let exponent = 1.0 / order as f64;

    let mut fuzzy_weights = Vec::with_capacity(order);
    for row in 0..order {
        let mut lower = 1.0;
        let mut mode = 1.0;
        let mut upper = 1.0;
        for col in 0..order {
            let entry = matrix.entry(row, col);
            lower *= entry.lower();
            mode *= entry.mode();
            upper *= entry.upper();
        }
        let weight = TriangularFuzzyNumber::new(
            lower.powf(exponent),
            mode.powf(exponent),
            upper.powf(exponent),
        )?;
        fuzzy_weights.push(weight);
    }

    let lower_sum: f64 = fuzzy_weights.iter().map(TriangularFuzzyNumber::lower).sum();
    let mode_sum: f64 = fuzzy_weights.iter().map(TriangularFuzzyNumber::mode).sum();
    let upper_sum: f64 = fuzzy_weights.iter().map(TriangularFuzzyNumber::upper).sum();
    for sum in [lower_sum, mode_sum, upper_sum] {
        if !sum.is_finite() || sum <= 0.0 {
            return Err(ComputationError::DegenerateNormalization {
                stage: "normalizing fuzzy weights",
            });
        }
    }

    // Bound swap keeps the normalized triple ordered: the smallest
    // component is divided by the largest sum and vice versa.
    let mut crisp_weights = Vec::with_capacity(order);
    for weight in &fuzzy_weights {
        let normalized = TriangularFuzzyNumber::new(
            weight.lower() / upper_sum,
            weight.mode() / mode_sum,
            weight.upper() / lower_sum,
        )?;
        crisp_weights.push(normalized.centroid());
    }

    let crisp_sum: f64 = crisp_weights.iter().sum();
    if !crisp_sum.is_finite() || crisp_sum <= 0.0 {
        return Err(ComputationError::DegenerateNormalization {
            stage: "normalizing crisp weights",
        });
    }
    let normalized_weights: Vec<f64> = crisp_weights
        .iter()
        .map(|weight| weight / crisp_sum)
        .collect();

    let defuzzified = matrix.defuzzified()?;
    let consistency = consistency::evaluate(&defuzzified, &normalized_weights)?;

    Ok(FuzzyDerivation {
        fuzzy_weights,
        crisp_weights,
        normalized_weights,
        consistency,
    })
}
