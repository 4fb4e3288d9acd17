//! Fixed comparison datasets, built and validated once at startup.

use crate::domain::ahp::{
    ComparisonMatrix, FuzzyComparisonMatrix, MatrixError, PpfComparisonMatrix,
};

/// The fixed datasets served by the weighting endpoints.
///
/// Construction runs the full matrix validation, so a value of this
/// type is proof that every dataset is well formed. Handlers share it
/// behind an `Arc`; it is never mutated after startup.
#[derive(Debug, Clone)]
pub struct Datasets {
    /// 7x7 crisp judgment matrix for classical AHP.
    pub classical: ComparisonMatrix,
    /// 4x4 triangular-fuzzy judgment matrix for fuzzy AHP.
    pub fuzzy: FuzzyComparisonMatrix,
    /// 5x5 Pythagorean-pair judgment matrix for PPF-AHP.
    pub ppf: PpfComparisonMatrix,
}

impl Datasets {
    /// Builds the standard datasets.
    ///
    /// A failure here is a startup error; the process should exit.
    pub fn standard() -> Result<Self, MatrixError> {
        Ok(Self {
            classical: classical_dataset()?,
            fuzzy: fuzzy_dataset()?,
            ppf: ppf_dataset()?,
        })
    }
}

/// Seven criteria compared on Saaty's 1-9 scale.
fn classical_dataset() -> Result<ComparisonMatrix, MatrixError> {
    ComparisonMatrix::from_rows(vec![
        vec![1.0, 1.0 / 3.0, 1.0 / 5.0, 1.0, 1.0 / 4.0, 1.0 / 2.0, 3.0],
        vec![3.0, 1.0, 1.0 / 2.0, 2.0, 1.0 / 3.0, 3.0, 3.0],
        vec![5.0, 2.0, 1.0, 4.0, 5.0, 6.0, 5.0],
        vec![1.0, 1.0 / 2.0, 1.0 / 4.0, 1.0, 1.0 / 4.0, 1.0, 2.0],
        vec![4.0, 3.0, 1.0 / 5.0, 4.0, 1.0, 3.0, 2.0],
        vec![2.0, 1.0 / 3.0, 1.0 / 6.0, 1.0, 1.0 / 3.0, 1.0, 1.0 / 3.0],
        vec![1.0 / 3.0, 1.0 / 3.0, 1.0 / 5.0, 1.0 / 2.0, 1.0 / 2.0, 3.0, 1.0],
    ])
}

/// Four criteria judged with triangular fuzzy numbers.
fn fuzzy_dataset() -> Result<FuzzyComparisonMatrix, MatrixError> {
    FuzzyComparisonMatrix::from_rows(vec![
        vec![
            (1.0, 1.0, 1.0),
            (4.0, 5.0, 6.0),
            (3.0, 4.0, 5.0),
            (6.0, 7.0, 8.0),
        ],
        vec![
            (1.0 / 6.0, 1.0 / 5.0, 1.0 / 4.0),
            (1.0, 1.0, 1.0),
            (1.0 / 3.0, 1.0 / 2.0, 1.0),
            (2.0, 3.0, 4.0),
        ],
        vec![
            (1.0 / 5.0, 1.0 / 4.0, 1.0 / 3.0),
            (1.0, 2.0, 3.0),
            (1.0, 1.0, 1.0),
            (2.0, 3.0, 4.0),
        ],
        vec![
            (1.0 / 8.0, 1.0 / 7.0, 1.0 / 6.0),
            (1.0 / 4.0, 1.0 / 3.0, 1.0 / 2.0),
            (1.0 / 4.0, 1.0 / 3.0, 1.0 / 2.0),
            (1.0, 1.0, 1.0),
        ],
    ])
}

/// Five criteria judged with Pythagorean membership pairs. The lower
/// triangle mirrors the upper one with swapped components.
fn ppf_dataset() -> Result<PpfComparisonMatrix, MatrixError> {
    PpfComparisonMatrix::from_rows(vec![
        vec![
            (0.0, 0.0),
            (0.65, 0.35),
            (0.75, 0.25),
            (0.55, 0.45),
            (0.85, 0.15),
        ],
        vec![
            (0.35, 0.65),
            (0.0, 0.0),
            (0.60, 0.40),
            (0.45, 0.55),
            (0.75, 0.25),
        ],
        vec![
            (0.25, 0.75),
            (0.40, 0.60),
            (0.0, 0.0),
            (0.35, 0.65),
            (0.65, 0.35),
        ],
        vec![
            (0.45, 0.55),
            (0.55, 0.45),
            (0.65, 0.35),
            (0.0, 0.0),
            (0.80, 0.20),
        ],
        vec![
            (0.15, 0.85),
            (0.25, 0.75),
            (0.35, 0.65),
            (0.20, 0.80),
            (0.0, 0.0),
        ],
    ])
}
