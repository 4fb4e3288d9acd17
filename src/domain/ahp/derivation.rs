//! Weight-derivation mode selection.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How a classical comparison matrix is turned into a weight vector.
///
/// All three modes produce a vector that sums to 1; they differ in how
/// they aggregate the judgments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightDerivation {
    /// Column-normalize the matrix, then average each row.
    Mean,
    /// Normalized row geometric means.
    #[default]
    Geometric,
    /// Principal eigenvector, estimated by power iteration.
    MaxEigen,
}

impl WeightDerivation {
    /// Every recognized mode, in wire order.
    pub const ALL: [WeightDerivation; 3] = [Self::Mean, Self::Geometric, Self::MaxEigen];

    /// The wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Geometric => "geometric",
            Self::MaxEigen => "max_eigen",
        }
    }
}

impl fmt::Display for WeightDerivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a requested mode is not one of the recognized values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid weight derivation option '{requested}'. Valid options are 'mean', 'geometric' and 'max_eigen'.")]
pub struct InvalidDerivationMode {
    /// The value the caller sent.
    pub requested: String,
}

impl FromStr for WeightDerivation {
    type Err = InvalidDerivationMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(Self::Mean),
            "geometric" => Ok(Self::Geometric),
            "max_eigen" => Ok(Self::MaxEigen),
            other => Err(InvalidDerivationMode {
                requested: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_recognized_mode() {
        assert_eq!("mean".parse::<WeightDerivation>(), Ok(WeightDerivation::Mean));
        assert_eq!(
            "geometric".parse::<WeightDerivation>(),
            Ok(WeightDerivation::Geometric)
        );
        assert_eq!(
            "max_eigen".parse::<WeightDerivation>(),
            Ok(WeightDerivation::MaxEigen)
        );
    }

    #[test]
    fn rejects_unknown_mode_with_descriptive_message() {
        let err = "eigenvalue".parse::<WeightDerivation>().unwrap_err();
        assert_eq!(err.requested, "eigenvalue");
        let message = err.to_string();
        assert!(message.contains("'eigenvalue'"));
        assert!(message.contains("mean"));
        assert!(message.contains("geometric"));
        assert!(message.contains("max_eigen"));
    }

    #[test]
    fn rejects_mode_with_wrong_case() {
        assert!("Geometric".parse::<WeightDerivation>().is_err());
        assert!("MAX_EIGEN".parse::<WeightDerivation>().is_err());
    }

    #[test]
    fn default_mode_is_geometric() {
        assert_eq!(WeightDerivation::default(), WeightDerivation::Geometric);
    }

    #[test]
    fn display_matches_wire_name() {
        for mode in WeightDerivation::ALL {
            assert_eq!(mode.to_string(), mode.as_str());
            assert_eq!(mode.as_str().parse::<WeightDerivation>(), Ok(mode));
        }
    }
}
