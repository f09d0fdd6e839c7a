//! Runtime-selectable edit-distance metrics.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Edit-distance metric type.
///
/// Different metrics support different edit operations and are
/// suited for different use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// Position-wise substitutions only; inputs must have equal length.
    Hamming,

    /// Standard Levenshtein distance.
    ///
    /// Supports insert, delete and substitute.
    #[default]
    Levenshtein,

    /// Levenshtein with adjacent transposition (optimal string alignment).
    ///
    /// Useful for catching common typos where adjacent letters are swapped.
    DamerauLevenshtein,

    /// Unrestricted Damerau-Levenshtein distance.
    ///
    /// Like [`Algorithm::DamerauLevenshtein`] but transposed characters may
    /// be separated by further edits.
    TrueDamerauLevenshtein,
}

impl Algorithm {
    /// All metrics, in declaration order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Hamming,
        Algorithm::Levenshtein,
        Algorithm::DamerauLevenshtein,
        Algorithm::TrueDamerauLevenshtein,
    ];

    /// Get a human-readable name for this metric
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Hamming => "hamming",
            Algorithm::Levenshtein => "levenshtein",
            Algorithm::DamerauLevenshtein => "damerau-levenshtein",
            Algorithm::TrueDamerauLevenshtein => "true-damerau-levenshtein",
        }
    }

    /// Check if this metric counts adjacent transpositions as one edit
    pub fn supports_transposition(&self) -> bool {
        matches!(
            self,
            Algorithm::DamerauLevenshtein | Algorithm::TrueDamerauLevenshtein
        )
    }

    /// Compute the distance between two strings with this metric.
    ///
    /// # Errors
    ///
    /// Only [`Algorithm::Hamming`] can fail, with
    /// [`Error::LengthMismatch`] for unequal lengths.
    ///
    /// # Example
    ///
    /// ```rust
    /// use libstrmatch::distance::Algorithm;
    ///
    /// assert_eq!(Algorithm::Levenshtein.distance("ca", "ac").unwrap(), 2);
    /// assert_eq!(Algorithm::DamerauLevenshtein.distance("ca", "ac").unwrap(), 1);
    /// ```
    pub fn distance(&self, source: &str, target: &str) -> Result<usize> {
        match self {
            Algorithm::Hamming => super::hamming_distance(source, target),
            Algorithm::Levenshtein => Ok(super::levenshtein_distance(source, target)),
            Algorithm::DamerauLevenshtein => {
                Ok(super::damerau_levenshtein_distance(source, target))
            }
            Algorithm::TrueDamerauLevenshtein => {
                Ok(super::true_damerau_levenshtein_distance(source, target))
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "hamming" => Ok(Algorithm::Hamming),
            "levenshtein" | "standard" => Ok(Algorithm::Levenshtein),
            "damerau-levenshtein" | "damerau" | "osa" | "transposition" => {
                Ok(Algorithm::DamerauLevenshtein)
            }
            "true-damerau-levenshtein" | "true-damerau" => Ok(Algorithm::TrueDamerauLevenshtein),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
