//! Similarity scores in the unit interval.
//!
//! - [`jaro_distance`]: matching characters within a sliding window, penalized
//!   by transpositions
//! - [`jaro_winkler`]: Jaro with a bonus for a shared prefix and an optional
//!   long-string adjustment
//!
//! Both return `0.0` when either input is empty. Neither is a metric; the
//! triangle inequality does not hold.

mod jaro;

pub use jaro::{jaro_distance, jaro_winkler, JaroWinkler};

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Runtime-selectable similarity score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(rename_all = "kebab-case"))]
pub enum Similarity {
    /// Plain Jaro similarity.
    Jaro,
    /// Jaro-Winkler with the given options.
    JaroWinkler(JaroWinkler),
}

impl Default for Similarity {
    fn default() -> Self {
        Similarity::JaroWinkler(JaroWinkler::default())
    }
}

impl Similarity {
    /// Get a human-readable name for this score
    pub fn name(&self) -> &'static str {
        match self {
            Similarity::Jaro => "jaro",
            Similarity::JaroWinkler(options) if options.long_tolerance => {
                "jaro-winkler-long"
            }
            Similarity::JaroWinkler(_) => "jaro-winkler",
        }
    }

    /// Score two strings.
    ///
    /// ```rust
    /// use libstrmatch::similarity::Similarity;
    ///
    /// let score = Similarity::Jaro.similarity("MARTHA", "MARHTA");
    /// assert!((score - 0.944).abs() < 1e-3);
    /// ```
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        match self {
            Similarity::Jaro => jaro_distance(a, b),
            Similarity::JaroWinkler(options) => options.similarity(a, b),
        }
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Similarity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "jaro" => Ok(Similarity::Jaro),
            "jaro-winkler" | "winkler" => Ok(Similarity::default()),
            "jaro-winkler-long" => Ok(Similarity::JaroWinkler(JaroWinkler {
                long_tolerance: true,
                ..JaroWinkler::default()
            })),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
