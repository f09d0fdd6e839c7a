//! Runtime-selectable phonetic encoders.

use std::fmt;
use std::str::FromStr;

use super::match_rating::{match_rating_codex_into, CODEX_MAX_LEN};
use super::metaphone::metaphone_into;
use super::nysiis::{nysiis_into, truncate_chars, NYSIIS_TRUNCATED_LEN};
use super::soundex::{soundex_into, SOUNDEX_LEN};
use crate::error::{Error, Result};

/// Phonetic encoder type.
///
/// Every encoder maps a string to an owned key; two strings are
/// phonetically equivalent under an encoder when their keys are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(rename_all = "kebab-case"))]
pub enum Encoder {
    /// American Soundex (four-character keys).
    #[default]
    Soundex,

    /// Metaphone (unbounded keys).
    Metaphone,

    /// NYSIIS, optionally truncated to `max_len` characters.
    Nysiis {
        /// Maximum key length in characters; `None` keeps the full key
        max_len: Option<usize>,
    },

    /// Match Rating Approach codex (at most six characters).
    MatchRatingCodex,
}

impl Encoder {
    /// All encoders with their default settings, in declaration order.
    pub const ALL: [Encoder; 4] = [
        Encoder::Soundex,
        Encoder::Metaphone,
        Encoder::Nysiis { max_len: None },
        Encoder::MatchRatingCodex,
    ];

    /// Get a human-readable name for this encoder
    pub fn name(&self) -> &'static str {
        match self {
            Encoder::Soundex => "soundex",
            Encoder::Metaphone => "metaphone",
            Encoder::Nysiis { .. } => "nysiis",
            Encoder::MatchRatingCodex => "match-rating-codex",
        }
    }

    /// Upper bound, in bytes, on the key this encoder produces for `input`.
    pub fn max_key_len(&self, input: &str) -> usize {
        match self {
            Encoder::Soundex => input
                .chars()
                .next()
                .map_or(0, |first| first.len_utf8() + SOUNDEX_LEN - 1),
            // At most two key bytes ("KS") per input character
            Encoder::Metaphone => input.len().saturating_mul(2),
            Encoder::Nysiis { max_len: None } => input.len(),
            Encoder::Nysiis {
                max_len: Some(max_len),
            } => input.len().min(max_len.saturating_mul(4)),
            Encoder::MatchRatingCodex => input.len().min(CODEX_MAX_LEN * 4),
        }
    }

    fn encode_into(&self, input: &str, key: &mut String) {
        match self {
            Encoder::Soundex => soundex_into(input, key),
            Encoder::Metaphone => metaphone_into(input, key),
            Encoder::Nysiis { max_len } => {
                nysiis_into(input, key);
                if let Some(max_len) = max_len {
                    truncate_chars(key, *max_len);
                }
            }
            Encoder::MatchRatingCodex => match_rating_codex_into(input, key),
        }
    }

    /// Encode a string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use libstrmatch::phonetic::Encoder;
    ///
    /// assert_eq!(Encoder::Soundex.encode("Robert"), "R163");
    /// assert_eq!(Encoder::Metaphone.encode("Thompson"), "TMSN");
    /// ```
    pub fn encode(&self, input: &str) -> String {
        let mut key = String::with_capacity(self.max_key_len(input));
        self.encode_into(input, &mut key);
        key
    }

    /// Encode a string, reporting allocation failure instead of aborting.
    ///
    /// The key's upper bound is reserved up front, so an empty key always
    /// means empty (or fully silent) input, never a failed allocation.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if the key buffer cannot be allocated.
    pub fn try_encode(&self, input: &str) -> Result<String> {
        let mut key = String::new();
        key.try_reserve_exact(self.max_key_len(input))?;
        self.encode_into(input, &mut key);
        Ok(key)
    }

    /// Check whether two strings have the same key under this encoder.
    ///
    /// ```rust
    /// use libstrmatch::phonetic::Encoder;
    ///
    /// assert!(Encoder::Soundex.matches("Robert", "Rupert"));
    /// assert!(!Encoder::Metaphone.matches("Robert", "Rupert"));
    /// ```
    pub fn matches(&self, a: &str, b: &str) -> bool {
        self.encode(a) == self.encode(b)
    }
}

impl fmt::Display for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoder::Nysiis {
                max_len: Some(max_len),
            } => write!(f, "nysiis-{max_len}"),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for Encoder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "soundex" => Ok(Encoder::Soundex),
            "metaphone" => Ok(Encoder::Metaphone),
            "nysiis" => Ok(Encoder::Nysiis { max_len: None }),
            "nysiis-truncated" => Ok(Encoder::Nysiis {
                max_len: Some(NYSIIS_TRUNCATED_LEN),
            }),
            "match-rating-codex" | "match-rating" | "mra" => Ok(Encoder::MatchRatingCodex),
            other => other
                .strip_prefix("nysiis-")
                .and_then(|len| len.parse().ok())
                .map(|max_len| Encoder::Nysiis {
                    max_len: Some(max_len),
                })
                .ok_or_else(|| Error::UnknownEncoder(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        let encoders = Encoder::ALL
            .into_iter()
            .chain([Encoder::Nysiis { max_len: Some(4) }]);
        for encoder in encoders {
            assert_eq!(encoder.to_string().parse::<Encoder>().unwrap(), encoder);
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("MRA".parse::<Encoder>().unwrap(), Encoder::MatchRatingCodex);
        assert_eq!(
            "nysiis_truncated".parse::<Encoder>().unwrap(),
            Encoder::Nysiis { max_len: Some(6) }
        );
        assert_eq!(
            "caverphone".parse::<Encoder>(),
            Err(Error::UnknownEncoder("caverphone".to_string()))
        );
        assert!("nysiis-six".parse::<Encoder>().is_err());
    }

    #[test]
    fn test_encode_dispatch() {
        assert_eq!(Encoder::Soundex.encode("Tymczak"), "T522");
        assert_eq!(Encoder::Metaphone.encode("Knight"), "NT");
        assert_eq!(Encoder::Nysiis { max_len: None }.encode("Phillipson"), "FALAPSAN");
        assert_eq!(Encoder::Nysiis { max_len: Some(6) }.encode("Phillipson"), "FALAPS");
        assert_eq!(Encoder::MatchRatingCodex.encode("Smith"), "SMTH");
    }

    #[test]
    fn test_try_encode_matches_encode() {
        for encoder in Encoder::ALL {
            for word in ["", "Robert", "Xavier Thompson", "Ünïcödé"] {
                assert_eq!(encoder.try_encode(word).unwrap(), encoder.encode(word));
            }
        }
    }

    #[test]
    fn test_max_key_len_is_an_upper_bound() {
        for encoder in Encoder::ALL {
            for word in ["", "a", "Éa", "Maxx Knox", "Schwarzenegger", "Xavier"] {
                let key = encoder.encode(word);
                assert!(
                    key.len() <= encoder.max_key_len(word),
                    "{encoder} key {key:?} exceeds bound for {word:?}"
                );
            }
        }
    }

    #[test]
    fn test_empty_input_encodes_to_empty_key() {
        for encoder in Encoder::ALL {
            assert_eq!(encoder.encode(""), "", "{encoder}");
        }
    }

    #[test]
    fn test_matches() {
        assert!(Encoder::Soundex.matches("Ashcraft", "Ashcroft"));
        assert!(Encoder::MatchRatingCodex.matches("Byrne", "Byrne"));
        assert!(Encoder::Nysiis { max_len: None }.matches("Knight", "Night"));
        assert!(!Encoder::Nysiis { max_len: None }.matches("Smith", "Jones"));
    }
}
