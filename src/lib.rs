//! # libstrmatch
//!
//! Approximate string comparison and phonetic normalization.
//!
//! This library provides the classic building blocks for fuzzy matching,
//! deduplication and record linkage:
//!
//! - [`distance`]: Hamming, Levenshtein and Damerau-Levenshtein edit distances
//! - [`similarity`]: Jaro and Jaro-Winkler scores in `[0, 1]`
//! - [`phonetic`]: Soundex, Metaphone, NYSIIS and the Match Rating Approach
//! - [`stemmer`]: the Porter suffix-stripping stemmer
//!
//! Every function is a pure computation over borrowed input. Only the
//! [`Stemmer`](stemmer::Stemmer) carries state, and it is used through
//! `&mut self`.
//!
//! ## Example
//!
//! ```rust
//! use libstrmatch::prelude::*;
//!
//! assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
//! assert_eq!(damerau_levenshtein_distance("ca", "ac"), 1);
//! assert!((jaro_winkler("MARTHA", "MARHTA", false) - 0.961).abs() < 1e-3);
//! assert_eq!(soundex("Robert"), soundex("Rupert"));
//! assert_eq!(metaphone("Thompson"), "TMSN");
//! assert!(match_rating_comparison("Smith", "Smyth"));
//! assert_eq!(stem("running"), "run");
//! ```
//!
//! ## Features
//!
//! - `serialization`: `serde` derives on the runtime-selectable configuration
//!   types ([`Algorithm`](distance::Algorithm), [`Similarity`](similarity::Similarity),
//!   [`JaroWinkler`](similarity::JaroWinkler), [`Encoder`](phonetic::Encoder))
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`] at `debug` and `trace` level.
//! The library never installs a subscriber.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chars;
pub mod distance;
pub mod error;
pub mod phonetic;
pub mod similarity;
pub mod stemmer;

pub use error::{Error, Result};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::{
        damerau_levenshtein_distance, hamming_distance, hamming_distance_padded,
        levenshtein_distance, true_damerau_levenshtein_distance, Algorithm,
    };
    pub use crate::error::{Error, Result};
    pub use crate::phonetic::{
        match_rating_codex, match_rating_compare, match_rating_comparison, metaphone, nysiis,
        nysiis_truncated, soundex, Encoder, MatchRating,
    };
    pub use crate::similarity::{jaro_distance, jaro_winkler, JaroWinkler, Similarity};
    pub use crate::stemmer::{stem, Stemmer};
}
