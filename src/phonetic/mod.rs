//! Phonetic encoders and comparison.
//!
//! Each encoder reduces a string to a key such that similar-sounding
//! (English) names share a key:
//!
//! - [`soundex`] - American Soundex, four-character keys (`R163`)
//! - [`metaphone`] - rule-table Metaphone, unbounded keys (`TMSN`)
//! - [`nysiis`] / [`nysiis_truncated`] - NYSIIS (`NAGT`)
//! - [`match_rating_codex`] - Match Rating Approach codex (`SMTH`)
//!
//! [`match_rating_comparison`] compares two names directly rather than by
//! key equality. [`Encoder`] selects an encoder at runtime.
//!
//! # Usage
//!
//! ```rust
//! use libstrmatch::phonetic::{soundex, metaphone, nysiis, match_rating_comparison};
//!
//! assert_eq!(soundex("Robert"), soundex("Rupert"));
//! assert_eq!(metaphone("Thompson"), "TMSN");
//! assert!(nysiis("Knight").starts_with('N'));
//! assert!(match_rating_comparison("Smith", "Smyth"));
//! ```
//!
//! Case folding is ASCII-only. Characters outside `A-Z` pass through
//! Soundex and NYSIIS unchanged and are dropped by Metaphone.

mod encoder;
mod match_rating;
pub mod metaphone;
mod nysiis;
mod soundex;

pub use encoder::Encoder;
pub use match_rating::{
    match_rating_codex, match_rating_compare, match_rating_comparison, MatchRating, CODEX_MAX_LEN,
};
pub use metaphone::metaphone;
pub use nysiis::{nysiis, nysiis_truncated, NYSIIS_TRUNCATED_LEN};
pub use soundex::{soundex, SOUNDEX_LEN};
