//! Match Rating Approach (Western Airlines, 1977).
//!
//! Names are reduced to a codex of at most six characters, and two codices
//! are compared by stripping the characters they agree on and checking the
//! leftovers against a similarity threshold that depends on their combined
//! length.

use std::fmt;

use crate::chars::{is_vowel, to_upper_chars, CharBuf};

/// Maximum length of a codex; longer codices keep their first and last
/// three characters.
pub const CODEX_MAX_LEN: usize = 6;

/// Codices whose lengths differ by this much or more cannot be compared.
const MAX_LENGTH_DIFFERENCE: usize = 3;

/// Outcome of a Match Rating comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRating {
    /// The names are phonetically equivalent
    Match,
    /// The names were compared and found different
    NoMatch,
    /// The codices are empty or too different in length to be rated
    Incomparable,
}

impl MatchRating {
    /// Whether this outcome is a match. `Incomparable` is not.
    pub fn is_match(self) -> bool {
        self == MatchRating::Match
    }
}

impl fmt::Display for MatchRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchRating::Match => "match",
            MatchRating::NoMatch => "no match",
            MatchRating::Incomparable => "incomparable",
        };
        f.write_str(name)
    }
}

fn codex_chars(input: &str) -> CharBuf {
    let mut codex = CharBuf::new();
    let mut prev = None;
    for (i, c) in to_upper_chars(input).into_iter().enumerate() {
        let keep = c != ' ' && ((i == 0 && is_vowel(c)) || (!is_vowel(c) && prev != Some(c)));
        if keep {
            codex.push(c);
        }
        prev = Some(c);
    }

    if codex.len() > CODEX_MAX_LEN {
        let half = CODEX_MAX_LEN / 2;
        let tail_start = codex.len() - half;
        codex.drain(half..tail_start);
    }
    codex
}

pub(crate) fn match_rating_codex_into(input: &str, key: &mut String) {
    key.extend(codex_chars(input));
}

/// Compute the Match Rating codex of a name.
///
/// Vowels are dropped unless they start the name, spaces are dropped and
/// runs of the same consonant collapse. Codices longer than six characters
/// keep the first three and last three.
///
/// # Example
///
/// ```rust
/// use libstrmatch::phonetic::match_rating_codex;
///
/// assert_eq!(match_rating_codex("Byrne"), "BYRN");
/// assert_eq!(match_rating_codex("Catherine"), "CTHRN");
/// ```
pub fn match_rating_codex(input: &str) -> String {
    let mut key = String::with_capacity(CODEX_MAX_LEN);
    match_rating_codex_into(input, &mut key);
    key
}

/// Minimum similarity rating required for a match, by combined codex length.
#[inline]
fn minimum_rating(combined_len: usize) -> usize {
    match combined_len {
        0..=4 => 5,
        5..=7 => 4,
        8..=11 => 3,
        _ => 2,
    }
}

/// Drop the position-wise equal characters of two sequences, returning the
/// leftovers of each side.
fn strip_common<I, J>(left: I, right: J) -> (CharBuf, CharBuf)
where
    I: IntoIterator<Item = char>,
    J: IntoIterator<Item = char>,
{
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut left_rest = CharBuf::new();
    let mut right_rest = CharBuf::new();
    loop {
        match (left.next(), right.next()) {
            (None, None) => break,
            (a, b) if a == b => {}
            (a, b) => {
                left_rest.extend(a);
                right_rest.extend(b);
            }
        }
    }
    (left_rest, right_rest)
}

/// Compare two names with the Match Rating Approach.
///
/// Returns [`MatchRating::Incomparable`] when either codex is empty or the
/// codex lengths differ by three or more.
///
/// # Example
///
/// ```rust
/// use libstrmatch::phonetic::{match_rating_compare, MatchRating};
///
/// assert_eq!(match_rating_compare("Smith", "Smyth"), MatchRating::Match);
/// assert_eq!(match_rating_compare("Jones", "Johnson"), MatchRating::NoMatch);
/// assert_eq!(match_rating_compare("", "Smith"), MatchRating::Incomparable);
/// ```
pub fn match_rating_compare(a: &str, b: &str) -> MatchRating {
    let codex_a = codex_chars(a);
    let codex_b = codex_chars(b);

    if codex_a.is_empty()
        || codex_b.is_empty()
        || codex_a.len().abs_diff(codex_b.len()) >= MAX_LENGTH_DIFFERENCE
    {
        tracing::debug!(
            left_len = codex_a.len(),
            right_len = codex_b.len(),
            "match rating codices are not comparable"
        );
        return MatchRating::Incomparable;
    }

    let minimum = minimum_rating(codex_a.len() + codex_b.len());

    let (left, right) = strip_common(codex_a, codex_b);
    let (left, right) = strip_common(left.into_iter().rev(), right.into_iter().rev());
    let unmatched = left.len().max(right.len());

    if CODEX_MAX_LEN.saturating_sub(unmatched) >= minimum {
        MatchRating::Match
    } else {
        MatchRating::NoMatch
    }
}

/// Whether two names match under the Match Rating Approach.
///
/// Incomparable names do not match.
///
/// ```rust
/// use libstrmatch::phonetic::match_rating_comparison;
///
/// assert!(match_rating_comparison("Smith", "Smyth"));
/// assert!(!match_rating_comparison("Jones", "Johnson"));
/// ```
pub fn match_rating_comparison(a: &str, b: &str) -> bool {
    match_rating_compare(a, b).is_match()
}
