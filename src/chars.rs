//! Character buffers and classification helpers shared by the distance,
//! similarity and phonetic modules.
//!
//! All tests are ASCII-only: letters outside `a-z`/`A-Z` are never vowels
//! for the purposes of these algorithms.

use smallvec::SmallVec;

/// Inline capacity for per-call character buffers.
pub(crate) const INLINE_CHARS: usize = 32;

/// Character buffer used by the distance and encoding routines.
pub(crate) type CharBuf = SmallVec<[char; INLINE_CHARS]>;

/// Collect the characters of `s` into a stack-friendly buffer.
#[inline]
pub(crate) fn to_chars(s: &str) -> CharBuf {
    s.chars().collect()
}

/// Collect the characters of `s`, folded to ASCII uppercase.
#[inline]
pub(crate) fn to_upper_chars(s: &str) -> CharBuf {
    s.chars().map(|c| c.to_ascii_uppercase()).collect()
}

/// Collect the characters of `s`, folded to ASCII lowercase.
#[inline]
pub(crate) fn to_lower_chars(s: &str) -> CharBuf {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// Check if a character is one of the five English vowels, in either case.
#[inline]
pub fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U'
    )
}

/// Check if a character is an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
