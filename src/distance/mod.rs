//! Edit-distance metric implementations.
//!
//! This module provides the integer-valued edit distances:
//!
//! - **Hamming**: position-wise mismatches between equal-length strings
//! - **Levenshtein**: insertions, deletions and substitutions
//! - **Damerau-Levenshtein**: Levenshtein plus adjacent transposition, in both
//!   the optimal-string-alignment form and the unrestricted form
//!
//! All functions compare strings character by character (Unicode scalar
//! values). For ASCII input this is identical to comparing bytes.

mod algorithm;

pub use algorithm::Algorithm;

use rustc_hash::FxHashMap;

use crate::chars::to_chars;
use crate::error::{Error, Result};

/// Compute the Hamming distance between two equal-length strings.
///
/// Counts the positions at which the corresponding characters differ.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if the strings have a different number
/// of characters.
///
/// # Example
///
/// ```rust
/// use libstrmatch::distance::hamming_distance;
///
/// assert_eq!(hamming_distance("karolin", "kathrin").unwrap(), 3);
/// assert!(hamming_distance("abc", "ab").is_err());
/// ```
pub fn hamming_distance(source: &str, target: &str) -> Result<usize> {
    let source_chars = to_chars(source);
    let target_chars = to_chars(target);

    if source_chars.len() != target_chars.len() {
        tracing::debug!(
            left = source_chars.len(),
            right = target_chars.len(),
            "hamming distance requested for unequal lengths"
        );
        return Err(Error::LengthMismatch {
            left: source_chars.len(),
            right: target_chars.len(),
        });
    }

    Ok(source_chars
        .iter()
        .zip(target_chars.iter())
        .filter(|(a, b)| a != b)
        .count())
}

/// Compute a lenient Hamming distance that accepts unequal lengths.
///
/// Every character of the longer string beyond the end of the shorter one
/// counts as a mismatch.
///
/// # Example
///
/// ```rust
/// use libstrmatch::distance::hamming_distance_padded;
///
/// assert_eq!(hamming_distance_padded("abc", "abd"), 1);
/// assert_eq!(hamming_distance_padded("abc", "a"), 2);
/// ```
pub fn hamming_distance_padded(source: &str, target: &str) -> usize {
    let mut source_iter = source.chars();
    let mut target_iter = target.chars();
    let mut distance = 0;

    loop {
        match (source_iter.next(), target_iter.next()) {
            (Some(a), Some(b)) => {
                if a != b {
                    distance += 1;
                }
            }
            (Some(_), None) | (None, Some(_)) => distance += 1,
            (None, None) => return distance,
        }
    }
}

/// Compute standard Levenshtein distance between two strings.
///
/// Uses dynamic programming to compute the minimum number of
/// single-character edits (insertions, deletions, substitutions)
/// required to transform `source` into `target`.
///
/// Only two rows of the matrix are kept, each sized by the shorter input.
///
/// # Example
///
/// ```rust
/// use libstrmatch::distance::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("test", "test"), 0);
/// ```
pub fn levenshtein_distance(source: &str, target: &str) -> usize {
    let mut source_chars = to_chars(source);
    let mut target_chars = to_chars(target);

    // Distance is symmetric; iterate over the longer string
    if target_chars.len() > source_chars.len() {
        std::mem::swap(&mut source_chars, &mut target_chars);
    }

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Compute Levenshtein distance with adjacent transposition support.
///
/// This is the optimal-string-alignment form of Damerau-Levenshtein: a
/// transposition of two adjacent characters costs 1, but no substring is
/// edited more than once, so `"ca"` to `"abc"` costs 3 rather than 2.
///
/// # Example
///
/// ```rust
/// use libstrmatch::distance::damerau_levenshtein_distance;
///
/// assert_eq!(damerau_levenshtein_distance("ca", "ac"), 1);
/// assert_eq!(damerau_levenshtein_distance("test", "tset"), 1);
/// ```
pub fn damerau_levenshtein_distance(source: &str, target: &str) -> usize {
    let source_chars = to_chars(source);
    let target_chars = to_chars(target);

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Need three rows for transposition
    let mut two_ago = vec![0; n + 1];
    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            if i > 1
                && j > 1
                && source_chars[i - 1] == target_chars[j - 2]
                && source_chars[i - 2] == target_chars[j - 1]
            {
                curr_row[j] = curr_row[j].min(two_ago[j - 2] + 1);
            }
        }

        // Rotate rows
        std::mem::swap(&mut two_ago, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Compute the unrestricted Damerau-Levenshtein distance.
///
/// Unlike [`damerau_levenshtein_distance`], characters may be inserted
/// between a transposed pair, which makes this a true metric
/// (`"ca"` to `"abc"` costs 2). Uses the Lowrance-Wagner recurrence with a
/// table of the last row at which each character was seen.
///
/// # Example
///
/// ```rust
/// use libstrmatch::distance::{damerau_levenshtein_distance, true_damerau_levenshtein_distance};
///
/// assert_eq!(true_damerau_levenshtein_distance("ca", "abc"), 2);
/// assert_eq!(damerau_levenshtein_distance("ca", "abc"), 3);
/// ```
pub fn true_damerau_levenshtein_distance(source: &str, target: &str) -> usize {
    let source_chars = to_chars(source);
    let target_chars = to_chars(target);

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let infinite = m + n;
    let cols = n + 2;
    let mut dist = vec![0usize; (m + 2) * cols];
    let at = |i: usize, j: usize| i * cols + j;

    dist[at(0, 0)] = infinite;
    for i in 0..=m {
        dist[at(i + 1, 0)] = infinite;
        dist[at(i + 1, 1)] = i;
    }
    for j in 0..=n {
        dist[at(0, j + 1)] = infinite;
        dist[at(1, j + 1)] = j;
    }

    // Last source row (1-based) in which each character occurred
    let mut last_row: FxHashMap<char, usize> = FxHashMap::default();

    for i in 1..=m {
        let mut last_match_col = 0;

        for j in 1..=n {
            let i1 = last_row.get(&target_chars[j - 1]).copied().unwrap_or(0);
            let j1 = last_match_col;

            let cost = if source_chars[i - 1] == target_chars[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = dist[at(i, j)] + cost;
            let insertion = dist[at(i + 1, j)] + 1;
            let deletion = dist[at(i, j + 1)] + 1;
            let transposition = dist[at(i1, j1)] + (i - i1 - 1) + 1 + (j - j1 - 1);

            dist[at(i + 1, j + 1)] = substitution
                .min(insertion)
                .min(deletion)
                .min(transposition);
        }

        last_row.insert(source_chars[i - 1], i);
    }

    dist[at(m + 1, n + 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_distance_basic() {
        assert_eq!(hamming_distance("karolin", "kathrin").unwrap(), 3);
        assert_eq!(hamming_distance("1011101", "1001001").unwrap(), 2);
        assert_eq!(hamming_distance("", "").unwrap(), 0);
        assert_eq!(hamming_distance("same", "same").unwrap(), 0);
    }

    #[test]
    fn test_hamming_distance_length_mismatch() {
        assert_eq!(
            hamming_distance("abc", "ab"),
            Err(Error::LengthMismatch { left: 3, right: 2 })
        );
        assert_eq!(
            hamming_distance("", "a"),
            Err(Error::LengthMismatch { left: 0, right: 1 })
        );
    }

    #[test]
    fn test_hamming_distance_padded() {
        assert_eq!(hamming_distance_padded("", ""), 0);
        assert_eq!(hamming_distance_padded("", "abc"), 3);
        assert_eq!(hamming_distance_padded("abcd", "abXdYZ"), 3);
        assert_eq!(hamming_distance_padded("karolin", "kathrin"), 3);
    }

    #[test]
    fn test_levenshtein_empty_sides() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "Smith"), 5);
        assert_eq!(levenshtein_distance("Smith", ""), 5);
    }

    #[test]
    fn test_levenshtein_names() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("Smith", "Smyth"), 1);
        assert_eq!(levenshtein_distance("Dixon", "Dickson"), 3);
        assert_eq!(levenshtein_distance("Dwayne", "Duane"), 2);
    }

    #[test]
    fn test_levenshtein_asymmetric_lengths() {
        // the shorter input drives the rolling row either way round
        assert_eq!(levenshtein_distance("Jonathan", "Jon"), 5);
        assert_eq!(levenshtein_distance("Jon", "Jonathan"), 5);
        assert_eq!(levenshtein_distance("a", "Alexander"), 8);
    }

    #[test]
    fn test_damerau_levenshtein_transpositions() {
        assert_eq!(damerau_levenshtein_distance("ca", "ac"), 1);
        assert_eq!(damerau_levenshtein_distance("ab", "ba"), 1);
        assert_eq!(damerau_levenshtein_distance("abc", "acb"), 1);
        assert_eq!(damerau_levenshtein_distance("", "abc"), 3);
        assert_eq!(damerau_levenshtein_distance("abc", ""), 3);
    }

    #[test]
    fn test_transposition_only_helps_damerau() {
        assert_eq!(levenshtein_distance("ca", "ac"), 2);
        assert_eq!(damerau_levenshtein_distance("ca", "ac"), 1);
        assert_eq!(levenshtein_distance("Martha", "Marhta"), 2);
        assert_eq!(damerau_levenshtein_distance("Martha", "Marhta"), 1);
        // three disjoint swaps
        assert_eq!(levenshtein_distance("abcdef", "badcfe"), 4);
        assert_eq!(damerau_levenshtein_distance("abcdef", "badcfe"), 3);
    }

    #[test]
    fn test_osa_restriction() {
        // The transposed pair cannot be edited again
        assert_eq!(damerau_levenshtein_distance("ca", "abc"), 3);
        assert_eq!(true_damerau_levenshtein_distance("ca", "abc"), 2);
    }

    #[test]
    fn test_true_damerau_levenshtein_basic() {
        assert_eq!(true_damerau_levenshtein_distance("", ""), 0);
        assert_eq!(true_damerau_levenshtein_distance("", "ab"), 2);
        assert_eq!(true_damerau_levenshtein_distance("ab", "ba"), 1);
        assert_eq!(true_damerau_levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(true_damerau_levenshtein_distance("abcdef", "abcdef"), 0);
    }

    #[test]
    fn test_unicode_support() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(damerau_levenshtein_distance("日本", "本日"), 1);
        assert_eq!(hamming_distance("日本", "日木").unwrap(), 1);
    }
}
