//! Jaro and Jaro-Winkler similarity.

use smallvec::{smallvec, SmallVec};

use crate::chars::{is_digit, to_chars, INLINE_CHARS};

/// Options for Jaro-Winkler similarity.
///
/// The defaults are Winkler's published constants. The long-string
/// adjustment follows the strcmp95 reference: after the agreeing prefix of
/// length `l`, at least two more characters must match and the matches must
/// cover at least half of the remaining characters, in which case
///
/// ```text
/// score += (1 - score) * (m - l - 1) / (|a| + |b| - 2l + 2)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct JaroWinkler {
    /// Apply the additional boost for long, mostly-matching strings.
    pub long_tolerance: bool,
    /// Weight given to each character of common prefix.
    pub prefix_scale: f64,
    /// Longest prefix that earns a bonus.
    pub max_prefix: usize,
    /// Jaro score above which the prefix bonus applies.
    pub boost_threshold: f64,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self {
            long_tolerance: false,
            prefix_scale: 0.1,
            max_prefix: 4,
            boost_threshold: 0.7,
        }
    }
}

impl JaroWinkler {
    /// Options with the long-string adjustment enabled or disabled.
    pub fn with_long_tolerance(long_tolerance: bool) -> Self {
        Self {
            long_tolerance,
            ..Self::default()
        }
    }

    /// Compute Jaro-Winkler similarity with these options.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let a_chars = to_chars(a);
        let b_chars = to_chars(b);

        let Some(matching) = match_characters(&a_chars, &b_chars) else {
            return 0.0;
        };
        let mut weight = matching.jaro(a_chars.len(), b_chars.len());

        let a_len = a_chars.len();
        let b_len = b_chars.len();
        if weight <= self.boost_threshold || a_len <= 3 || b_len <= 3 {
            return weight;
        }

        let min_len = a_len.min(b_len);
        let prefix_limit = min_len.min(self.max_prefix);
        let prefix = a_chars
            .iter()
            .zip(b_chars.iter())
            .take(prefix_limit)
            .take_while(|(x, y)| x == y && !is_digit(**x))
            .count();

        if prefix > 0 {
            weight += prefix as f64 * self.prefix_scale * (1.0 - weight);
        }

        let common = matching.common;
        if self.long_tolerance
            && min_len > 4
            && common > prefix + 1
            && 2 * common >= min_len + prefix
            && !is_digit(a_chars[0])
            && !is_digit(b_chars[0])
        {
            weight += (1.0 - weight) * ((common - prefix - 1) as f64)
                / ((a_len + b_len - prefix * 2 + 2) as f64);
        }

        weight.min(1.0)
    }
}

/// Matched-character statistics shared by Jaro and Jaro-Winkler.
struct Matching {
    common: usize,
    transpositions: usize,
}

impl Matching {
    fn jaro(&self, a_len: usize, b_len: usize) -> f64 {
        let m = self.common as f64;
        (m / a_len as f64 + m / b_len as f64 + (m - self.transpositions as f64) / m) / 3.0
    }
}

/// Flag characters that match within the search window and count
/// half-transpositions. Returns `None` when nothing matches.
fn match_characters(a: &[char], b: &[char]) -> Option<Matching> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let search_range = (a.len().max(b.len()) / 2).saturating_sub(1);

    let mut a_flags: SmallVec<[bool; INLINE_CHARS]> = smallvec![false; a.len()];
    let mut b_flags: SmallVec<[bool; INLINE_CHARS]> = smallvec![false; b.len()];

    let mut common = 0;
    for (i, &ch) in a.iter().enumerate() {
        let low = i.saturating_sub(search_range);
        let high = (i + search_range).min(b.len() - 1);
        if low > high {
            continue;
        }
        for j in low..=high {
            if !b_flags[j] && b[j] == ch {
                a_flags[i] = true;
                b_flags[j] = true;
                common += 1;
                break;
            }
        }
    }

    if common == 0 {
        return None;
    }

    let mut k = 0;
    let mut half_transpositions = 0;
    for (i, &ch) in a.iter().enumerate() {
        if !a_flags[i] {
            continue;
        }
        while !b_flags[k] {
            k += 1;
        }
        if ch != b[k] {
            half_transpositions += 1;
        }
        k += 1;
    }

    Some(Matching {
        common,
        transpositions: half_transpositions / 2,
    })
}

/// Compute the Jaro similarity between two strings.
///
/// Returns a value in `[0, 1]`; `0.0` if either string is empty or no
/// characters match.
///
/// # Example
///
/// ```rust
/// use libstrmatch::similarity::jaro_distance;
///
/// assert!((jaro_distance("MARTHA", "MARHTA") - 0.9444).abs() < 1e-4);
/// assert_eq!(jaro_distance("abc", "abc"), 1.0);
/// ```
pub fn jaro_distance(a: &str, b: &str) -> f64 {
    let a_chars = to_chars(a);
    let b_chars = to_chars(b);

    match match_characters(&a_chars, &b_chars) {
        Some(matching) => matching.jaro(a_chars.len(), b_chars.len()),
        None => 0.0,
    }
}

/// Compute the Jaro-Winkler similarity between two strings.
///
/// Uses the default [`JaroWinkler`] options with the given
/// `long_tolerance` flag.
///
/// # Example
///
/// ```rust
/// use libstrmatch::similarity::jaro_winkler;
///
/// assert!((jaro_winkler("MARTHA", "MARHTA", false) - 0.9611).abs() < 1e-4);
/// ```
pub fn jaro_winkler(a: &str, b: &str, long_tolerance: bool) -> f64 {
    JaroWinkler::with_long_tolerance(long_tolerance).similarity(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_jaro_reference_values() {
        assert_close(jaro_distance("MARTHA", "MARHTA"), 0.944);
        assert_close(jaro_distance("DWAYNE", "DUANE"), 0.822);
        assert_close(jaro_distance("DIXON", "DICKSONX"), 0.767);
    }

    #[test]
    fn test_jaro_empty_and_disjoint() {
        assert_eq!(jaro_distance("", ""), 0.0);
        assert_eq!(jaro_distance("", "abc"), 0.0);
        assert_eq!(jaro_distance("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_jaro_single_char_window() {
        // Window is zero for short strings; only aligned characters match
        assert_eq!(jaro_distance("a", "a"), 1.0);
        assert_eq!(jaro_distance("ab", "ba"), 0.0);
    }

    #[test]
    fn test_jaro_winkler_reference_values() {
        assert_close(jaro_winkler("MARTHA", "MARHTA", false), 0.961);
        assert_close(jaro_winkler("DWAYNE", "DUANE", false), 0.840);
        assert_close(jaro_winkler("DIXON", "DICKSONX", false), 0.813);
    }

    #[test]
    fn test_jaro_winkler_no_bonus_below_threshold() {
        let jaro = jaro_distance("abcd", "axyz");
        assert!(jaro <= 0.7);
        assert_eq!(jaro_winkler("abcd", "axyz", false), jaro);
    }

    #[test]
    fn test_jaro_winkler_no_bonus_for_short_strings() {
        assert_eq!(jaro_winkler("abc", "abd", false), jaro_distance("abc", "abd"));
    }

    #[test]
    fn test_jaro_winkler_digit_prefix_not_rewarded() {
        assert_eq!(
            jaro_winkler("1234abcd", "1234abce", false),
            jaro_distance("1234abcd", "1234abce")
        );
    }

    #[test]
    fn test_long_tolerance_boost() {
        let a = "ABCDEFGH";
        let b = "ABCDEFHG";
        let plain = jaro_winkler(a, b, false);
        let long = jaro_winkler(a, b, true);
        assert!(long > plain);
        assert!(long <= 1.0);

        // m = 8, l = 4: boost = (1 - w) * (8 - 4 - 1) / (16 - 8 + 2)
        let expected = plain + (1.0 - plain) * 3.0 / 10.0;
        assert_close(long, expected);
        assert_close(long, 0.9825);

        // strcmp95 numerator is m - l - 1; the m - l - 2 variant scores lower
        let two_less = plain + (1.0 - plain) * 2.0 / 10.0;
        assert!(long - two_less > 1e-3);
    }

    #[test]
    fn test_long_tolerance_requires_length() {
        // min length 4 is too short for the adjustment
        assert_eq!(
            jaro_winkler("MART", "MATR", true),
            jaro_winkler("MART", "MATR", false)
        );
    }

    #[test]
    fn test_identical_strings() {
        assert_eq!(jaro_winkler("jellyfish", "jellyfish", true), 1.0);
        assert_eq!(jaro_distance("jellyfish", "jellyfish"), 1.0);
    }
}
