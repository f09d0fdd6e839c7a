//! New York State Identification and Intelligence System (NYSIIS) encoding.
//!
//! NYSIIS rewrites a name in three passes:
//!
//! 1. Prefix and suffix rewrites on the whole name (`MAC` → `MCC`,
//!    `-DT` → `-D`, ...).
//! 2. A left-to-right translation of every character after the first,
//!    emitting one or two key characters per step.
//! 3. Cleanup of the key's tail (`S`, `AY`, `A`).
//!
//! The raw key is unbounded; [`nysiis_truncated`] gives the traditional
//! six-character comparison form.

use crate::chars::{is_vowel, to_upper_chars, CharBuf};

/// Key length of the traditional truncated NYSIIS form.
pub const NYSIIS_TRUNCATED_LEN: usize = 6;

/// Key characters produced by one translation step.
#[derive(Debug, Clone, Copy)]
enum Piece {
    One(char),
    Two(char, char),
}

impl Piece {
    #[inline]
    fn last(self) -> char {
        match self {
            Piece::One(c) | Piece::Two(_, c) => c,
        }
    }

    #[inline]
    fn push_onto(self, key: &mut String) {
        match self {
            Piece::One(c) => key.push(c),
            Piece::Two(a, b) => {
                key.push(a);
                key.push(b);
            }
        }
    }
}

#[inline]
fn starts_with(word: &[char], prefix: &str) -> bool {
    word.len() >= prefix.len() && prefix.chars().zip(word).all(|(p, &c)| p == c)
}

#[inline]
fn ends_with(word: &[char], suffix: &str) -> bool {
    word.len() >= suffix.len()
        && suffix
            .chars()
            .zip(&word[word.len() - suffix.len()..])
            .all(|(s, &c)| s == c)
}

fn rewrite_prefix(word: &mut CharBuf) {
    if starts_with(word, "MAC") {
        word[1] = 'C';
    } else if starts_with(word, "KN") {
        word.remove(0);
    } else if starts_with(word, "K") {
        word[0] = 'C';
    } else if starts_with(word, "PH") || starts_with(word, "PF") {
        word[1] = 'F';
        word[0] = 'F';
    } else if starts_with(word, "SCH") {
        word[1] = 'S';
        word[2] = 'S';
    }
}

fn rewrite_suffix(word: &mut CharBuf) {
    let replacement = if ends_with(word, "IE") || ends_with(word, "EE") {
        'Y'
    } else if ["DT", "RT", "RD", "NT", "ND"]
        .iter()
        .any(|suffix| ends_with(word, suffix))
    {
        'D'
    } else {
        return;
    };
    word.truncate(word.len() - 2);
    word.push(replacement);
}

/// Translate `word[i]`, returning the emitted piece and how many extra
/// input characters it consumed.
///
/// `prev_key` is the last character emitted by the previous step, whether or
/// not it was appended to the key.
fn translate(word: &[char], i: usize, prev_key: char) -> (Piece, usize) {
    let c = word[i];
    let prev = word[i - 1];
    let next = word.get(i + 1).copied();

    match c {
        'E' if next == Some('V') => (Piece::Two('A', 'F'), 1),
        _ if is_vowel(c) => (Piece::One('A'), 0),
        'Q' => (Piece::One('G'), 0),
        'Z' => (Piece::One('S'), 0),
        'M' => (Piece::One('N'), 0),
        'K' if next == Some('N') => (Piece::One('N'), 0),
        'K' => (Piece::One('C'), 0),
        'S' if next == Some('C') && word.get(i + 2) == Some(&'H') => (Piece::Two('S', 'S'), 2),
        'P' if next == Some('H') => (Piece::One('F'), 1),
        'H' if !is_vowel(prev) || next.map_or(true, |n| !is_vowel(n)) => {
            let replacement = if is_vowel(prev) { 'A' } else { prev_key };
            (Piece::One(replacement), 0)
        }
        'W' if is_vowel(prev) => (Piece::One('A'), 0),
        _ => (Piece::One(c), 0),
    }
}

fn clean_tail(key: &mut String) {
    if key.ends_with('S') && key != "S" {
        key.pop();
    }
    if key.ends_with("AY") {
        key.truncate(key.len() - 2);
        key.push('Y');
    }
    if key.ends_with('A') && key != "A" {
        key.pop();
    }
}

pub(crate) fn nysiis_into(input: &str, key: &mut String) {
    let mut word = to_upper_chars(input);
    if word.is_empty() {
        return;
    }

    rewrite_prefix(&mut word);
    rewrite_suffix(&mut word);

    let start = key.len();
    let first = word[0];
    key.push(first);

    let mut prev_key = first;
    let mut i = 1;
    while i < word.len() {
        let (piece, skip) = translate(&word, i, prev_key);
        if key[start..].chars().last() != Some(piece.last()) {
            piece.push_onto(key);
        }
        prev_key = piece.last();
        i += 1 + skip;
    }

    let mut encoded = key.split_off(start);
    clean_tail(&mut encoded);
    key.push_str(&encoded);
}

/// Truncate `key` to at most `max_len` characters.
pub(crate) fn truncate_chars(key: &mut String, max_len: usize) {
    if let Some((idx, _)) = key.char_indices().nth(max_len) {
        key.truncate(idx);
    }
}

/// Encode a name with NYSIIS.
///
/// Returns the full, untruncated key. The empty string encodes to the empty
/// key.
///
/// # Example
///
/// ```rust
/// use libstrmatch::phonetic::nysiis;
///
/// assert_eq!(nysiis("Knight"), "NAGT");
/// assert_eq!(nysiis("Macintosh"), "MCANT");
/// ```
pub fn nysiis(input: &str) -> String {
    let mut key = String::with_capacity(input.len());
    nysiis_into(input, &mut key);
    key
}

/// Encode a name with NYSIIS and keep at most `max_len` characters of the
/// key.
///
/// Pass [`NYSIIS_TRUNCATED_LEN`] for the traditional six-character form.
pub fn nysiis_truncated(input: &str, max_len: usize) -> String {
    let mut key = nysiis(input);
    truncate_chars(&mut key, max_len);
    key
}
