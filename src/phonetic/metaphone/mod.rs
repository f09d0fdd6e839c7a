//! Metaphone phonetic encoding.
//!
//! Metaphone maps English spelling to an approximate pronunciation key. The
//! rules are an ordered table of [`Production`]s (see [`metaphone_rules`])
//! evaluated by a small interpreter ([`apply_productions`]), so the table can
//! be inspected, tested and extended independently of cursor arithmetic.
//!
//! Key alphabet: uppercase consonants, initial vowels, `0` for "th" and a
//! single space between words.

mod application;
mod rules;
mod types;

pub use application::{apply_productions, context_matches, find_production};
pub use rules::{metaphone_rules, productions_for, SILENT_INITIAL_PAIRS};
pub use types::{Context, Emission, Production};

use crate::chars::{to_lower_chars, CharBuf};

/// Lowercase the input and drop the silent first letter of `kn`, `gn`,
/// `pn`, `wr` and `ae`.
fn normalize(input: &str) -> CharBuf {
    let mut word = to_lower_chars(input);
    let silent_initial = SILENT_INITIAL_PAIRS.iter().any(|pair| {
        let mut pair_chars = pair.chars();
        word.first().copied() == pair_chars.next() && word.get(1).copied() == pair_chars.next()
    });
    if silent_initial {
        word.remove(0);
    }
    word
}

pub(crate) fn metaphone_into(input: &str, key: &mut String) {
    let word = normalize(input);
    apply_productions(metaphone_rules(), &word, key);
}

/// Encode a string with Metaphone.
///
/// The key length is unbounded (not truncated like Soundex).
///
/// # Example
///
/// ```rust
/// use libstrmatch::phonetic::metaphone;
///
/// assert_eq!(metaphone("Thompson"), "TMSN");
/// assert_eq!(metaphone("Knight"), "NT");
/// assert_eq!(metaphone("Jellyfish"), "JLFX");
/// ```
pub fn metaphone(input: &str) -> String {
    let mut key = String::with_capacity(input.len());
    metaphone_into(input, &mut key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_keys() {
        assert_eq!(metaphone("Thompson"), "TMSN");
        assert_eq!(metaphone("Jellyfish"), "JLFX");
        assert_eq!(metaphone("Smith"), "SM0");
        assert_eq!(metaphone("Philip"), "FLP");
        assert_eq!(metaphone("Xavier"), "SFR");
    }

    #[test]
    fn test_silent_initial_letters() {
        assert_eq!(metaphone("Knight"), "NT");
        assert_eq!(metaphone("Wright"), "RT");
        assert_eq!(metaphone("gnome"), "NM");
        assert_eq!(metaphone("Aeon"), "EN");
    }

    #[test]
    fn test_initial_wh() {
        assert_eq!(metaphone("Whale"), "WL");
        assert_eq!(metaphone("White"), "WT");
    }

    #[test]
    fn test_c_variants() {
        assert_eq!(metaphone("church"), "XRX");
        assert_eq!(metaphone("city"), "ST");
        assert_eq!(metaphone("cat"), "KT");
        assert_eq!(metaphone("accident"), "AKSTNT");
    }

    #[test]
    fn test_g_variants() {
        assert_eq!(metaphone("gem"), "JM");
        assert_eq!(metaphone("sign"), "SN");
        assert_eq!(metaphone("high"), "H");
        assert_eq!(metaphone("edge"), "EJ");
        assert_eq!(metaphone("goat"), "KT");
    }

    #[test]
    fn test_th_variants() {
        assert_eq!(metaphone("Thumb"), "0M");
        assert_eq!(metaphone("Thomas"), "TMS");
        assert_eq!(metaphone("nation"), "NXN");
        assert_eq!(metaphone("watch"), "WX");
    }

    #[test]
    fn test_doubled_letters_collapse() {
        assert_eq!(metaphone("Lloyd"), "LT");
        assert_eq!(metaphone("Bell"), "BL");
    }

    #[test]
    fn test_x_variants() {
        assert_eq!(metaphone("box"), "BKS");
        assert_eq!(metaphone("Xhosa"), "XHS");
    }

    #[test]
    fn test_multiple_words() {
        assert_eq!(metaphone("Dumb  Lamb"), "TM LM");
    }

    #[test]
    fn test_empty_and_non_letters() {
        assert_eq!(metaphone(""), "");
        assert_eq!(metaphone("123"), "");
    }
}
