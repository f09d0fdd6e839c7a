//! Porter suffix-stripping stemmer.
//!
//! Implements M.F. Porter, "An algorithm for suffix stripping", Program
//! 14.3 (1980), with the two departures of the reference C implementation:
//!
//! - `-bli` maps to `-ble` in step 2 (instead of `-abli` to `-able`)
//! - `-logi` maps to `-log` in step 2
//!
//! Words of one or two letters are never stemmed. Input is expected to be
//! lowercase ASCII; other bytes are treated as consonants.
//!
//! # Usage
//!
//! ```rust
//! use libstrmatch::stemmer::Stemmer;
//!
//! let mut stemmer = Stemmer::new();
//!
//! let mut buf = *b"running";
//! let len = stemmer.stem(&mut buf, 7).unwrap();
//! assert_eq!(&buf[..len], b"run");
//!
//! assert_eq!(stemmer.stem_word("generalization"), "gener");
//! ```

mod word;

use crate::error::{Error, Result};

use word::Word;

/// A reusable Porter stemmer.
///
/// Stemming takes `&mut self`, so one instance serves one thread at a time;
/// create one per thread for parallel use. Dropping the instance releases
/// its scratch buffer.
#[derive(Debug, Clone, Default)]
pub struct Stemmer {
    scratch: Vec<u8>,
}

impl Stemmer {
    /// Create a stemmer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stem `buf[..len]` in place and return the new logical length.
    ///
    /// The new length never exceeds `len`. Bytes of `buf` past `len` are not
    /// touched.
    ///
    /// # Errors
    ///
    /// [`Error::LengthOutOfBounds`] if `len` exceeds `buf.len()`.
    pub fn stem(&mut self, buf: &mut [u8], len: usize) -> Result<usize> {
        if len > buf.len() {
            tracing::debug!(len, capacity = buf.len(), "stem length exceeds buffer");
            return Err(Error::LengthOutOfBounds {
                len,
                capacity: buf.len(),
            });
        }
        Ok(Word::new(&mut buf[..len]).stem())
    }

    /// Stem a word, returning an owned string.
    ///
    /// Words containing non-ASCII characters are returned unchanged.
    pub fn stem_word(&mut self, word: &str) -> String {
        if !word.is_ascii() {
            return word.to_string();
        }
        self.scratch.clear();
        self.scratch.extend_from_slice(word.as_bytes());
        let len = Word::new(&mut self.scratch).stem();
        String::from_utf8_lossy(&self.scratch[..len]).into_owned()
    }
}

/// Stem a single word with a temporary [`Stemmer`].
///
/// ```rust
/// use libstrmatch::stemmer::stem;
///
/// assert_eq!(stem("running"), "run");
/// assert_eq!(stem("run"), "run");
/// ```
pub fn stem(word: &str) -> String {
    Stemmer::new().stem_word(word)
}

/// The Porter measure `m` of a word: the number of vowel-consonant
/// sequences in `[C](VC)^m[V]`.
///
/// ```rust
/// use libstrmatch::stemmer::measure;
///
/// assert_eq!(measure("tree"), 0);
/// assert_eq!(measure("trouble"), 1);
/// assert_eq!(measure("troubles"), 2);
/// ```
pub fn measure(word: &str) -> usize {
    word::measure(word.as_bytes())
}

/// Whether a word ends consonant-vowel-consonant with a final consonant
/// other than `w`, `x` or `y` (`hop`, but not `snow` or `box`).
pub fn ends_cvc(word: &str) -> bool {
    let bytes = word.as_bytes();
    !bytes.is_empty() && word::cvc(bytes, bytes.len() - 1)
}
