//! Type definitions for the Metaphone production table.
//!
//! A [`Production`] pairs a letter with a [`Context`] that must hold around
//! the cursor, an [`Emission`] appended to the key when it fires, and the
//! number of extra input characters it consumes. Productions for the same
//! letter are tried in table order; the first whose context holds wins.

use std::fmt;

/// Context in which a production applies, evaluated at the cursor.
///
/// Word boundaries are the ends of the input and spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// No restriction
    Anywhere,
    /// The letter starts a word
    Initial,
    /// The letter ends a word
    Final,
    /// The characters after the letter start with this literal
    Before(&'static str),
    /// The next character is one of these
    BeforeAny(&'static str),
    /// The literal follows, then one of the given characters
    BeforeThenAny(&'static str, &'static str),
    /// The literal follows, then a non-vowel or the end of the word
    BeforeThenNonVowel(&'static str),
    /// The literal follows and ends the word
    BeforeFinal(&'static str),
    /// The previous character is this one
    After(char),
    /// The previous character is not a vowel (or there is none)
    AfterNonVowel,
    /// Every listed context holds
    All(&'static [Context]),
}

/// What a production appends to the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// Nothing; the letter is silent
    Silent,
    /// The letter itself, uppercased
    Letter,
    /// A fixed key fragment
    Key(&'static str),
    /// A single space, unless the key is empty or already ends with one
    WordBreak,
}

/// A single Metaphone rewrite: `letter / context -> emission`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Production {
    /// Human-readable name (for tracing and tests)
    pub name: &'static str,
    /// Lowercase letter at the cursor
    pub letter: char,
    /// Context that must hold at the cursor
    pub context: Context,
    /// Key fragment to append
    pub emission: Emission,
    /// Input characters consumed after the letter itself
    pub skip: usize,
}

impl Production {
    /// Upper bound on bytes this production appends to the key.
    pub fn max_emitted(&self) -> usize {
        match self.emission {
            Emission::Silent => 0,
            Emission::Letter | Emission::WordBreak => 1,
            Emission::Key(key) => key.len(),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Context::Anywhere => write!(f, "_"),
            Context::Initial => write!(f, "#_"),
            Context::Final => write!(f, "_#"),
            Context::Before(lit) => write!(f, "_{lit}"),
            Context::BeforeAny(set) => write!(f, "_[{set}]"),
            Context::BeforeThenAny(lit, set) => write!(f, "_{lit}[{set}]"),
            Context::BeforeThenNonVowel(lit) => write!(f, "_{lit}C"),
            Context::BeforeFinal(lit) => write!(f, "_{lit}#"),
            Context::After(c) => write!(f, "{c}_"),
            Context::AfterNonVowel => write!(f, "C_"),
            Context::All(contexts) => {
                for (i, ctx) in contexts.iter().enumerate() {
                    if i > 0 {
                        write!(f, " & ")?;
                    }
                    write!(f, "{ctx}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let emitted = match self.emission {
            Emission::Silent => "∅".to_string(),
            Emission::Letter => self.letter.to_ascii_uppercase().to_string(),
            Emission::Key(key) => key.to_string(),
            Emission::WordBreak => "' '".to_string(),
        };
        write!(f, "{} → {} / {}", self.letter, emitted, self.context)
    }
}
