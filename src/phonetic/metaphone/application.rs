//! Production matching and the Metaphone interpreter loop.
//!
//! # Functions
//!
//! - [`context_matches`] - Context satisfaction at a cursor position
//! - [`find_production`] - First production for the letter whose context holds
//! - [`apply_productions`] - Evaluate a table left to right over a word

use super::types::{Context, Emission, Production};
use crate::chars::is_vowel;

#[inline]
fn is_boundary(c: Option<&char>) -> bool {
    matches!(c, None | Some(' '))
}

/// Check whether `word[pos + 1..]` starts with `lit`, returning the index
/// just past the literal.
#[inline]
fn literal_follows(word: &[char], pos: usize, lit: &str) -> Option<usize> {
    let mut idx = pos + 1;
    for expected in lit.chars() {
        if word.get(idx) != Some(&expected) {
            return None;
        }
        idx += 1;
    }
    Some(idx)
}

/// Check if a context is satisfied at a position in a word.
///
/// # Examples
///
/// ```rust
/// use libstrmatch::phonetic::metaphone::{context_matches, Context};
///
/// let word: Vec<char> = "ghost".chars().collect();
/// assert!(context_matches(&Context::Initial, &word, 0));
/// assert!(context_matches(&Context::Before("h"), &word, 0));
/// assert!(context_matches(&Context::Final, &word, 4));
/// ```
pub fn context_matches(ctx: &Context, word: &[char], pos: usize) -> bool {
    match ctx {
        Context::Anywhere => true,
        Context::Initial => pos == 0 || word.get(pos - 1) == Some(&' '),
        Context::Final => is_boundary(word.get(pos + 1)),
        Context::Before(lit) => literal_follows(word, pos, lit).is_some(),
        Context::BeforeAny(set) => word.get(pos + 1).is_some_and(|c| set.contains(*c)),
        Context::BeforeThenAny(lit, set) => literal_follows(word, pos, lit)
            .and_then(|idx| word.get(idx))
            .is_some_and(|c| set.contains(*c)),
        Context::BeforeThenNonVowel(lit) => literal_follows(word, pos, lit)
            .is_some_and(|idx| word.get(idx).map_or(true, |c| !is_vowel(*c))),
        Context::BeforeFinal(lit) => {
            literal_follows(word, pos, lit).is_some_and(|idx| is_boundary(word.get(idx)))
        }
        Context::After(c) => pos > 0 && word[pos - 1] == *c,
        Context::AfterNonVowel => pos == 0 || !is_vowel(word[pos - 1]),
        Context::All(contexts) => contexts.iter().all(|c| context_matches(c, word, pos)),
    }
}

/// Find the first production for `word[pos]` whose context holds.
pub fn find_production<'r>(
    rules: &'r [Production],
    word: &[char],
    pos: usize,
) -> Option<&'r Production> {
    let letter = *word.get(pos)?;
    rules
        .iter()
        .filter(|p| p.letter == letter)
        .find(|p| context_matches(&p.context, word, pos))
}

/// Evaluate `rules` over a lowercase word, appending the key to `key`.
///
/// The cursor advances one character per step plus the production's
/// `skip`. A letter identical to the one after it is skipped, except `c`
/// (so `cc` in `accident` reads as `KS`). Letters without a matching
/// production emit nothing.
pub fn apply_productions(rules: &[Production], word: &[char], key: &mut String) {
    let mut pos = 0;
    while pos < word.len() {
        let letter = word[pos];

        if letter != 'c' && word.get(pos + 1) == Some(&letter) {
            pos += 1;
            continue;
        }

        let Some(production) = find_production(rules, word, pos) else {
            pos += 1;
            continue;
        };
        tracing::trace!(pos, rule = production.name, "metaphone production");

        match production.emission {
            Emission::Silent => {}
            Emission::Letter => key.push(letter.to_ascii_uppercase()),
            Emission::Key(fragment) => key.push_str(fragment),
            Emission::WordBreak => {
                if !key.is_empty() && !key.ends_with(' ') {
                    key.push(' ');
                }
            }
        }

        pos += 1 + production.skip;
    }
}
