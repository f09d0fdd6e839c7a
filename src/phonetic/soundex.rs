//! American Soundex.

use crate::chars::to_upper_chars;

/// Length of every non-empty Soundex key.
pub const SOUNDEX_LEN: usize = 4;

/// Digit class of a letter, or `None` for vowels, `H`, `W`, `Y` and
/// non-letters.
#[inline]
fn soundex_digit(c: char) -> Option<char> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

pub(crate) fn soundex_into(input: &str, key: &mut String) {
    let chars = to_upper_chars(input);
    let Some((&first, rest)) = chars.split_first() else {
        return;
    };

    key.push(first);
    let mut count = 1;
    let mut last = soundex_digit(first);

    for &letter in rest {
        if count == SOUNDEX_LEN {
            break;
        }
        match soundex_digit(letter) {
            Some(digit) => {
                if last != Some(digit) {
                    key.push(digit);
                    count += 1;
                }
                last = Some(digit);
            }
            // H and W do not separate letters with the same code
            None if letter == 'H' || letter == 'W' => {}
            None => last = None,
        }
    }

    for _ in count..SOUNDEX_LEN {
        key.push('0');
    }
}

/// Encode a string with American Soundex.
///
/// The key is the first character (uppercased) followed by three digits.
/// Adjacent letters with the same digit collapse, also across `H`/`W`;
/// vowels separate them. Short keys are padded with `'0'`. The empty string
/// encodes to the empty key.
///
/// # Example
///
/// ```rust
/// use libstrmatch::phonetic::soundex;
///
/// assert_eq!(soundex("Robert"), "R163");
/// assert_eq!(soundex("Rupert"), "R163");
/// assert_eq!(soundex("Tymczak"), "T522");
/// ```
pub fn soundex(input: &str) -> String {
    let mut key = String::with_capacity(SOUNDEX_LEN);
    soundex_into(input, &mut key);
    key
}
