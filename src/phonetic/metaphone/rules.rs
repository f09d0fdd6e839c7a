//! The Metaphone production table.
//!
//! Productions are grouped by letter and must stay in this order within a
//! group: specific contexts precede the fallback for the same letter (for
//! example `c → X / _h` must precede `c → K`). Letters with no production
//! (digits, punctuation) are dropped.

use super::types::{Context, Emission, Production};

const VOWELS: &str = "aeiou";
const FRONT_VOWELS: &str = "eiy";

/// Word prefixes whose first letter is silent (`knight`, `gnome`,
/// `pneumatic`, `wright`, `aeon`).
pub const SILENT_INITIAL_PAIRS: [&str; 5] = ["kn", "gn", "pn", "wr", "ae"];

macro_rules! production {
    ($name:literal, $letter:literal, $context:expr, $emission:expr) => {
        production!($name, $letter, $context, $emission, 0)
    };
    ($name:literal, $letter:literal, $context:expr, $emission:expr, $skip:literal) => {
        Production {
            name: $name,
            letter: $letter,
            context: $context,
            emission: $emission,
            skip: $skip,
        }
    };
}

static METAPHONE_RULES: &[Production] = &[
    // Vowels are only kept at the start of a word
    production!("initial a", 'a', Context::Initial, Emission::Letter),
    production!("initial e", 'e', Context::Initial, Emission::Letter),
    production!("initial i", 'i', Context::Initial, Emission::Letter),
    production!("initial o", 'o', Context::Initial, Emission::Letter),
    production!("initial u", 'u', Context::Initial, Emission::Letter),
    // b: silent in final -mb (dumb, lamb)
    production!(
        "final mb",
        'b',
        Context::All(&[Context::After('m'), Context::Final]),
        Emission::Silent
    ),
    production!("b", 'b', Context::Anywhere, Emission::Letter),
    // c
    production!("cia", 'c', Context::Before("ia"), Emission::Key("X"), 1),
    production!("ch", 'c', Context::Before("h"), Emission::Key("X"), 1),
    production!("soft c", 'c', Context::BeforeAny(FRONT_VOWELS), Emission::Key("S"), 1),
    production!("hard c", 'c', Context::Anywhere, Emission::Key("K")),
    // d
    production!(
        "dge",
        'd',
        Context::BeforeThenAny("g", FRONT_VOWELS),
        Emission::Key("J"),
        2
    ),
    production!("d", 'd', Context::Anywhere, Emission::Key("T")),
    // Letters that stand for themselves
    production!("f", 'f', Context::Anywhere, Emission::Letter),
    production!("j", 'j', Context::Anywhere, Emission::Letter),
    production!("l", 'l', Context::Anywhere, Emission::Letter),
    production!("m", 'm', Context::Anywhere, Emission::Letter),
    production!("n", 'n', Context::Anywhere, Emission::Letter),
    production!("r", 'r', Context::Anywhere, Emission::Letter),
    // g
    production!("soft g", 'g', Context::BeforeAny(FRONT_VOWELS), Emission::Key("J")),
    production!("silent gh", 'g', Context::BeforeThenNonVowel("h"), Emission::Silent, 1),
    production!("final gn", 'g', Context::BeforeFinal("n"), Emission::Silent),
    production!("hard g", 'g', Context::Anywhere, Emission::Key("K")),
    // h: pronounced unless it follows a vowel and precedes a consonant
    production!("initial h", 'h', Context::Initial, Emission::Letter),
    production!("h before vowel", 'h', Context::BeforeAny(VOWELS), Emission::Letter),
    production!("h after consonant", 'h', Context::AfterNonVowel, Emission::Letter),
    production!("silent h", 'h', Context::Anywhere, Emission::Silent),
    // k
    production!("ck", 'k', Context::After('c'), Emission::Silent),
    production!("k", 'k', Context::Anywhere, Emission::Letter),
    // p
    production!("ph", 'p', Context::Before("h"), Emission::Key("F"), 1),
    production!(
        "mps",
        'p',
        Context::All(&[Context::After('m'), Context::BeforeAny("st")]),
        Emission::Silent
    ),
    production!("p", 'p', Context::Anywhere, Emission::Letter),
    // q
    production!("q", 'q', Context::Anywhere, Emission::Key("K")),
    // s
    production!("sh", 's', Context::Before("h"), Emission::Key("X"), 1),
    production!("sio", 's', Context::BeforeThenAny("i", "oa"), Emission::Key("X"), 2),
    production!("s", 's', Context::Anywhere, Emission::Letter),
    // t
    production!("tio", 't', Context::BeforeThenAny("i", "oa"), Emission::Key("X")),
    production!("thom", 't', Context::Before("hom"), Emission::Key("T"), 1),
    production!("tham", 't', Context::Before("ham"), Emission::Key("T"), 1),
    production!("th", 't', Context::Before("h"), Emission::Key("0"), 1),
    production!("tch", 't', Context::Before("ch"), Emission::Silent),
    production!("t", 't', Context::Anywhere, Emission::Letter),
    // v
    production!("v", 'v', Context::Anywhere, Emission::Key("F")),
    // w
    production!(
        "initial wh",
        'w',
        Context::All(&[Context::Initial, Context::Before("h")]),
        Emission::Key("W"),
        1
    ),
    production!("w before vowel", 'w', Context::BeforeAny(VOWELS), Emission::Letter),
    production!("silent w", 'w', Context::Anywhere, Emission::Silent),
    // x
    production!(
        "initial xh",
        'x',
        Context::All(&[Context::Initial, Context::Before("h")]),
        Emission::Key("X")
    ),
    production!(
        "initial xio",
        'x',
        Context::All(&[Context::Initial, Context::BeforeThenAny("i", "oa")]),
        Emission::Key("X")
    ),
    production!("initial x", 'x', Context::Initial, Emission::Key("S")),
    production!("x", 'x', Context::Anywhere, Emission::Key("KS")),
    // y
    production!("y before vowel", 'y', Context::BeforeAny(VOWELS), Emission::Letter),
    production!("silent y", 'y', Context::Anywhere, Emission::Silent),
    // z
    production!("z", 'z', Context::Anywhere, Emission::Key("S")),
    // Word separators collapse to one space
    production!("space", ' ', Context::Anywhere, Emission::WordBreak),
];

/// The canonical Metaphone production table, in evaluation order.
pub fn metaphone_rules() -> &'static [Production] {
    METAPHONE_RULES
}

/// Productions for a single letter, in evaluation order.
pub fn productions_for(letter: char) -> impl Iterator<Item = &'static Production> {
    METAPHONE_RULES.iter().filter(move |p| p.letter == letter)
}
