//! Per-call cursor state and the Porter rewrite steps.
//!
//! A [`Word`] borrows the caller's bytes for one stemming call. `end` is the
//! logical length of the word; `stem_end` marks where the suffix most
//! recently matched by [`Word::ends`] begins. Replacements are written in
//! place and never extend past the word's original length.

/// Whether `b[i]` is a consonant.
///
/// `y` is a consonant at the start of the word or after a vowel, and a vowel
/// after a consonant, so a run of `y`s alternates.
pub(crate) fn is_consonant(b: &[u8], i: usize) -> bool {
    match b[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => {
            let mut run_start = i;
            while run_start > 0 && b[run_start - 1] == b'y' {
                run_start -= 1;
            }
            let first_is_consonant =
                run_start == 0 || matches!(b[run_start - 1], b'a' | b'e' | b'i' | b'o' | b'u');
            if (i - run_start) % 2 == 0 {
                first_is_consonant
            } else {
                !first_is_consonant
            }
        }
        _ => true,
    }
}

/// Number of vowel-consonant sequences in `b`, i.e. `m` in `[C](VC)^m[V]`.
pub(crate) fn measure(b: &[u8]) -> usize {
    let len = b.len();
    let mut i = 0;
    let mut m = 0;

    while i < len && is_consonant(b, i) {
        i += 1;
    }
    loop {
        while i < len && !is_consonant(b, i) {
            i += 1;
        }
        if i >= len {
            return m;
        }
        while i < len && is_consonant(b, i) {
            i += 1;
        }
        m += 1;
    }
}

/// Whether `b[..=i]` ends consonant-vowel-consonant and the final consonant
/// is not `w`, `x` or `y`.
pub(crate) fn cvc(b: &[u8], i: usize) -> bool {
    if i < 2 || !is_consonant(b, i) || is_consonant(b, i - 1) || !is_consonant(b, i - 2) {
        return false;
    }
    !matches!(b[i], b'w' | b'x' | b'y')
}

/// `(suffix, replacement)` pairs for step 2, applied when `m > 0`.
const STEP2_RULES: &[(&[u8], &[u8])] = &[
    (b"ational", b"ate"),
    (b"tional", b"tion"),
    (b"enci", b"ence"),
    (b"anci", b"ance"),
    (b"izer", b"ize"),
    (b"bli", b"ble"),
    (b"alli", b"al"),
    (b"entli", b"ent"),
    (b"eli", b"e"),
    (b"ousli", b"ous"),
    (b"ization", b"ize"),
    (b"ation", b"ate"),
    (b"ator", b"ate"),
    (b"alism", b"al"),
    (b"iveness", b"ive"),
    (b"fulness", b"ful"),
    (b"ousness", b"ous"),
    (b"aliti", b"al"),
    (b"iviti", b"ive"),
    (b"biliti", b"ble"),
    (b"logi", b"log"),
];

/// `(suffix, replacement)` pairs for step 3, applied when `m > 0`.
const STEP3_RULES: &[(&[u8], &[u8])] = &[
    (b"icate", b"ic"),
    (b"ative", b""),
    (b"alize", b"al"),
    (b"iciti", b"ic"),
    (b"ical", b"ic"),
    (b"ful", b""),
    (b"ness", b""),
];

/// Suffixes removed by step 4 when `m > 1`. `-ion` is handled separately.
const STEP4_SUFFIXES: &[&[u8]] = &[
    b"al", b"ance", b"ence", b"er", b"ic", b"able", b"ible", b"ant", b"ement", b"ment", b"ent",
    b"ou", b"ism", b"ate", b"iti", b"ous", b"ive", b"ize",
];

pub(crate) struct Word<'a> {
    b: &'a mut [u8],
    end: usize,
    stem_end: usize,
}

impl<'a> Word<'a> {
    pub(crate) fn new(b: &'a mut [u8]) -> Self {
        let end = b.len();
        Word {
            b,
            end,
            stem_end: end,
        }
    }

    #[inline]
    fn last(&self) -> u8 {
        self.b[self.end - 1]
    }

    /// Measure of the stem before the last matched suffix.
    #[inline]
    fn m(&self) -> usize {
        measure(&self.b[..self.stem_end])
    }

    fn vowel_in_stem(&self) -> bool {
        (0..self.stem_end).any(|i| !is_consonant(self.b, i))
    }

    /// Whether `b[i - 1..=i]` is a double consonant.
    fn double_consonant(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && is_consonant(self.b, i)
    }

    /// Check whether the word ends with `suffix`, recording where the stem
    /// ends on success.
    fn ends(&mut self, suffix: &[u8]) -> bool {
        if suffix.len() > self.end || !self.b[..self.end].ends_with(suffix) {
            return false;
        }
        self.stem_end = self.end - suffix.len();
        true
    }

    /// Replace the matched suffix with `replacement`.
    fn set_to(&mut self, replacement: &[u8]) {
        let start = self.stem_end;
        self.b[start..start + replacement.len()].copy_from_slice(replacement);
        self.end = start + replacement.len();
    }

    /// Replace the matched suffix if the stem has a positive measure.
    fn replace_if_measured(&mut self, replacement: &[u8]) {
        if self.m() > 0 {
            self.set_to(replacement);
        }
    }

    /// Run every step and return the new logical length.
    pub(crate) fn stem(mut self) -> usize {
        if self.end <= 2 {
            return self.end;
        }

        self.step1ab();
        self.trace("1ab");
        if self.end > 1 {
            self.step1c();
            self.trace("1c");
            self.step2();
            self.trace("2");
            self.step3();
            self.trace("3");
            self.step4();
            self.trace("4");
            self.step5();
            self.trace("5");
        }
        self.end
    }

    fn trace(&self, step: &'static str) {
        tracing::trace!(
            step,
            word = %String::from_utf8_lossy(&self.b[..self.end]),
            "porter step"
        );
    }

    /// Plurals, `-ed` and `-ing`.
    ///
    /// ```text
    /// caresses -> caress    ponies -> poni    cats -> cat
    /// feed -> feed          agreed -> agree   plastered -> plaster
    /// motoring -> motor     hopping -> hop    filing -> file
    /// ```
    fn step1ab(&mut self) {
        if self.last() == b's' {
            if self.ends(b"sses") {
                self.end -= 2;
            } else if self.ends(b"ies") {
                self.set_to(b"i");
            } else if self.b[self.end - 2] != b's' {
                self.end -= 1;
            }
        }

        if self.ends(b"eed") {
            if self.m() > 0 {
                self.end -= 1;
            }
        } else if (self.ends(b"ed") || self.ends(b"ing")) && self.vowel_in_stem() {
            self.end = self.stem_end;
            if self.ends(b"at") {
                self.set_to(b"ate");
            } else if self.ends(b"bl") {
                self.set_to(b"ble");
            } else if self.ends(b"iz") {
                self.set_to(b"ize");
            } else if self.double_consonant(self.end - 1) {
                if !matches!(self.b[self.end - 1], b'l' | b's' | b'z') {
                    self.end -= 1;
                }
            } else if self.m() == 1 && cvc(self.b, self.end - 1) {
                self.stem_end = self.end;
                self.set_to(b"e");
            }
        }
    }

    /// Terminal `y` becomes `i` when the stem has a vowel.
    fn step1c(&mut self) {
        if self.ends(b"y") && self.vowel_in_stem() {
            let last = self.end - 1;
            self.b[last] = b'i';
        }
    }

    /// Double suffixes map to single ones (`-ization` -> `-ize`).
    fn step2(&mut self) {
        if let Some(&(_, replacement)) = STEP2_RULES.iter().find(|(suffix, _)| self.ends(suffix)) {
            self.replace_if_measured(replacement);
        }
    }

    /// `-ic-`, `-full`, `-ness` and similar.
    fn step3(&mut self) {
        if let Some(&(_, replacement)) = STEP3_RULES.iter().find(|(suffix, _)| self.ends(suffix)) {
            self.replace_if_measured(replacement);
        }
    }

    /// Remove `-ant`, `-ence` and similar in context `m > 1`.
    fn step4(&mut self) {
        let matched = STEP4_SUFFIXES.iter().any(|suffix| self.ends(suffix))
            || (self.ends(b"ion")
                && self.stem_end > 0
                && matches!(self.b[self.stem_end - 1], b's' | b't'));
        if matched && self.m() > 1 {
            self.end = self.stem_end;
        }
    }

    /// Remove a final `-e` and reduce `-ll` when `m > 1`.
    fn step5(&mut self) {
        self.stem_end = self.end;
        if self.last() == b'e' {
            let m = self.m();
            if m > 1 || (m == 1 && !cvc(self.b, self.end - 2)) {
                self.end -= 1;
            }
        }
        if self.last() == b'l' && self.double_consonant(self.end - 1) && self.m() > 1 {
            self.end -= 1;
        }
    }
}
