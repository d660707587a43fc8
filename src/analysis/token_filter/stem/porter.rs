//! Porter stemming algorithm implementation.
//!
//! This follows Martin Porter's reference implementation, including its two
//! published departures from the 1980 paper (`-bli` → `-ble` and
//! `-logi` → `-log` in step 2).
//!
//! # Algorithm
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes, then terminal y → i
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and reduce -ll
//!
//! Words that contain non-ASCII characters, and words of two characters or
//! fewer, are returned unchanged.
//!
//! # Examples
//!
//! ```
//! use falcata::analysis::token_filter::stem::Stemmer;
//! use falcata::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if word.len() <= 2 || !word.is_ascii() {
            return word.to_string();
        }

        let mut state = StemState::new(word.as_bytes());
        state.step1ab();
        if state.k > 0 {
            state.step1c();
            state.step2();
            state.step3();
            state.step4();
            state.step5();
        }

        state.into_string().unwrap_or_else(|| word.to_string())
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// Working buffer for one word.
///
/// `b[0..=k]` is the current word; `j` marks the end of the stem left in
/// front of the most recently matched suffix. `j` may be -1 when a suffix
/// spans the whole word.
struct StemState {
    b: Vec<u8>,
    k: isize,
    j: isize,
}

impl StemState {
    fn new(word: &[u8]) -> Self {
        StemState {
            b: word.to_vec(),
            k: word.len() as isize - 1,
            j: 0,
        }
    }

    fn at(&self, i: isize) -> u8 {
        self.b[i as usize]
    }

    fn into_string(mut self) -> Option<String> {
        self.b.truncate((self.k + 1) as usize);
        String::from_utf8(self.b).ok()
    }

    /// True when `b[i]` is a consonant. `y` is a consonant at the start of a
    /// word or after a vowel.
    fn cons(&self, i: isize) -> bool {
        match self.at(i) {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.cons(i - 1),
            _ => true,
        }
    }

    /// The measure of `b[0..=j]`: the number of vowel-consonant sequences.
    fn m(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        loop {
            if i > self.j {
                return n;
            }
            if !self.cons(i) {
                break;
            }
            i += 1;
        }
        i += 1;
        loop {
            loop {
                if i > self.j {
                    return n;
                }
                if self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
            n += 1;
            loop {
                if i > self.j {
                    return n;
                }
                if !self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..=self.j).any(|i| !self.cons(i))
    }

    fn double_c(&self, j: isize) -> bool {
        j >= 1 && self.at(j) == self.at(j - 1) && self.cons(j)
    }

    /// True when `b[i-2..=i]` is consonant-vowel-consonant and the final
    /// consonant is not w, x or y.
    fn cvc(&self, i: isize) -> bool {
        if i < 2 || !self.cons(i) || self.cons(i - 1) || !self.cons(i - 2) {
            return false;
        }
        !matches!(self.at(i), b'w' | b'x' | b'y')
    }

    fn ends(&mut self, suffix: &str) -> bool {
        let suffix = suffix.as_bytes();
        let len = suffix.len() as isize;
        if len > self.k + 1 {
            return false;
        }
        let start = (self.k + 1 - len) as usize;
        if &self.b[start..=self.k as usize] != suffix {
            return false;
        }
        self.j = self.k - len;
        true
    }

    fn set_to(&mut self, replacement: &str) {
        let start = (self.j + 1) as usize;
        self.b.truncate(start);
        self.b.extend_from_slice(replacement.as_bytes());
        self.k = self.j + replacement.len() as isize;
    }

    fn replace_if_measured(&mut self, replacement: &str) {
        if self.m() > 0 {
            self.set_to(replacement);
        }
    }

    /// Replace the first matching suffix from `rules`, subject to m() > 0.
    fn apply_rules(&mut self, rules: &[(&str, &str)]) {
        for (suffix, replacement) in rules {
            if self.ends(suffix) {
                self.replace_if_measured(replacement);
                return;
            }
        }
    }

    /// Plurals and -ed or -ing.
    fn step1ab(&mut self) {
        if self.at(self.k) == b's' {
            if self.ends("sses") {
                self.k -= 2;
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.at(self.k - 1) != b's' {
                self.k -= 1;
            }
        }
        if self.ends("eed") {
            if self.m() > 0 {
                self.k -= 1;
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.k = self.j;
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_c(self.k) {
                self.k -= 1;
                if matches!(self.at(self.k), b'l' | b's' | b'z') {
                    self.k += 1;
                }
            } else if self.m() == 1 && self.cvc(self.k) {
                self.set_to("e");
            }
        }
    }

    /// Terminal y to i when there is another vowel in the stem.
    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            let k = self.k as usize;
            self.b[k] = b'i';
        }
    }

    /// Double suffices map to single ones.
    fn step2(&mut self) {
        let rules: &[(&str, &str)] = match self.at(self.k - 1) {
            b'a' => &[("ational", "ate"), ("tional", "tion")],
            b'c' => &[("enci", "ence"), ("anci", "ance")],
            b'e' => &[("izer", "ize")],
            b'l' => &[
                ("bli", "ble"),
                ("alli", "al"),
                ("entli", "ent"),
                ("eli", "e"),
                ("ousli", "ous"),
            ],
            b'o' => &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")],
            b's' => &[
                ("alism", "al"),
                ("iveness", "ive"),
                ("fulness", "ful"),
                ("ousness", "ous"),
            ],
            b't' => &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")],
            b'g' => &[("logi", "log")],
            _ => return,
        };
        self.apply_rules(rules);
    }

    /// -ic-, -full, -ness etc.
    fn step3(&mut self) {
        let rules: &[(&str, &str)] = match self.at(self.k) {
            b'e' => &[("icate", "ic"), ("ative", ""), ("alize", "al")],
            b'i' => &[("iciti", "ic")],
            b'l' => &[("ical", "ic"), ("ful", "")],
            b's' => &[("ness", "")],
            _ => return,
        };
        self.apply_rules(rules);
    }

    /// Drop -ant, -ence etc. in context <c>vcvc<v>.
    fn step4(&mut self) {
        let suffixes: &[&str] = match self.at(self.k - 1) {
            b'a' => &["al"],
            b'c' => &["ance", "ence"],
            b'e' => &["er"],
            b'i' => &["ic"],
            b'l' => &["able", "ible"],
            b'n' => &["ant", "ement", "ment", "ent"],
            b'o' => {
                let matched = (self.ends("ion")
                    && self.j >= 0
                    && matches!(self.at(self.j), b's' | b't'))
                    || self.ends("ou");
                if !matched {
                    return;
                }
                &[]
            }
            b's' => &["ism"],
            b't' => &["ate", "iti"],
            b'u' => &["ous"],
            b'v' => &["ive"],
            b'z' => &["ize"],
            _ => return,
        };
        if !suffixes.is_empty() && !suffixes.iter().any(|suffix| self.ends(suffix)) {
            return;
        }
        if self.m() > 1 {
            self.k = self.j;
        }
    }

    /// Remove a final -e and reduce -ll to -l when m() > 1.
    fn step5(&mut self) {
        self.j = self.k;
        if self.at(self.k) == b'e' {
            let a = self.m();
            if a > 1 || (a == 1 && !self.cvc(self.k - 1)) {
                self.k -= 1;
            }
        }
        if self.at(self.k) == b'l' && self.double_c(self.k) && self.m() > 1 {
            self.k -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("died"), "di");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("disabled"), "disabl");
        assert_eq!(stemmer.stem("measuring"), "measur");
        assert_eq!(stemmer.stem("itemization"), "item");
        assert_eq!(stemmer.stem("sensational"), "sensat");
        assert_eq!(stemmer.stem("traditional"), "tradit");
    }

    #[test]
    fn test_step1_plurals_and_participles() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("caresses"), "caress");
        assert_eq!(stemmer.stem("ponies"), "poni");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("hopping"), "hop");
        assert_eq!(stemmer.stem("happy"), "happi");
        assert_eq!(stemmer.stem("sky"), "sky");
    }

    #[test]
    fn test_later_steps() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("relational"), "relat");
        assert_eq!(stemmer.stem("conditional"), "condit");
        assert_eq!(stemmer.stem("apple"), "appl");
    }

    #[test]
    fn test_irreducible_words_are_unchanged() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("banana"), "banana");
        assert_eq!(stemmer.stem("car"), "car");
        assert_eq!(stemmer.stem("truck"), "truck");
        assert_eq!(stemmer.stem("road"), "road");
        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem("café"), "café");
    }

    #[test]
    fn test_porter_measure() {
        let measure = |word: &str| {
            let mut state = StemState::new(word.as_bytes());
            state.j = state.k;
            state.m()
        };

        assert_eq!(measure("tree"), 0);
        assert_eq!(measure("trees"), 1);
        assert_eq!(measure("trouble"), 1);
        assert_eq!(measure("troubles"), 2);
    }

    #[test]
    fn test_porter_consonant_detection() {
        let state = StemState::new(b"toy");
        assert!(state.cons(0)); // t
        assert!(!state.cons(1)); // o
        assert!(state.cons(2)); // y after a vowel

        let state = StemState::new(b"syzygy");
        assert!(!state.cons(1)); // y after a consonant
    }
}
