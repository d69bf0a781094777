//! Orthographic and phonetic rewrite rules, grouped into families.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A family of related rewrites. At most one rule per family contributes
/// to a word's misspellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Sound-alike spellings (`ph` -> `f`).
    Phonetic,
    /// One vowel written as another.
    Vowel,
    /// Dropping a letter that is not pronounced.
    Silent,
    /// Doubling a single letter or undoubling a pair.
    Double,
    /// Confusing word endings (`able` -> `ible`).
    Suffix,
    /// Confusing word beginnings (`dis` -> `mis`).
    Prefix,
    /// Two neighbouring letters swapped.
    Transpose,
    /// A vowel inserted at a random spot, or deleted.
    Addition,
}

impl Family {
    /// Get a short label for this family.
    pub fn label(&self) -> &'static str {
        match self {
            Family::Phonetic => "phonetic",
            Family::Vowel => "vowel",
            Family::Silent => "silent",
            Family::Double => "double",
            Family::Suffix => "suffix",
            Family::Prefix => "prefix",
            Family::Transpose => "transpose",
            Family::Addition => "addition",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A string transform that may or may not apply to a word.
pub trait Transform {
    /// The family this transform belongs to.
    fn family(&self) -> Family;

    /// Produce a candidate misspelling, or `None` if the rule does not match.
    fn apply(&self, word: &str, rng: &mut fastrand::Rng) -> Option<String>;
}

/// A single `(from, to)` substring rewrite interpreted according to its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub family: Family,
    pub from: &'static str,
    pub to: &'static str,
}

impl Rule {
    pub const fn new(family: Family, from: &'static str, to: &'static str) -> Self {
        Self { family, from, to }
    }
}

impl Transform for Rule {
    fn family(&self) -> Family {
        self.family
    }

    fn apply(&self, word: &str, rng: &mut fastrand::Rng) -> Option<String> {
        match self.family {
            Family::Phonetic | Family::Vowel | Family::Silent | Family::Transpose => {
                replace_first(word, self.from, self.to)
            }
            Family::Double => {
                // `from` is the single letter; `to` its doubled form.
                if word.contains(self.to) {
                    replace_first(word, self.to, self.from)
                } else {
                    replace_first(word, self.from, self.to)
                }
            }
            Family::Suffix => word
                .strip_suffix(self.from)
                .map(|stem| format!("{}{}", stem, self.to)),
            Family::Prefix => word
                .strip_prefix(self.from)
                .map(|rest| format!("{}{}", self.to, rest)),
            Family::Addition => {
                if self.from.is_empty() {
                    if word.len() <= 2 {
                        return None;
                    }
                    let pos = rng.usize(0..=word.len());
                    if !word.is_char_boundary(pos) {
                        return None;
                    }
                    let mut out = String::with_capacity(word.len() + self.to.len());
                    out.push_str(&word[..pos]);
                    out.push_str(self.to);
                    out.push_str(&word[pos..]);
                    Some(out)
                } else {
                    replace_first(word, self.from, "")
                }
            }
        }
    }
}

fn replace_first(word: &str, from: &str, to: &str) -> Option<String> {
    if from.is_empty() || !word.contains(from) {
        return None;
    }
    Some(word.replacen(from, to, 1))
}

const PHONETIC: &[(&str, &str)] = &[
    ("ph", "f"), ("c", "k"), ("th", "f"), ("qu", "kw"), ("kw", "qu"),
    ("ch", "sh"), ("wh", "w"), ("kn", "n"), ("wr", "r"), ("mb", "m"),
    ("gh", "h"), ("ck", "k"), ("tch", "ch"), ("dg", "j"), ("ti", "sh"),
    ("ci", "sh"), ("si", "sh"), ("ss", "s"), ("ll", "l"), ("ff", "f"),
    ("zz", "z"), ("tt", "t"), ("pp", "p"), ("bb", "b"), ("dd", "d"),
    ("gg", "g"), ("mm", "m"), ("nn", "n"), ("rr", "r"),
];

const VOWEL: &[(&str, &str)] = &[
    ("a", "e"), ("e", "a"), ("i", "y"), ("y", "i"), ("o", "u"), ("u", "o"),
    ("a", "o"), ("e", "i"), ("i", "e"), ("o", "a"), ("u", "a"), ("y", "e"),
];

const SILENT: &[(&str, &str)] = &[
    ("b", ""), ("k", ""), ("w", ""), ("h", ""), ("l", ""), ("t", ""),
];

const DOUBLE: &[(&str, &str)] = &[
    ("b", "bb"), ("c", "cc"), ("d", "dd"), ("f", "ff"), ("g", "gg"),
    ("l", "ll"), ("m", "mm"), ("n", "nn"), ("p", "pp"), ("r", "rr"),
    ("s", "ss"), ("t", "tt"), ("z", "zz"),
];

const SUFFIX: &[(&str, &str)] = &[
    ("ing", "in"), ("ed", "t"), ("er", "a"), ("ly", "ley"), ("ful", "full"),
    ("able", "ible"), ("ible", "able"), ("tion", "shun"), ("sion", "shun"),
    ("ture", "cher"), ("sure", "sher"), ("ous", "us"), ("ious", "us"),
    ("al", "el"), ("el", "al"), ("le", "el"), ("el", "le"),
];

const PREFIX: &[(&str, &str)] = &[
    ("un", "in"), ("in", "un"), ("dis", "mis"), ("mis", "dis"),
    ("re", "ri"), ("pre", "pri"), ("pro", "pra"), ("con", "com"),
    ("com", "con"), ("en", "in"), ("em", "im"),
];

const TRANSPOSE: &[(&str, &str)] = &[
    ("th", "ht"), ("er", "re"), ("te", "et"), ("on", "no"), ("an", "na"),
    ("st", "ts"), ("ar", "ra"), ("le", "el"), ("se", "es"), ("ne", "en"),
    ("at", "ta"), ("it", "ti"), ("is", "si"), ("or", "ro"), ("al", "la"),
    ("de", "ed"), ("re", "er"), ("we", "ew"), ("me", "em"), ("he", "eh"),
    ("as", "sa"), ("in", "ni"), ("to", "ot"), ("of", "fo"), ("be", "eb"),
];

const ADDITION: &[(&str, &str)] = &[
    ("", "e"), ("", "a"), ("", "i"), ("", "o"), ("", "u"), ("", "y"),
    ("e", ""), ("a", ""), ("i", ""), ("o", ""), ("u", ""), ("y", ""),
];

/// The full rule library, in declaration order.
pub fn default_rules() -> Vec<Rule> {
    let families: [(Family, &[(&'static str, &'static str)]); 8] = [
        (Family::Phonetic, PHONETIC),
        (Family::Vowel, VOWEL),
        (Family::Silent, SILENT),
        (Family::Double, DOUBLE),
        (Family::Suffix, SUFFIX),
        (Family::Prefix, PREFIX),
        (Family::Transpose, TRANSPOSE),
        (Family::Addition, ADDITION),
    ];

    families
        .into_iter()
        .flat_map(|(family, pairs)| {
            pairs
                .iter()
                .map(move |&(from, to)| Rule::new(family, from, to))
        })
        .collect()
}
