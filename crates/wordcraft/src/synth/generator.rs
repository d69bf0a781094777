//! Realistic misspelling generator: curated table first, then shuffled rule
//! families with rejection sampling.

use std::collections::HashSet;

use super::rules::{default_rules, Family, Transform};
use super::table::known_misspellings;
use super::{Synthesize, MIN_MISSPELLING_LEN, VOWELS};

/// Number of misspellings the generator aims for.
pub const TARGET_MISSPELLINGS: usize = 2;

/// Generates misspellings people plausibly make.
///
/// # Example
///
/// ```
/// use wordcraft::synth::{MisspellingGenerator, Synthesize};
///
/// let mut generator = MisspellingGenerator::with_seed(42);
/// assert_eq!(generator.synthesize("necessary"), vec!["neccessary", "necesary"]);
///
/// let out = generator.synthesize("garden");
/// assert_eq!(out.len(), 2);
/// assert!(out.iter().all(|m| m != "garden"));
/// ```
pub struct MisspellingGenerator {
    rules: Vec<Box<dyn Transform + Send + Sync>>,
    rng: fastrand::Rng,
    use_table: bool,
}

impl MisspellingGenerator {
    /// Create a generator with the default rule library and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Create a generator with a fixed seed (deterministic output).
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    /// Create a generator with the given RNG.
    pub fn with_rng(rng: fastrand::Rng) -> Self {
        let rules = default_rules()
            .into_iter()
            .map(|r| Box::new(r) as Box<dyn Transform + Send + Sync>)
            .collect();
        Self {
            rules,
            rng,
            use_table: true,
        }
    }

    /// Add a custom transform to the rule library.
    pub fn with_transform(mut self, transform: impl Transform + Send + Sync + 'static) -> Self {
        self.rules.push(Box::new(transform));
        self
    }

    /// Skip the curated table and always use the rule families.
    pub fn without_table(mut self) -> Self {
        self.use_table = false;
        self
    }

    /// Generate misspellings for `word`.
    pub fn generate(&mut self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();

        if self.use_table {
            if let Some(known) = known_misspellings(&word) {
                return known;
            }
        }

        let mut order: Vec<usize> = (0..self.rules.len()).collect();
        self.rng.shuffle(&mut order);

        let mut out: Vec<String> = Vec::with_capacity(TARGET_MISSPELLINGS);
        let mut used: HashSet<Family> = HashSet::new();

        for idx in order {
            if out.len() >= TARGET_MISSPELLINGS {
                break;
            }
            let rule = &self.rules[idx];
            if used.contains(&rule.family()) {
                continue;
            }
            if let Some(candidate) = rule.apply(&word, &mut self.rng) {
                if accept(&word, &candidate, &out) {
                    tracing::trace!(word = %word, family = %rule.family(), candidate = %candidate, "accepted");
                    out.push(candidate);
                    used.insert(rule.family());
                }
            }
        }

        if out.len() < TARGET_MISSPELLINGS {
            vowel_fallback(&word, &mut out, TARGET_MISSPELLINGS);
        }

        out.truncate(TARGET_MISSPELLINGS);
        out
    }
}

impl Default for MisspellingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesize for MisspellingGenerator {
    fn synthesize(&mut self, word: &str) -> Vec<String> {
        self.generate(word)
    }

    fn name(&self) -> &str {
        "realistic"
    }
}

fn accept(word: &str, candidate: &str, so_far: &[String]) -> bool {
    candidate != word
        && candidate.chars().count() >= MIN_MISSPELLING_LEN
        && !so_far.iter().any(|c| c == candidate)
}

/// Swap vowels position by position until `target` candidates exist.
///
/// At each vowel position only the first alternative vowel that yields a new
/// candidate is taken.
pub(crate) fn vowel_fallback(word: &str, out: &mut Vec<String>, target: usize) {
    let chars: Vec<char> = word.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if out.len() >= target {
            break;
        }
        if !VOWELS.contains(&c) {
            continue;
        }
        for &v in VOWELS.iter().filter(|&&v| v != c) {
            let mut candidate = chars.clone();
            candidate[i] = v;
            let candidate: String = candidate.into_iter().collect();
            if accept(word, &candidate, out) {
                out.push(candidate);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::rules::Rule;

    #[test]
    fn test_curated_word_short_circuits() {
        let mut generator = MisspellingGenerator::with_seed(1);
        assert_eq!(generator.generate("necessary"), vec!["neccessary", "necesary"]);
        assert_eq!(generator.generate("Necessary"), vec!["neccessary", "necesary"]);
    }

    #[test]
    fn test_two_distinct_candidates_for_ordinary_words() {
        for seed in 0..50 {
            let mut generator = MisspellingGenerator::with_seed(seed);
            for word in ["garden", "plastic", "window", "mountain", "consider"] {
                let out = generator.generate(word);
                assert_eq!(out.len(), 2, "{} with seed {}", word, seed);
                assert_ne!(out[0], out[1]);
                assert!(out.iter().all(|m| m != word && m.len() >= 3));
            }
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = MisspellingGenerator::with_seed(99).generate("solution");
        let b = MisspellingGenerator::with_seed(99).generate("solution");
        assert_eq!(a, b);
    }

    #[test]
    fn test_vowel_fallback_when_no_rule_matches() {
        // Only a rule that never matches: every candidate comes from the fallback.
        let mut generator = MisspellingGenerator::with_seed(3).without_table();
        generator.rules =
            vec![Box::new(Rule::new(Family::Prefix, "zzz", "y")) as Box<dyn Transform + Send + Sync>];

        assert_eq!(generator.generate("banana"), vec!["benana", "banena"]);
    }

    #[test]
    fn test_custom_transform_is_used() {
        struct Shout;
        impl Transform for Shout {
            fn family(&self) -> Family {
                Family::Phonetic
            }
            fn apply(&self, word: &str, _rng: &mut fastrand::Rng) -> Option<String> {
                Some(format!("{}x", word))
            }
        }

        let mut generator = MisspellingGenerator::with_seed(5).without_table();
        generator.rules.clear();
        let mut generator = generator.with_transform(Shout);
        let out = generator.generate("kettle");
        assert_eq!(out[0], "kettlex");
    }
}
