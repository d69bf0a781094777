//! Simple rule-of-thumb misspellings used when a corpus is first ingested.

use super::generator::vowel_fallback;
use super::{Synthesize, MIN_MISSPELLING_LEN};

/// Upper bound on misspellings produced per word.
const MAX_SIMPLE_MISSPELLINGS: usize = 3;

/// Deterministic misspellings: `ie`/`ei` swaps, undoubling, final `e`
/// toggling and a vowel change when nothing else applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleSynthesizer;

impl SimpleSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Generate up to three misspellings for `word`.
    pub fn generate(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        let mut candidates: Vec<String> = Vec::new();

        if word.contains("ie") {
            candidates.push(word.replace("ie", "ei"));
        }
        if word.contains("ei") {
            candidates.push(word.replace("ei", "ie"));
        }

        if let Some(undoubled) = undouble_first(&word) {
            if undoubled.chars().count() >= MIN_MISSPELLING_LEN {
                candidates.push(undoubled);
            }
        }

        match word.strip_suffix('e') {
            Some(stem) => candidates.push(stem.to_string()),
            None => candidates.push(format!("{}e", word)),
        }

        let mut out: Vec<String> = Vec::with_capacity(MAX_SIMPLE_MISSPELLINGS);
        for candidate in candidates {
            if candidate != word && !out.contains(&candidate) {
                out.push(candidate);
            }
        }

        if out.len() < 2 {
            let target = out.len() + 1;
            vowel_fallback(&word, &mut out, target);
        }

        out.truncate(MAX_SIMPLE_MISSPELLINGS);
        out
    }
}

impl Synthesize for SimpleSynthesizer {
    fn synthesize(&mut self, word: &str) -> Vec<String> {
        self.generate(word)
    }

    fn name(&self) -> &str {
        "simple"
    }
}

/// Remove one letter of the first doubled pair, if any.
fn undouble_first(word: &str) -> Option<String> {
    let chars: Vec<char> = word.chars().collect();
    let i = chars.windows(2).position(|w| w[0] == w[1])?;
    let mut out = chars;
    out.remove(i);
    Some(out.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ie_ei_swap() {
        let out = SimpleSynthesizer::new().generate("believe");
        assert_eq!(out[0], "beleive");
        assert!(out.contains(&"believ".to_string()));
    }

    #[test]
    fn test_undouble_and_final_e() {
        let out = SimpleSynthesizer::new().generate("letter");
        assert_eq!(out, vec!["leter", "lettere"]);
    }

    #[test]
    fn test_vowel_change_when_only_one_candidate() {
        // Only the final-e rule applies; one vowel change is added.
        let out = SimpleSynthesizer::new().generate("plant");
        assert_eq!(out, vec!["plante", "plent"]);
    }

    #[test]
    fn test_never_returns_input_or_duplicates() {
        for word in ["queue", "science", "receipt", "committee", "rhythm"] {
            let out = SimpleSynthesizer::new().generate(word);
            assert!(out.len() <= 3);
            assert!(!out.iter().any(|m| m == word), "{}: {:?}", word, out);
            let mut dedup = out.clone();
            dedup.dedup();
            assert_eq!(dedup.len(), out.len());
        }
    }
}
