//! Heuristic filter deciding which dictionary keys are usable game words.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// PATTERNS
// =============================================================================

static LOWERCASE_LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+$").unwrap());

/// Shapes that are almost never real words. A single repeated letter is
/// checked separately since `regex` has no backreferences, and length
/// bounds come from [`FilterConfig`].
static NONSENSE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^[aeiou]{2,}$",                                          // all vowels
        r"^[bcdfghjklmnpqrstvwxyz]{4,}$",                          // all consonants
        r"^[aeiou][bcdfghjklmnpqrstvwxyz][aeiou]$",                // vowel-consonant-vowel
        r"^[bcdfghjklmnpqrstvwxyz][aeiou][bcdfghjklmnpqrstvwxyz]$", // consonant-vowel-consonant
        r"^[aeiou]{3,}[bcdfghjklmnpqrstvwxyz]*$",                  // vowel-heavy start
        r"^[bcdfghjklmnpqrstvwxyz]*[aeiou]{3,}$",                  // vowel-heavy end
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static HAS_VOWEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]").unwrap());
static HAS_CONSONANT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[bcdfghjklmnpqrstvwxyz]").unwrap());

/// Five-letter words must alternate consonant-vowel-consonant-vowel-consonant.
static FIVE_LETTER_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[bcdfghjklmnpqrstvwxyz][aeiou][bcdfghjklmnpqrstvwxyz][aeiou][bcdfghjklmnpqrstvwxyz]$")
        .unwrap()
});

/// Function words that make poor spelling challenges.
const STOPLIST: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "can", "must", "shall",
];

/// Common words accepted without further heuristics.
static COMMON_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "about", "after", "again", "could", "every", "first", "found", "great",
        "house", "large", "might", "never", "other", "place", "right", "small",
        "sound", "still", "their", "there", "these", "think", "three", "under",
        "water", "where", "which", "world", "would", "write", "before", "better",
        "between", "change", "family", "father", "friend", "ground", "letter",
        "mother", "myself", "number", "people", "picture", "should", "something",
        "through", "together", "without", "always", "around", "because",
        "country", "course", "during", "enough", "example", "follow", "happen",
        "important", "interest", "little", "moment", "nothing", "perhaps",
        "person", "question", "really", "second", "sometimes", "another",
        "language", "mountain", "remember", "sentence", "understand",
        "different", "everything", "knowledge", "necessary", "beautiful",
    ]
    .into_iter()
    .collect()
});

// =============================================================================
// FILTER
// =============================================================================

/// Length and ratio bounds for accepted words.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Shortest accepted word.
    pub min_len: usize,
    /// Longest accepted word.
    pub max_len: usize,
    /// Lowest accepted vowel:consonant ratio.
    pub min_vowel_ratio: f64,
    /// Highest accepted vowel:consonant ratio.
    pub max_vowel_ratio: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_len: 5,
            max_len: 15,
            min_vowel_ratio: 0.2,
            max_vowel_ratio: 3.0,
        }
    }
}

/// Decides whether a raw dictionary key is a usable game word.
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    config: FilterConfig,
}

impl WordFilter {
    /// Create a filter with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with custom bounds.
    pub fn with_config(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Normalize a raw key and return it if it passes every check.
    pub fn accept(&self, raw: &str) -> Option<String> {
        let word = raw.trim().to_lowercase();
        self.is_good_word(&word).then_some(word)
    }

    /// Whether an already-normalized word is suitable for the game.
    pub fn is_good_word(&self, word: &str) -> bool {
        if !self.within_length(word) {
            return false;
        }
        if !LOWERCASE_LETTERS.is_match(word) {
            return false;
        }
        if STOPLIST.contains(&word) {
            return false;
        }
        self.looks_english(word)
    }

    fn within_length(&self, word: &str) -> bool {
        (self.config.min_len..=self.config.max_len).contains(&word.chars().count())
    }

    /// Heuristic "this could be an English word" predicate.
    pub fn looks_english(&self, word: &str) -> bool {
        if COMMON_WORDS.contains(word) {
            return true;
        }

        if NONSENSE_PATTERNS.iter().any(|p| p.is_match(word)) || is_single_letter_run(word) {
            return false;
        }

        let (vowels, consonants) = count_letters(word);
        if vowels > 0 && consonants > 0 {
            let ratio = vowels as f64 / consonants as f64;
            if ratio < self.config.min_vowel_ratio || ratio > self.config.max_vowel_ratio {
                return false;
            }
        }

        if !self.within_length(word) || !HAS_VOWEL.is_match(word) || !HAS_CONSONANT.is_match(word) {
            return false;
        }

        if word.len() == 5 && !FIVE_LETTER_SHAPE.is_match(word) {
            return false;
        }

        true
    }
}

/// `aaa`, `bbbb`, ... (three or more of one letter).
fn is_single_letter_run(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => word.len() >= 3 && chars.all(|c| c == first),
        None => false,
    }
}

/// Count `aeiou` vowels and consonants (`y` counts as a consonant here).
fn count_letters(word: &str) -> (usize, usize) {
    word.chars().fold((0, 0), |(v, c), ch| match ch {
        'a' | 'e' | 'i' | 'o' | 'u' => (v + 1, c),
        'a'..='z' => (v, c + 1),
        _ => (v, c),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_words() {
        let filter = WordFilter::new();
        for word in ["garden", "planet", "mountain", "rational", "wonderful"] {
            assert!(filter.is_good_word(word), "{} rejected", word);
        }
    }

    #[test]
    fn test_length_bounds() {
        let filter = WordFilter::new();
        assert!(!filter.is_good_word("cat"));
        assert!(!filter.is_good_word("tree"));
        assert!(!filter.is_good_word("incomprehensibilities"));
    }

    #[test]
    fn test_length_bounds_follow_config() {
        let wide = WordFilter::with_config(FilterConfig {
            min_len: 4,
            max_len: 20,
            ..FilterConfig::default()
        });
        assert!(wide.is_good_word("bake"));
        assert!(wide.is_good_word("internationalization"));
        assert!(!wide.is_good_word("cat"));

        let narrow = WordFilter::with_config(FilterConfig {
            min_len: 6,
            max_len: 8,
            ..FilterConfig::default()
        });
        assert!(!narrow.is_good_word("lemon"));
        assert!(narrow.is_good_word("garden"));
        assert!(!narrow.is_good_word("wonderful"));
    }

    #[test]
    fn test_rejects_non_letters() {
        let filter = WordFilter::new();
        assert!(!filter.is_good_word("don't"));
        assert!(!filter.is_good_word("well-known"));
        assert!(!filter.is_good_word("abc123de"));
        assert!(!filter.is_good_word("Garden"));
    }

    #[test]
    fn test_accept_normalizes() {
        let filter = WordFilter::new();
        assert_eq!(filter.accept("  Garden ").as_deref(), Some("garden"));
        assert_eq!(filter.accept("x"), None);
    }

    #[test]
    fn test_stoplist() {
        let filter = WordFilter::new();
        assert!(!filter.is_good_word("should"));
        assert!(!filter.is_good_word("would"));
        assert!(!filter.is_good_word("being"));
    }

    #[test]
    fn test_nonsense_shapes() {
        let filter = WordFilter::new();
        assert!(!filter.looks_english("aaaaaa"));
        assert!(!filter.looks_english("bcdfgh"));
        assert!(!filter.looks_english("aeiouu"));
        assert!(!filter.looks_english("zzzzzz"));
    }

    #[test]
    fn test_vowel_ratio() {
        let filter = WordFilter::new();
        // 1 vowel : 8 consonants
        assert!(!filter.looks_english("strengths"));
        // 6 vowels : 1 consonant
        assert!(!filter.looks_english("aeaebia"));
    }

    #[test]
    fn test_five_letter_shape() {
        let filter = WordFilter::new();
        assert!(filter.is_good_word("lemon"));
        assert!(filter.is_good_word("tiger"));
        assert!(!filter.is_good_word("plant"));
        // Common words skip the shape rule.
        assert!(filter.is_good_word("house"));
    }

    #[test]
    fn test_single_letter_run() {
        assert!(is_single_letter_run("aaa"));
        assert!(!is_single_letter_run("aa"));
        assert!(!is_single_letter_run("aab"));
    }
}
