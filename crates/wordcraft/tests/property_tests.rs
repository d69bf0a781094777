//! Property-based tests for the filter, the synthesizers and the scrubber.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p wordcraft --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p wordcraft --test property_tests
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

use wordcraft::corpus::{difficulty_for, WordEntry};
use wordcraft::ingest::WordFilter;
use wordcraft::scrub::{find_collisions, scrub};
use wordcraft::synth::{known_misspellings, MisspellingGenerator, SimpleSynthesizer, MIN_MISSPELLING_LEN};

// =============================================================================
// Test Strategies
// =============================================================================

/// Arbitrary printable ASCII, including spaces and capitals.
fn ascii_string() -> impl Strategy<Value = String> {
    "[ -~]{0,30}"
}

/// Lowercase words of a playable length.
fn word_like() -> impl Strategy<Value = String> {
    "[a-z]{5,15}"
}

/// Random bytes that happen to be valid UTF-8.
fn random_utf8() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..60).prop_filter_map("valid UTF-8", |bytes| String::from_utf8(bytes).ok())
}

/// A small corpus whose misspellings are drawn from the same short alphabet
/// as its words, so collisions are common.
fn corpus() -> impl Strategy<Value = Vec<WordEntry>> {
    prop::collection::vec(("[a-c]{3,4}", prop::collection::vec("[a-cA-C]{3,4}", 0..4)), 1..25).prop_map(|pairs| {
        let mut seen = HashSet::new();
        pairs
            .into_iter()
            .filter(|(word, _)| seen.insert(word.clone()))
            .map(|(word, misspellings)| WordEntry::new(word, misspellings))
            .collect()
    })
}

// =============================================================================
// Ingestion Filter Properties
// =============================================================================

mod filter_tests {
    use super::*;

    proptest! {
        /// Anything the filter accepts is a lowercase word of length 5-15.
        #[test]
        fn accepted_words_are_well_formed(input in ascii_string()) {
            let filter = WordFilter::new();
            if let Some(word) = filter.accept(&input) {
                prop_assert!((5..=15).contains(&word.len()), "bad length: {}", word);
                prop_assert!(word.chars().all(|c| c.is_ascii_lowercase()), "bad chars: {}", word);
            }
        }

        /// The filter never panics on arbitrary UTF-8.
        #[test]
        fn never_panics_on_random_utf8(input in random_utf8()) {
            let _ = WordFilter::new().accept(&input);
        }

        /// Acceptance ignores surrounding whitespace and case.
        #[test]
        fn accept_normalizes(word in word_like()) {
            let filter = WordFilter::new();
            let padded = format!("  {}\t", word.to_uppercase());
            prop_assert_eq!(filter.accept(&word), filter.accept(&padded));
        }

        /// Difficulty never decreases as words get longer.
        #[test]
        fn difficulty_is_monotonic(a in word_like(), b in word_like()) {
            let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
            prop_assert!(difficulty_for(&short) <= difficulty_for(&long));
            prop_assert!((1..=5).contains(&difficulty_for(&long)));
        }
    }
}

// =============================================================================
// Synthesizer Properties
// =============================================================================

mod synth_tests {
    use super::*;

    proptest! {
        /// Outside the curated table every misspelling is distinct, long
        /// enough and different from the word.
        #[test]
        fn realistic_output_is_well_formed(word in word_like(), seed in any::<u64>()) {
            prop_assume!(known_misspellings(&word).is_none());
            let out = MisspellingGenerator::with_seed(seed).generate(&word);

            prop_assert!(out.len() <= 2);
            let unique: HashSet<_> = out.iter().collect();
            prop_assert_eq!(unique.len(), out.len());
            for m in &out {
                prop_assert_ne!(m, &word);
                prop_assert!(m.len() >= MIN_MISSPELLING_LEN, "too short: {}", m);
            }
        }

        /// A word with two or more vowels always gets two misspellings.
        #[test]
        fn realistic_fills_target_when_vowels_exist(
            word in "[b-df-hj-np-tv-z]{1,4}[aeiou][b-df-hj-np-tv-z]{1,4}[aeiou][a-z]{0,5}",
            seed in any::<u64>(),
        ) {
            prop_assume!(known_misspellings(&word).is_none());
            let out = MisspellingGenerator::with_seed(seed).generate(&word);
            prop_assert_eq!(out.len(), 2, "{} -> {:?}", word, out);
        }

        /// Same seed, same output.
        #[test]
        fn realistic_is_reproducible(word in word_like(), seed in any::<u64>()) {
            let a = MisspellingGenerator::with_seed(seed).generate(&word);
            let b = MisspellingGenerator::with_seed(seed).generate(&word);
            prop_assert_eq!(a, b);
        }

        /// The simple variant yields at most three distinct misspellings, never the word.
        #[test]
        fn simple_output_is_well_formed(word in word_like()) {
            let out = SimpleSynthesizer::new().generate(&word);

            prop_assert!(out.len() <= 3);
            let unique: HashSet<_> = out.iter().collect();
            prop_assert_eq!(unique.len(), out.len());
            prop_assert!(!out.contains(&word));
        }
    }
}

// =============================================================================
// Scrubber Properties
// =============================================================================

mod scrub_tests {
    use super::*;

    proptest! {
        /// After a scrub no misspelling equals any correct spelling.
        #[test]
        fn scrub_leaves_no_collisions(mut words in corpus()) {
            let report = scrub(&mut words);
            prop_assert!(report.verified);

            let correct: HashSet<String> = words.iter().map(|w| w.key()).collect();
            for entry in &words {
                for m in &entry.misspellings {
                    prop_assert!(!correct.contains(&m.to_lowercase()), "{} still in {}", m, entry.correct_spelling);
                }
            }
        }

        /// Scrubbing twice removes nothing the second time.
        #[test]
        fn scrub_is_idempotent(mut words in corpus()) {
            scrub(&mut words);
            let snapshot = words.clone();
            let second = scrub(&mut words);

            prop_assert_eq!(second.removed, 0);
            prop_assert_eq!(words, snapshot);
        }

        /// The removal count matches what the read-only check reported.
        #[test]
        fn removed_matches_collisions(mut words in corpus()) {
            let before = find_collisions(&words);
            let report = scrub(&mut words);
            prop_assert_eq!(report.removed, before.collisions.len());
            prop_assert_eq!(report.entries_affected, before.entries_affected());
        }
    }
}
