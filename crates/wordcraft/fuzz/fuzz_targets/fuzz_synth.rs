//! Fuzz target for both synthesizers.
//!
//! Arbitrary text (including non-ASCII and empty input) must never panic,
//! and the input itself must never come back as a misspelling.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wordcraft::synth::{MisspellingGenerator, SimpleSynthesizer};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let seed = data.iter().fold(0u64, |acc, &b| acc.wrapping_mul(31).wrapping_add(b as u64));

    let realistic = MisspellingGenerator::with_seed(seed).generate(input);
    assert!(realistic.len() <= 2);
    assert!(!realistic.contains(&input.to_lowercase()));

    let simple = SimpleSynthesizer::new().generate(input);
    assert!(simple.len() <= 3);
});
