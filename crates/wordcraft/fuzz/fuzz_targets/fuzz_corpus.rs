//! Fuzz target for corpus parsing and scrubbing.
//!
//! Any combined file that parses must survive a scrub with zero remaining
//! collisions.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wordcraft::corpus::CombinedFile;
use wordcraft::scrub::{find_collisions, scrub};

fuzz_target!(|data: &[u8]| {
    if let Ok(mut corpus) = serde_json::from_slice::<CombinedFile>(data) {
        let report = scrub(&mut corpus.words);
        assert!(report.verified);
        assert!(find_collisions(&corpus.words).is_clean());
    }
});
