//! Fuzz target for WordFilter.
//!
//! Checks that the filter never panics and that anything it accepts is a
//! lowercase ASCII word within the length bounds.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wordcraft::ingest::WordFilter;

fuzz_target!(|data: &[u8]| {
    let filter = WordFilter::new();
    let input = String::from_utf8_lossy(data);

    if let Some(word) = filter.accept(&input) {
        assert!((5..=15).contains(&word.len()));
        assert!(word.bytes().all(|b| b.is_ascii_lowercase()));
    }
});
