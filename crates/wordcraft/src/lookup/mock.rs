//! Scripted dictionary lookup for testing.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::provider::{DictionaryLookup, LookupAttempt};

/// Dictionary that answers from a per-word script.
///
/// Each word can be given a queue of attempts that are replayed in order;
/// once the queue runs dry the last scripted attempt repeats. Unscripted
/// words get the fallback answer.
pub struct MockDictionary {
    scripts: Mutex<HashMap<String, VecDeque<LookupAttempt>>>,
    fallback: LookupAttempt,
    calls: AtomicUsize,
    calls_by_word: Mutex<HashMap<String, usize>>,
}

impl MockDictionary {
    /// Create a mock that knows every word, with an empty definition.
    pub fn new() -> Self {
        Self::with_fallback(LookupAttempt::Found(String::new()))
    }

    /// Create a mock answering `fallback` for unscripted words.
    pub fn with_fallback(fallback: LookupAttempt) -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            fallback,
            calls: AtomicUsize::new(0),
            calls_by_word: Mutex::new(HashMap::new()),
        }
    }

    /// Answer `word` with a definition.
    pub fn define(self, word: &str, definition: &str) -> Self {
        self.script(word, [LookupAttempt::Found(definition.to_string())])
    }

    /// Answer `word` with "not found".
    pub fn reject(self, word: &str) -> Self {
        self.script(word, [LookupAttempt::NotFound])
    }

    /// Replay `attempts` for `word` in order.
    pub fn script(self, word: &str, attempts: impl IntoIterator<Item = LookupAttempt>) -> Self {
        if let Ok(mut scripts) = self.scripts.lock() {
            scripts.insert(word.to_lowercase(), attempts.into_iter().collect());
        }
        self
    }

    /// Total number of fetches performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of fetches performed for `word`.
    pub fn calls_for(&self, word: &str) -> usize {
        self.calls_by_word
            .lock()
            .map(|m| m.get(&word.to_lowercase()).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

impl Default for MockDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryLookup for MockDictionary {
    fn fetch(&self, word: &str) -> LookupAttempt {
        let key = word.to_lowercase();
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut counts) = self.calls_by_word.lock() {
            *counts.entry(key.clone()).or_insert(0) += 1;
        }

        let Ok(mut scripts) = self.scripts.lock() else {
            return self.fallback.clone();
        };
        match scripts.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_else(|| self.fallback.clone()),
            Some(queue) => queue.front().cloned().unwrap_or_else(|| self.fallback.clone()),
            None => self.fallback.clone(),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_replays_then_repeats_last() {
        let mock = MockDictionary::new().script(
            "garden",
            [LookupAttempt::RateLimited, LookupAttempt::Found("A plot".into())],
        );
        assert_eq!(mock.fetch("garden"), LookupAttempt::RateLimited);
        assert_eq!(mock.fetch("garden"), LookupAttempt::Found("A plot".into()));
        assert_eq!(mock.fetch("Garden"), LookupAttempt::Found("A plot".into()));
        assert_eq!(mock.calls_for("garden"), 3);
    }

    #[test]
    fn test_fallback() {
        let mock = MockDictionary::with_fallback(LookupAttempt::NotFound).define("lemon", "A fruit");
        assert_eq!(mock.fetch("zzzzz"), LookupAttempt::NotFound);
        assert_eq!(mock.fetch("lemon"), LookupAttempt::Found("A fruit".into()));
        assert_eq!(mock.calls(), 2);
    }
}
