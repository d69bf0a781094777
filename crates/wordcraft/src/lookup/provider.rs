//! Dictionary lookup trait and result types.

use serde::{Deserialize, Serialize};

/// Outcome of a single HTTP lookup attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupAttempt {
    /// The service knows the word; carries the first definition found (may be empty).
    Found(String),
    /// The service answered that the word does not exist (404).
    NotFound,
    /// The service asked us to slow down (429).
    RateLimited,
    /// Any other status code.
    ServerError(u16),
    /// The request never produced a response.
    Network(String),
}

/// Final classification of a word after retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// Confirmed by the dictionary service.
    Valid { definition: String },
    /// Confirmed unknown to the dictionary service.
    Invalid,
    /// Could not be decided; the word is kept unchanged.
    Indeterminate,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid { .. })
    }
}

/// A dictionary service reachable by word.
///
/// Implementations perform exactly one request per call; retrying and
/// pacing are handled by the caller.
pub trait DictionaryLookup {
    /// Look `word` up once.
    fn fetch(&self, word: &str) -> LookupAttempt;

    /// Get the name of this service (for logging).
    fn name(&self) -> &str;
}

impl<T: DictionaryLookup + ?Sized> DictionaryLookup for &T {
    fn fetch(&self, word: &str) -> LookupAttempt {
        (**self).fetch(word)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: DictionaryLookup + ?Sized> DictionaryLookup for Box<T> {
    fn fetch(&self, word: &str) -> LookupAttempt {
        (**self).fetch(word)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
