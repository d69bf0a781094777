//! Pacing and retry settings for dictionary validation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::lookup::DEFAULT_BASE_URL;

/// Configuration for the validation job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Words per batch.
    pub batch_size: usize,
    /// Fixed delay after every lookup, in milliseconds.
    pub request_delay_ms: u64,
    /// Upper bound of the random extra delay per lookup, in milliseconds.
    pub jitter_ms: u64,
    /// Pause between batches, in seconds.
    pub batch_pause_secs: u64,
    /// Wait after a 429 response, in seconds.
    pub rate_limit_wait_secs: u64,
    /// Lookup attempts per word, 429s included.
    pub max_attempts: u32,
    /// First backoff after a server or network error, doubled per attempt.
    pub backoff_base_secs: u64,
    /// HTTP timeout per request, in seconds.
    pub timeout_secs: u64,
    /// Lookup endpoint; the word is appended as the last path segment.
    pub base_url: String,
    /// Word looked up before a run to confirm the service works.
    pub probe_word: String,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            batch_size: 100,
            request_delay_ms: 800,
            jitter_ms: 200,
            batch_pause_secs: 3,
            rate_limit_wait_secs: 300,
            max_attempts: 3,
            backoff_base_secs: 1,
            timeout_secs: 10,
            base_url: DEFAULT_BASE_URL.to_string(),
            probe_word: "hello".to_string(),
        }
    }
}

impl ValidateConfig {
    /// Settings with every wait set to zero.
    pub fn without_delays() -> Self {
        Self {
            request_delay_ms: 0,
            jitter_ms: 0,
            batch_pause_secs: 0,
            rate_limit_wait_secs: 0,
            backoff_base_secs: 0,
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn rate_limit_wait(&self) -> Duration {
        Duration::from_secs(self.rate_limit_wait_secs)
    }

    pub fn batch_pause(&self) -> Duration {
        Duration::from_secs(self.batch_pause_secs)
    }

    /// Backoff before retrying after failed attempt number `attempt` (0-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_secs(self.backoff_base_secs.saturating_mul(1u64 << attempt.min(16)))
    }

    /// Delay after a lookup: the fixed delay plus up to `jitter_ms` extra.
    pub fn request_delay(&self, rng: &mut fastrand::Rng) -> Duration {
        let jitter = if self.jitter_ms == 0 {
            0
        } else {
            rng.u64(0..=self.jitter_ms)
        };
        Duration::from_millis(self.request_delay_ms + jitter)
    }

    /// Rough wall-clock estimate for validating `words` words.
    pub fn estimate(&self, words: usize) -> Duration {
        let per_word = self.request_delay_ms + self.jitter_ms / 2;
        let batches = words.div_ceil(self.batch_size.max(1)) as u64;
        Duration::from_millis(per_word * words as u64)
            + self.batch_pause() * batches.saturating_sub(1) as u32
    }
}
