//! Sequential dictionary validation of the tier files.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::corpus::{load_json, save_json, CombinedFile, CorpusLayout, Loaded, TierFile, TIERS};
use crate::error::{Result, WordcraftError};
use crate::lookup::{DictionaryLookup, FreeDictionaryClient, LookupAttempt, Verdict};

use super::config::ValidateConfig;

/// Result of validating one tier document.
#[derive(Debug, Clone)]
pub struct TierValidation {
    /// The rewritten tier: valid and indeterminate words with counts filled in.
    pub file: TierFile,
    /// Words the service rejected.
    pub invalid: Vec<String>,
    /// Words kept because no verdict could be reached.
    pub indeterminate: Vec<String>,
    /// Entries without a spelling, dropped unchecked and counted as invalid.
    pub dropped: usize,
}

/// Per-tier numbers for the job report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierOutcome {
    pub level: u8,
    pub original: usize,
    pub valid: usize,
    pub invalid: usize,
    pub api_errors: usize,
    /// First few rejected words, for display.
    pub invalid_sample: Vec<String>,
    pub backup: PathBuf,
}

/// Outcome of a validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub tiers: Vec<TierOutcome>,
    /// Levels whose tier file did not exist.
    pub skipped: Vec<u8>,
    /// Words in the rebuilt combined file.
    pub combined_total: usize,
}

impl ValidationReport {
    pub fn total_invalid(&self) -> usize {
        self.tiers.iter().map(|t| t.invalid).sum()
    }

    pub fn total_api_errors(&self) -> usize {
        self.tiers.iter().map(|t| t.api_errors).sum()
    }
}

/// Confirms words against a dictionary service and backfills definitions.
pub struct Validator<L: DictionaryLookup> {
    lookup: L,
    config: ValidateConfig,
    rng: fastrand::Rng,
}

impl Validator<FreeDictionaryClient> {
    /// Validator backed by the Free Dictionary API.
    pub fn free_dictionary(config: ValidateConfig) -> Result<Self> {
        let client = FreeDictionaryClient::with_base_url(&config.base_url, config.timeout())?;
        Ok(Self::with_config(client, config))
    }
}

impl<L: DictionaryLookup> Validator<L> {
    /// Create a validator with default pacing.
    pub fn new(lookup: L) -> Self {
        Self::with_config(lookup, ValidateConfig::default())
    }

    /// Create a validator with custom pacing.
    pub fn with_config(lookup: L, config: ValidateConfig) -> Self {
        Self {
            lookup,
            config,
            rng: fastrand::Rng::new(),
        }
    }

    /// Use a seeded RNG for the request jitter.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn config(&self) -> &ValidateConfig {
        &self.config
    }

    /// Classify one word, retrying per the configured policy.
    ///
    /// A 404 is final. A 429 waits the rate-limit interval; other failures
    /// back off exponentially. Both count toward `max_attempts`, after which
    /// the word is indeterminate.
    pub fn check_word(&self, word: &str) -> Verdict {
        let word = word.to_lowercase();
        let max_attempts = self.config.max_attempts.max(1);

        for attempt in 0..max_attempts {
            let last = attempt + 1 == max_attempts;
            match self.lookup.fetch(&word) {
                LookupAttempt::Found(definition) => return Verdict::Valid { definition },
                LookupAttempt::NotFound => return Verdict::Invalid,
                LookupAttempt::RateLimited => {
                    let wait = self.config.rate_limit_wait();
                    tracing::warn!(
                        word = %word,
                        attempt = attempt + 1,
                        wait_secs = wait.as_secs(),
                        "rate limited (429)"
                    );
                    if !last {
                        pause(wait);
                    }
                }
                failure => {
                    let reason = match failure {
                        LookupAttempt::ServerError(status) => format!("status {}", status),
                        LookupAttempt::Network(msg) => msg,
                        _ => String::new(),
                    };
                    tracing::warn!(word = %word, attempt = attempt + 1, %reason, "lookup failed");
                    if !last {
                        pause(self.config.backoff(attempt));
                    }
                }
            }
        }

        tracing::warn!(word = %word, attempts = max_attempts, "no verdict, keeping word");
        Verdict::Indeterminate
    }

    /// Look up the probe word; fails unless it is confirmed valid.
    pub fn probe(&self) -> Result<String> {
        let word = &self.config.probe_word;
        tracing::info!(service = self.lookup.name(), word = %word, "probing dictionary service");

        match self.check_word(word) {
            Verdict::Valid { definition } => Ok(definition),
            Verdict::Invalid => Err(WordcraftError::Unavailable(format!(
                "'{}' answered but does not know '{}'",
                self.lookup.name(),
                word
            ))),
            Verdict::Indeterminate => Err(WordcraftError::Unavailable(format!(
                "could not reach '{}'",
                self.lookup.name()
            ))),
        }
    }

    /// Validate every word of one tier, in paced batches.
    ///
    /// Entries without a correct spelling are dropped and counted as invalid.
    pub fn validate_tier(&mut self, tier: TierFile) -> TierValidation {
        let level = tier.level;
        let original_count = tier.words.len();
        let batch_size = self.config.batch_size.max(1);
        let total_batches = original_count.div_ceil(batch_size);

        let mut kept = Vec::with_capacity(original_count);
        let mut invalid = Vec::new();
        let mut indeterminate = Vec::new();
        let mut dropped = 0;

        let mut words = tier.words.into_iter().peekable();
        let mut batch_num = 0;
        while words.peek().is_some() {
            batch_num += 1;
            let started = Utc::now();
            let (before_invalid, before_errors) = (invalid.len(), indeterminate.len());

            for mut entry in words.by_ref().take(batch_size) {
                if entry.correct_spelling.is_empty() {
                    tracing::warn!(level, "dropping entry without a spelling");
                    dropped += 1;
                    continue;
                }
                let word = entry.key();
                match self.check_word(&word) {
                    Verdict::Valid { definition } => {
                        tracing::debug!(level, word = %word, "valid");
                        entry.definition = definition;
                        kept.push(entry);
                    }
                    Verdict::Invalid => {
                        tracing::debug!(level, word = %word, "invalid");
                        invalid.push(word);
                    }
                    Verdict::Indeterminate => {
                        indeterminate.push(word);
                        kept.push(entry);
                    }
                }
                pause(self.config.request_delay(&mut self.rng));
            }

            tracing::info!(
                level,
                batch = batch_num,
                of = total_batches,
                invalid = invalid.len() - before_invalid,
                api_errors = indeterminate.len() - before_errors,
                elapsed_secs = (Utc::now() - started).num_seconds(),
                "batch complete"
            );
            if batch_num < total_batches {
                pause(self.config.batch_pause());
            }
        }

        let mut file = TierFile::new(level, kept);
        file.original_count = Some(original_count);
        file.invalid_count = Some(invalid.len() + dropped);
        file.api_errors = Some(indeterminate.len());

        TierValidation {
            file,
            invalid,
            indeterminate,
            dropped,
        }
    }

    /// Probe the service, then validate all tiers under `layout`.
    pub fn run(&mut self, layout: &CorpusLayout) -> Result<ValidationReport> {
        self.probe()?;
        self.run_tiers(layout)
    }

    /// Validate all tiers under `layout` without probing first.
    ///
    /// Each tier is backed up and rewritten as soon as it completes, then the
    /// combined file is rebuilt from the tier files in level order.
    pub fn run_tiers(&mut self, layout: &CorpusLayout) -> Result<ValidationReport> {
        if !TIERS.iter().any(|&level| layout.tier(level).exists()) {
            return Err(WordcraftError::EmptyData(format!(
                "no tier files in '{}'",
                layout.data_dir().display()
            )));
        }

        let started_at = Utc::now();
        let mut tiers = Vec::new();
        let mut skipped = Vec::new();

        for level in TIERS {
            let path = layout.tier(level);
            if !path.exists() {
                tracing::warn!(level, path = %path.display(), "tier file not found, skipping");
                skipped.push(level);
                continue;
            }

            let loaded: Loaded<TierFile> = load_json(&path)?;
            let mut tier = loaded.doc.clone();
            tier.level = level;
            tracing::info!(level, words = tier.words.len(), "validating tier");

            let result = self.validate_tier(tier);
            let backup = loaded.backup_to(layout.tier_backup(level))?;
            save_json(&path, &result.file)?;
            tracing::info!(
                level,
                valid = result.file.count - result.indeterminate.len(),
                invalid = result.invalid.len() + result.dropped,
                api_errors = result.indeterminate.len(),
                "tier saved"
            );

            tiers.push(TierOutcome {
                level,
                original: result.file.original_count.unwrap_or_default(),
                valid: result.file.count - result.indeterminate.len(),
                invalid: result.invalid.len() + result.dropped,
                api_errors: result.indeterminate.len(),
                invalid_sample: result.invalid.iter().take(10).cloned().collect(),
                backup,
            });
        }

        let combined = rebuild_combined(layout)?;

        Ok(ValidationReport {
            started_at,
            finished_at: Utc::now(),
            tiers,
            skipped,
            combined_total: combined.total_count,
        })
    }
}

/// Concatenate the existing tier files, in level order, into the combined file.
pub fn rebuild_combined(layout: &CorpusLayout) -> Result<CombinedFile> {
    let mut words = Vec::new();
    for level in TIERS {
        let path = layout.tier(level);
        if path.exists() {
            words.extend(load_json::<TierFile>(&path)?.doc.words);
        }
    }

    let combined = CombinedFile::new(words);
    save_json(layout.combined(), &combined)?;
    tracing::info!(words = combined.total_count, "combined file rebuilt");
    Ok(combined)
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
