//! Dictionary ingestion: filter, tier, sample, and write the corpus files.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::corpus::{
    difficulty_for, load_json, save_json, CombinedFile, CorpusLayout, TierFile, WordEntry, TIERS,
};
use crate::error::{Result, WordcraftError};
use crate::synth::{Strategy, Synthesize};

use super::filter::{FilterConfig, WordFilter};

/// Configuration for ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Words sampled per tier; the rest are discarded.
    pub target_per_tier: usize,
    /// Shortest accepted word.
    pub min_len: usize,
    /// Longest accepted word.
    pub max_len: usize,
    /// Synthesizer used for the initial misspellings.
    pub strategy: Strategy,
    /// Fixed RNG seed for sampling and shuffling (None = random).
    pub seed: Option<u64>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            target_per_tier: 500,
            min_len: 5,
            max_len: 15,
            strategy: Strategy::Simple,
            seed: None,
        }
    }
}

/// Per-tier selection numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TierSummary {
    pub level: u8,
    /// Words that passed the filter for this tier.
    pub available: usize,
    /// Words kept after sampling.
    pub selected: usize,
}

/// Outcome of an ingestion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestReport {
    /// Dictionary keys examined.
    pub scanned: usize,
    /// Distinct words that passed the filter.
    pub accepted: usize,
    /// Keys that normalized to an already accepted word.
    pub duplicates: usize,
    pub tiers: Vec<TierSummary>,
    /// Words in the combined file.
    pub total_selected: usize,
}

/// Builds tiered word lists from a raw word -> flag mapping.
pub struct Ingestor {
    config: IngestConfig,
    filter: WordFilter,
    rng: fastrand::Rng,
}

impl Ingestor {
    /// Create an ingestor with default configuration.
    pub fn new() -> Self {
        Self::with_config(IngestConfig::default())
    }

    /// Create an ingestor with custom configuration.
    pub fn with_config(config: IngestConfig) -> Self {
        let filter = WordFilter::with_config(FilterConfig {
            min_len: config.min_len,
            max_len: config.max_len,
            ..FilterConfig::default()
        });
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self { config, filter, rng }
    }

    /// Read the dictionary from the layout and write tier and combined files.
    pub fn run(&mut self, layout: &CorpusLayout) -> Result<IngestReport> {
        let dictionary_path = layout.dictionary();
        tracing::info!(path = %dictionary_path.display(), "loading dictionary");

        let dictionary = load_json::<Map<String, Value>>(&dictionary_path)?.doc;
        if dictionary.is_empty() {
            return Err(WordcraftError::EmptyData(format!(
                "'{}' contains no words",
                dictionary_path.display()
            )));
        }
        tracing::info!(words = dictionary.len(), "dictionary loaded");

        let (tiers, mut report) = self.build(dictionary.keys().map(String::as_str));

        let mut combined = Vec::new();
        for (level, entries) in tiers {
            let path = layout.tier(level);
            save_json(&path, &TierFile::new(level, entries.clone()))?;
            tracing::info!(level, words = entries.len(), path = %path.display(), "tier saved");
            combined.extend(entries);
        }

        self.rng.shuffle(&mut combined);
        report.total_selected = combined.len();
        save_json(layout.combined(), &CombinedFile::new(combined))?;
        tracing::info!(words = report.total_selected, "combined file saved (shuffled)");

        Ok(report)
    }

    /// Filter, tier, sample and synthesize misspellings for `words`.
    ///
    /// Returns the entries for every tier (empty tiers included).
    pub fn build<'a>(
        &mut self,
        words: impl IntoIterator<Item = &'a str>,
    ) -> (BTreeMap<u8, Vec<WordEntry>>, IngestReport) {
        let mut report = IngestReport::default();
        let mut available: BTreeMap<u8, Vec<String>> =
            TIERS.iter().map(|&level| (level, Vec::new())).collect();
        let mut seen: HashSet<String> = HashSet::new();

        for raw in words {
            report.scanned += 1;
            if let Some(word) = self.filter.accept(raw) {
                if !seen.insert(word.clone()) {
                    report.duplicates += 1;
                    continue;
                }
                available.entry(difficulty_for(&word)).or_default().push(word);
                report.accepted += 1;
            }
            if report.scanned % 1000 == 0 {
                tracing::debug!(scanned = report.scanned, accepted = report.accepted, "processing");
            }
        }

        let mut synth = match self.config.seed {
            Some(seed) => self.config.strategy.build_seeded(seed),
            None => self.config.strategy.build(),
        };

        let mut tiers = BTreeMap::new();
        for (level, mut candidates) in available {
            let total = candidates.len();
            if total > self.config.target_per_tier {
                self.rng.shuffle(&mut candidates);
                candidates.truncate(self.config.target_per_tier);
            }
            tracing::info!(level, available = total, selected = candidates.len(), "tier sampled");

            report.tiers.push(TierSummary {
                level,
                available: total,
                selected: candidates.len(),
            });

            let entries = candidates
                .into_iter()
                .map(|word| {
                    let misspellings = synth.synthesize(&word);
                    WordEntry::new(word, misspellings)
                })
                .collect();
            tiers.insert(level, entries);
        }

        (tiers, report)
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(target: usize) -> Ingestor {
        Ingestor::with_config(IngestConfig {
            target_per_tier: target,
            seed: Some(11),
            ..IngestConfig::default()
        })
    }

    #[test]
    fn test_build_groups_by_length() {
        let words = ["lemon", "garden", "absolute", "wonderful", "accomplish", "accommodation", "xq"];
        let (tiers, report) = seeded(10).build(words);

        assert_eq!(report.scanned, 7);
        assert_eq!(report.accepted, 6);
        for (level, entries) in &tiers {
            assert!(entries.iter().all(|e| e.difficulty == *level));
        }
        assert_eq!(tiers[&1][0].correct_spelling, "lemon");
        assert_eq!(tiers[&5][0].correct_spelling, "accommodation");
    }

    #[test]
    fn test_sampling_caps_each_tier() {
        let words = ["garden", "planet", "window", "sister", "bottle"];
        let (tiers, report) = seeded(2).build(words);

        assert_eq!(tiers[&2].len(), 2);
        let summary = report.tiers.iter().find(|t| t.level == 2).unwrap();
        assert_eq!(summary.available, 5);
        assert_eq!(summary.selected, 2);
        for entry in &tiers[&2] {
            assert!(words.contains(&entry.correct_spelling.as_str()));
        }
    }

    #[test]
    fn test_entries_start_with_misspellings_and_no_definition() {
        let (tiers, _) = seeded(10).build(["garden"]);
        let entry = &tiers[&2][0];
        assert!(!entry.misspellings.is_empty());
        assert!(entry.definition.is_empty());
    }

    #[test]
    fn test_keys_normalizing_to_same_word_kept_once() {
        let (tiers, report) = seeded(10).build(["garden", "Garden", " garden", "planet"]);

        assert_eq!(report.scanned, 4);
        assert_eq!(report.accepted, 2);
        assert_eq!(report.duplicates, 2);
        let spellings: Vec<_> = tiers[&2].iter().map(|e| e.correct_spelling.as_str()).collect();
        assert_eq!(spellings, vec!["garden", "planet"]);
    }

    #[test]
    fn test_every_tier_present_even_when_empty() {
        let (tiers, report) = seeded(10).build(["garden"]);
        assert_eq!(tiers.len(), 5);
        assert_eq!(report.tiers.len(), 5);
    }
}
