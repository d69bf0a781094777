//! Whole-corpus duplicate scrubbing.
//!
//! A misspelling must never be a correct spelling anywhere in the corpus,
//! otherwise the game would mark a real word as wrong. The check needs the
//! complete set of correct spellings, so it only ever runs on a full
//! snapshot.

mod job;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::corpus::WordEntry;

pub use job::{check_corpus, scrub_corpus, ScrubOutcome, SCRUB_BACKUP_LABEL};

/// A misspelling that is also some entry's correct spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    /// The entry carrying the offending misspelling.
    pub word: String,
    /// The misspelling as stored.
    pub misspelling: String,
}

/// Read-only scan result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollisionReport {
    /// Entries scanned.
    pub entries: usize,
    /// Distinct case-folded correct spellings.
    pub unique_correct: usize,
    /// Misspellings examined.
    pub misspellings_checked: usize,
    pub collisions: Vec<Collision>,
}

impl CollisionReport {
    pub fn is_clean(&self) -> bool {
        self.collisions.is_empty()
    }

    /// Number of distinct entries with at least one collision.
    pub fn entries_affected(&self) -> usize {
        self.collisions
            .iter()
            .map(|c| c.word.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Result of a scrub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrubReport {
    /// Entries that lost at least one misspelling.
    pub entries_affected: usize,
    /// Misspellings removed in total.
    pub removed: usize,
    /// Whether the post-scrub re-scan found zero collisions.
    pub verified: bool,
}

/// Case-folded set of every correct spelling in `words`.
pub fn correct_spellings(words: &[WordEntry]) -> HashSet<String> {
    words.iter().map(WordEntry::key).collect()
}

/// Find every misspelling that equals (case-insensitively) a correct spelling.
pub fn find_collisions(words: &[WordEntry]) -> CollisionReport {
    let correct = correct_spellings(words);
    let mut report = CollisionReport {
        entries: words.len(),
        unique_correct: correct.len(),
        ..CollisionReport::default()
    };

    for entry in words {
        for misspelling in &entry.misspellings {
            report.misspellings_checked += 1;
            if correct.contains(&misspelling.to_lowercase()) {
                report.collisions.push(Collision {
                    word: entry.correct_spelling.clone(),
                    misspelling: misspelling.clone(),
                });
            }
        }
    }

    report
}

/// Remove colliding misspellings in place, then re-scan.
pub fn scrub(words: &mut [WordEntry]) -> ScrubReport {
    let correct = correct_spellings(words);
    let mut report = ScrubReport::default();

    for entry in words.iter_mut() {
        let before = entry.misspellings.len();
        entry
            .misspellings
            .retain(|m| !correct.contains(&m.to_lowercase()));
        let removed = before - entry.misspellings.len();
        if removed > 0 {
            tracing::debug!(word = %entry.correct_spelling, removed, "scrubbed");
            report.entries_affected += 1;
            report.removed += removed;
        }
    }

    report.verified = find_collisions(words).is_clean();
    tracing::info!(
        entries_affected = report.entries_affected,
        removed = report.removed,
        verified = report.verified,
        "scrub complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, misspellings: &[&str]) -> WordEntry {
        WordEntry::new(word, misspellings.iter().map(|s| s.to_string()).collect())
    }

    fn corpus() -> Vec<WordEntry> {
        vec![
            entry("quiet", &["quite", "quiett"]),
            entry("quite", &["quiet", "qwite"]),
            entry("garden", &["gardin", "Plant"]),
            entry("plant", &["plnat"]),
        ]
    }

    #[test]
    fn test_find_collisions() {
        let report = find_collisions(&corpus());
        assert_eq!(report.entries, 4);
        assert_eq!(report.unique_correct, 4);
        assert_eq!(report.misspellings_checked, 7);
        assert_eq!(report.collisions.len(), 3);
        assert_eq!(report.entries_affected(), 3);
        assert!(report.collisions.contains(&Collision {
            word: "garden".to_string(),
            misspelling: "Plant".to_string(),
        }));
    }

    #[test]
    fn test_scrub_removes_case_insensitive_matches() {
        let mut words = corpus();
        let report = scrub(&mut words);

        assert_eq!(report.removed, 3);
        assert_eq!(report.entries_affected, 3);
        assert!(report.verified);
        assert_eq!(words[0].misspellings, vec!["quiett"]);
        assert_eq!(words[2].misspellings, vec!["gardin"]);
        assert_eq!(words[3].misspellings, vec!["plnat"]);
    }

    #[test]
    fn test_scrub_is_idempotent() {
        let mut words = corpus();
        scrub(&mut words);
        let second = scrub(&mut words);
        assert_eq!(second.removed, 0);
        assert_eq!(second.entries_affected, 0);
        assert!(second.verified);
    }

    #[test]
    fn test_clean_corpus() {
        let words = vec![entry("garden", &["gardin"])];
        assert!(find_collisions(&words).is_clean());
    }
}
