//! Regenerating the misspellings of an existing corpus.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::corpus::{load_json, save_json, CombinedFile, CorpusLayout, WordEntry};
use crate::error::{Result, WordcraftError};

use super::Synthesize;

/// Backup label for the combined file before misspellings are replaced.
pub const IMPROVE_BACKUP_LABEL: &str = "pre_improve";

/// One entry whose misspellings changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Improvement {
    pub word: String,
    pub before: Vec<String>,
    pub after: Vec<String>,
}

/// Outcome of regenerating misspellings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImproveReport {
    pub entries: usize,
    pub changed: usize,
    /// First few changes, for display.
    pub samples: Vec<Improvement>,
    pub backup: Option<PathBuf>,
}

/// Replace every entry's misspellings with fresh ones from `synth`.
///
/// Entries are matched by their existing spelling; the list is only counted
/// as changed when the new set differs from the old one.
pub fn improve_entries(
    words: &mut [WordEntry],
    synth: &mut dyn Synthesize,
    sample_size: usize,
) -> ImproveReport {
    let mut report = ImproveReport {
        entries: words.len(),
        ..ImproveReport::default()
    };

    for (i, entry) in words.iter_mut().enumerate() {
        if entry.correct_spelling.is_empty() {
            continue;
        }
        let after = synth.synthesize(&entry.correct_spelling);
        let before = std::mem::replace(&mut entry.misspellings, after);

        if before.iter().map(String::as_str).collect::<HashSet<_>>()
            != entry.misspelling_set()
        {
            report.changed += 1;
            if report.samples.len() < sample_size {
                report.samples.push(Improvement {
                    word: entry.correct_spelling.clone(),
                    before,
                    after: entry.misspellings.clone(),
                });
            }
        }
        if (i + 1) % 100 == 0 {
            tracing::debug!(processed = i + 1, of = report.entries, "improving");
        }
    }

    report
}

/// Load the combined file, back it up, regenerate misspellings and save.
pub fn improve_corpus(
    layout: &CorpusLayout,
    synth: &mut dyn Synthesize,
    sample_size: usize,
) -> Result<ImproveReport> {
    let loaded = load_json::<CombinedFile>(layout.combined())?;
    if loaded.doc.words.is_empty() {
        return Err(WordcraftError::EmptyData(format!(
            "'{}' contains no words",
            loaded.path.display()
        )));
    }
    tracing::info!(words = loaded.doc.words.len(), synthesizer = synth.name(), "improving misspellings");

    let backup = loaded.backup_to(layout.combined_backup(IMPROVE_BACKUP_LABEL))?;

    let mut combined = loaded.doc;
    let mut report = improve_entries(&mut combined.words, synth, sample_size);
    combined.refresh_count();
    save_json(layout.combined(), &combined)?;

    tracing::info!(changed = report.changed, of = report.entries, "misspellings improved");
    report.backup = Some(backup);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::MisspellingGenerator;

    #[test]
    fn test_improve_entries_uses_table() {
        let mut words = vec![
            WordEntry::new("necessary", vec!["necessery".into()]),
            WordEntry::new("garden", vec![]),
        ];
        let mut synth = MisspellingGenerator::with_seed(5);
        let report = improve_entries(&mut words, &mut synth, 5);

        assert_eq!(report.entries, 2);
        assert_eq!(report.changed, 2);
        assert_eq!(words[0].misspellings, vec!["neccessary", "necesary"]);
        assert_eq!(report.samples[0].before, vec!["necessery"]);
        assert_eq!(words[1].misspellings.len(), 2);
    }

    #[test]
    fn test_unchanged_set_not_counted() {
        let mut words = vec![WordEntry::new(
            "necessary",
            vec!["necesary".into(), "neccessary".into()],
        )];
        let report = improve_entries(&mut words, &mut MisspellingGenerator::with_seed(1), 5);
        assert_eq!(report.changed, 0);
        assert!(report.samples.is_empty());
    }

    #[test]
    fn test_improve_corpus_backs_up_original() {
        let dir = tempfile::tempdir().unwrap();
        let layout = CorpusLayout::new(dir.path());
        save_json(
            layout.combined(),
            &CombinedFile::new(vec![WordEntry::new("calendar", vec!["calender".into()])]),
        )
        .unwrap();
        let original = std::fs::read(layout.combined()).unwrap();

        let report = improve_corpus(&layout, &mut MisspellingGenerator::with_seed(2), 3).unwrap();

        let backup = report.backup.unwrap();
        assert_eq!(backup, layout.combined_backup(IMPROVE_BACKUP_LABEL));
        assert_eq!(std::fs::read(backup).unwrap(), original);
        let saved = load_json::<CombinedFile>(layout.combined()).unwrap().doc;
        assert_eq!(saved.total_count, 1);
        assert_eq!(saved.words[0].misspellings.len(), 2);
    }
}
