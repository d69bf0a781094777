//! Scrub and check jobs over the combined file.

use std::path::PathBuf;

use crate::corpus::{load_json, save_json, CombinedFile, CorpusLayout};
use crate::error::{Result, WordcraftError};

use super::{find_collisions, scrub, CollisionReport, ScrubReport};

/// Backup label for the combined file before a scrub.
pub const SCRUB_BACKUP_LABEL: &str = "backup";

/// What the scrub job did.
#[derive(Debug, Clone)]
pub enum ScrubOutcome {
    /// No collisions; nothing was written.
    Clean(CollisionReport),
    /// Collisions were removed and the file rewritten.
    Scrubbed {
        before: CollisionReport,
        report: ScrubReport,
        backup: PathBuf,
    },
}

/// Read-only collision scan of the combined file.
pub fn check_corpus(layout: &CorpusLayout) -> Result<CollisionReport> {
    let combined = load_json::<CombinedFile>(layout.combined())?.doc;
    let report = find_collisions(&combined.words);
    tracing::info!(
        entries = report.entries,
        checked = report.misspellings_checked,
        collisions = report.collisions.len(),
        "duplicate check"
    );
    Ok(report)
}

/// Remove colliding misspellings from the combined file.
///
/// The original file is backed up before anything is rewritten. If the
/// post-scrub self-check still finds collisions the job fails and the
/// combined file is left untouched.
pub fn scrub_corpus(layout: &CorpusLayout) -> Result<ScrubOutcome> {
    let loaded = load_json::<CombinedFile>(layout.combined())?;
    if loaded.doc.words.is_empty() {
        return Err(WordcraftError::EmptyData(format!(
            "'{}' contains no words",
            loaded.path.display()
        )));
    }

    let before = find_collisions(&loaded.doc.words);
    if before.is_clean() {
        tracing::info!(entries = before.entries, "no collisions found");
        return Ok(ScrubOutcome::Clean(before));
    }
    for collision in &before.collisions {
        tracing::debug!(word = %collision.word, misspelling = %collision.misspelling, "collision");
    }

    let backup = loaded.backup_to(layout.combined_backup(SCRUB_BACKUP_LABEL))?;

    let mut combined = loaded.doc;
    let report = scrub(&mut combined.words);
    if !report.verified {
        return Err(WordcraftError::Verification(format!(
            "collisions remain after removing {} misspellings",
            report.removed
        )));
    }

    combined.refresh_count();
    save_json(layout.combined(), &combined)?;

    Ok(ScrubOutcome::Scrubbed {
        before,
        report,
        backup,
    })
}
