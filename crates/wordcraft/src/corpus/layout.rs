//! File names inside the data directory.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Resolves every corpus file relative to one data directory.
///
/// ```text
/// assets/data/
/// ├── words_dictionary.json        # raw word -> flag mapping
/// ├── words_level1.json ... 5      # per-tier files
/// ├── words_level1_backup.json     # pre-validation snapshots
/// ├── words_combined.json          # combined corpus
/// └── words_combined_backup.json   # pre-scrub snapshot
/// ```
#[derive(Debug, Clone)]
pub struct CorpusLayout {
    data_dir: PathBuf,
    dictionary_file: String,
}

impl CorpusLayout {
    /// Layout rooted at `data_dir` with the default dictionary file name.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            dictionary_file: "words_dictionary.json".to_string(),
        }
    }

    /// Override the raw dictionary file name.
    pub fn with_dictionary_file(mut self, name: impl Into<String>) -> Self {
        self.dictionary_file = name.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The raw word -> flag mapping consumed by ingestion.
    pub fn dictionary(&self) -> PathBuf {
        self.data_dir.join(&self.dictionary_file)
    }

    /// Tier file for `level`.
    pub fn tier(&self, level: u8) -> PathBuf {
        self.data_dir.join(format!("words_level{}.json", level))
    }

    /// Pre-validation snapshot of a tier file.
    pub fn tier_backup(&self, level: u8) -> PathBuf {
        backup_path(&self.tier(level), "backup")
    }

    /// The combined corpus.
    pub fn combined(&self) -> PathBuf {
        self.data_dir.join("words_combined.json")
    }

    /// Snapshot of the combined corpus taken before a job rewrites it.
    pub fn combined_backup(&self, label: &str) -> PathBuf {
        backup_path(&self.combined(), label)
    }

    /// Snapshot of the remote collection taken before publishing.
    pub fn remote_snapshot(&self, collection: &str, at: DateTime<Utc>) -> PathBuf {
        self.data_dir.join(format!(
            "remote_{}_{}.json",
            collection,
            at.format("%Y-%m-%dT%H-%M-%S")
        ))
    }
}

impl Default for CorpusLayout {
    fn default() -> Self {
        Self::new("assets/data")
    }
}

/// `dir/name.json` -> `dir/name_<label>.json`.
pub fn backup_path(path: &Path, label: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let parent = path.parent().unwrap_or(Path::new("."));
    parent.join(format!("{}_{}.json", stem, label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_tier_paths() {
        let layout = CorpusLayout::new("data");
        assert_eq!(layout.tier(3).to_string_lossy(), "data/words_level3.json");
        assert_eq!(
            layout.tier_backup(3).to_string_lossy(),
            "data/words_level3_backup.json"
        );
    }

    #[test]
    fn test_combined_backup_label() {
        let layout = CorpusLayout::new("data");
        assert_eq!(
            layout.combined_backup("backup").to_string_lossy(),
            "data/words_combined_backup.json"
        );
    }

    #[test]
    fn test_remote_snapshot_name() {
        let layout = CorpusLayout::new("data");
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        assert_eq!(
            layout.remote_snapshot("words", at).to_string_lossy(),
            "data/remote_words_2024-03-01T12-30-05.json"
        );
    }
}
