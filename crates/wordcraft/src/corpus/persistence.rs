//! Whole-file JSON load/save with byte-identical backups.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};

use crate::error::{Result, WordcraftError};

/// A parsed JSON document together with the exact bytes it came from.
///
/// Keeping the raw bytes lets a job write its backup *after* deciding a
/// mutation is needed while still producing a byte-identical copy of what
/// was read.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    /// The parsed document.
    pub doc: T,
    /// Where it was read from.
    pub path: PathBuf,
    /// SHA-256 of the raw bytes (`sha256:<hex>`).
    pub hash: String,
    raw: Vec<u8>,
}

impl<T> Loaded<T> {
    /// Write the original bytes to `backup`, verifying the copy.
    pub fn backup_to(&self, backup: impl AsRef<Path>) -> Result<PathBuf> {
        let backup = backup.as_ref();
        ensure_parent(backup)?;
        fs::write(backup, &self.raw).map_err(|e| WordcraftError::io(backup, e))?;

        let written = fs::read(backup).map_err(|e| WordcraftError::io(backup, e))?;
        if content_hash(&written) != self.hash {
            return Err(WordcraftError::Verification(format!(
                "backup '{}' does not match '{}'",
                backup.display(),
                self.path.display()
            )));
        }

        tracing::info!(source = %self.path.display(), backup = %backup.display(), "backup written");
        Ok(backup.to_path_buf())
    }
}

/// Load and parse a JSON document.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Loaded<T>> {
    let path = path.as_ref();
    let raw = fs::read(path).map_err(|e| WordcraftError::io(path, e))?;

    let doc = serde_json::from_slice(&raw).map_err(|e| {
        WordcraftError::Persistence(format!("Failed to parse '{}': {}", path.display(), e))
    })?;

    Ok(Loaded {
        doc,
        path: path.to_path_buf(),
        hash: content_hash(&raw),
        raw,
    })
}

/// Serialize a document as pretty-printed JSON, replacing the file.
pub fn save_json<T: Serialize>(path: impl AsRef<Path>, doc: &T) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let file = File::create(path).map_err(|e| WordcraftError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, doc).map_err(|e| {
        WordcraftError::Persistence(format!("Failed to write '{}': {}", path.display(), e))
    })?;
    // Dropping a BufWriter swallows the error of its final write.
    writer.flush().map_err(|e| WordcraftError::io(path, e))?;

    tracing::debug!(path = %path.display(), "saved");
    Ok(())
}

/// SHA-256 fingerprint of some bytes, formatted `sha256:<hex>`.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{:x}", hasher.finalize())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| WordcraftError::io(parent, e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CombinedFile;

    #[test]
    fn test_backup_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words_combined.json");
        // Deliberately not in serde_json's pretty format.
        let original = br#"{"words":[{"correctSpelling":"plant","misspellings":["plnat"],"difficulty":1}],"total_count":1}"#;
        fs::write(&path, original).unwrap();

        let loaded: Loaded<CombinedFile> = load_json(&path).unwrap();
        let backup = loaded.backup_to(dir.path().join("words_combined_backup.json")).unwrap();

        assert_eq!(fs::read(backup).unwrap(), original.to_vec());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_json::<CombinedFile>("does/not/exist.json").unwrap_err();
        assert!(matches!(err, WordcraftError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn test_malformed_json_is_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_json::<CombinedFile>(&path).unwrap_err();
        assert!(matches!(err, WordcraftError::Persistence(_)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_save_reports_failed_write() {
        let corpus = CombinedFile::new(vec![crate::corpus::WordEntry::new(
            "garden",
            vec!["gardin".to_string()],
        )]);
        let err = save_json("/dev/full", &corpus).unwrap_err();
        assert!(matches!(
            err,
            WordcraftError::Io { .. } | WordcraftError::Persistence(_)
        ));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/words_combined.json");
        save_json(&path, &CombinedFile::default()).unwrap();
        assert!(path.exists());
    }
}
