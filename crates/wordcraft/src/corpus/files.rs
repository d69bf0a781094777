//! On-disk document shapes: per-tier files and the combined corpus.

use serde::{Deserialize, Serialize};

use super::entry::WordEntry;

/// A single difficulty tier (`words_level{N}.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierFile {
    pub words: Vec<WordEntry>,
    pub level: u8,
    pub count: usize,

    /// Word count before validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_count: Option<usize>,

    /// Words the dictionary service rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_count: Option<usize>,

    /// Words whose lookup stayed indeterminate (kept).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_errors: Option<usize>,
}

impl TierFile {
    /// Create a tier document; `count` follows the word list.
    pub fn new(level: u8, words: Vec<WordEntry>) -> Self {
        Self {
            count: words.len(),
            words,
            level,
            original_count: None,
            invalid_count: None,
            api_errors: None,
        }
    }
}

/// The combined corpus (`words_combined.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombinedFile {
    pub words: Vec<WordEntry>,
    #[serde(default)]
    pub total_count: usize,
}

impl CombinedFile {
    /// Create a combined document; `total_count` follows the word list.
    pub fn new(words: Vec<WordEntry>) -> Self {
        Self {
            total_count: words.len(),
            words,
        }
    }

    /// Recompute `total_count` after the word list changed.
    pub fn refresh_count(&mut self) {
        self.total_count = self.words.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_file_omits_validation_counts_until_set() {
        let tier = TierFile::new(2, vec![WordEntry::new("garden", vec![])]);
        let json = serde_json::to_value(&tier).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["level"], 2);
        assert!(json.get("original_count").is_none());
        assert!(json.get("api_errors").is_none());
    }

    #[test]
    fn test_combined_file_reads_validation_shaped_input() {
        let json = r#"{
            "words": [
                {"correctSpelling": "garden", "misspellings": ["gardin"], "difficulty": 2, "definition": "a plot"}
            ],
            "total_count": 1
        }"#;
        let combined: CombinedFile = serde_json::from_str(json).unwrap();
        assert_eq!(combined.words.len(), 1);
        assert_eq!(combined.words[0].definition, "a plot");
    }
}
