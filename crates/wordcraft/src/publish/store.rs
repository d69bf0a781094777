//! Remote document store abstraction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::corpus::WordEntry;
use crate::error::Result;

/// Length of generated document IDs.
pub const AUTO_ID_LEN: usize = 20;

const AUTO_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Field values of a remote word document.
///
/// Every field except the spelling is optional: documents written by other
/// tools may lack any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRecord {
    #[serde(default)]
    pub correct_spelling: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub misspellings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<i64>,
}

impl RemoteRecord {
    /// Case-folded correct spelling, the key local entries are matched on.
    pub fn key(&self) -> String {
        self.correct_spelling.to_lowercase()
    }

    /// Whether `entry` carries different content than this record.
    ///
    /// Misspellings compare as sets. A field missing from the record counts
    /// as different.
    pub fn differs_from(&self, entry: &WordEntry) -> bool {
        if self.correct_spelling != entry.correct_spelling {
            return true;
        }
        let misspellings_match = self.misspellings.as_ref().is_some_and(|remote| {
            remote.iter().map(String::as_str).collect::<HashSet<_>>() == entry.misspelling_set()
        });
        !misspellings_match
            || self.definition.as_deref() != Some(entry.definition.as_str())
            || self.difficulty != Some(i64::from(entry.difficulty))
    }
}

impl From<&WordEntry> for RemoteRecord {
    fn from(entry: &WordEntry) -> Self {
        Self {
            correct_spelling: entry.correct_spelling.clone(),
            misspellings: Some(entry.misspellings.clone()),
            definition: Some(entry.definition.clone()),
            difficulty: Some(i64::from(entry.difficulty)),
        }
    }
}

/// A stored document: its ID within the collection plus its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDocument {
    pub id: String,
    #[serde(flatten)]
    pub record: RemoteRecord,
}

/// One write inside a commit.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    /// Create a new document under a store-assigned ID.
    Insert(WordEntry),
    /// Overwrite the word fields of an existing document.
    Update { id: String, entry: WordEntry },
}

impl WriteOp {
    pub fn entry(&self) -> &WordEntry {
        match self {
            WriteOp::Insert(entry) | WriteOp::Update { entry, .. } => entry,
        }
    }
}

/// A collection of word documents.
///
/// A `commit` is atomic: either every write in it applies or none does.
pub trait DocumentStore {
    /// Fetch every document in the collection.
    fn list(&self) -> Result<Vec<RemoteDocument>>;

    /// Apply a group of writes atomically.
    fn commit(&self, writes: &[WriteOp]) -> Result<()>;

    /// Number of documents in the collection.
    fn count(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    /// Largest number of writes accepted by one commit.
    fn max_batch(&self) -> usize {
        500
    }

    /// Human-readable location of the collection (for logging).
    fn name(&self) -> String;
}

/// Random alphanumeric document ID.
pub fn auto_id(rng: &mut fastrand::Rng) -> String {
    (0..AUTO_ID_LEN)
        .map(|_| AUTO_ID_ALPHABET[rng.usize(..AUTO_ID_ALPHABET.len())] as char)
        .collect()
}
