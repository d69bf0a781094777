//! In-process document store for tests and dry runs.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use indexmap::IndexMap;

use crate::error::{Result, WordcraftError};

use super::store::{auto_id, DocumentStore, RemoteDocument, RemoteRecord, WriteOp};

/// Document store kept in memory, in insertion order.
pub struct MemoryStore {
    collection: String,
    docs: Mutex<IndexMap<String, RemoteRecord>>,
    rng: Mutex<fastrand::Rng>,
    max_batch: usize,
    commits: AtomicUsize,
    fail_list: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            collection: "words".to_string(),
            docs: Mutex::new(IndexMap::new()),
            rng: Mutex::new(fastrand::Rng::with_seed(0)),
            max_batch: 500,
            commits: AtomicUsize::new(0),
            fail_list: false,
        }
    }

    /// Seed the store with existing documents.
    pub fn with_documents(self, docs: impl IntoIterator<Item = RemoteDocument>) -> Self {
        if let Ok(mut map) = self.docs.lock() {
            map.extend(docs.into_iter().map(|d| (d.id, d.record)));
        }
        self
    }

    /// Lower the per-commit write limit.
    pub fn with_max_batch(mut self, max_batch: usize) -> Self {
        self.max_batch = max_batch.max(1);
        self
    }

    /// Make every `list` call fail, as an unreachable store would.
    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Number of commits applied so far.
    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    /// Copy of the stored record with the given ID.
    pub fn get(&self, id: &str) -> Option<RemoteRecord> {
        self.docs.lock().ok()?.get(id).cloned()
    }

    /// Copy of the first stored record whose spelling matches `word` (case-folded).
    pub fn find(&self, word: &str) -> Option<RemoteDocument> {
        let key = word.to_lowercase();
        let docs = self.docs.lock().ok()?;
        docs.iter()
            .find(|(_, r)| r.key() == key)
            .map(|(id, record)| RemoteDocument {
                id: id.clone(),
                record: record.clone(),
            })
    }

    fn poisoned() -> WordcraftError {
        WordcraftError::Store {
            status: 500,
            message: "memory store lock poisoned".to_string(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn list(&self) -> Result<Vec<RemoteDocument>> {
        if self.fail_list {
            return Err(WordcraftError::Store {
                status: 503,
                message: "listing unavailable".to_string(),
            });
        }
        let docs = self.docs.lock().map_err(|_| Self::poisoned())?;
        Ok(docs
            .iter()
            .map(|(id, record)| RemoteDocument {
                id: id.clone(),
                record: record.clone(),
            })
            .collect())
    }

    fn commit(&self, writes: &[WriteOp]) -> Result<()> {
        if writes.len() > self.max_batch {
            return Err(WordcraftError::Store {
                status: 400,
                message: format!("{} writes exceed the batch limit of {}", writes.len(), self.max_batch),
            });
        }

        let mut docs = self.docs.lock().map_err(|_| Self::poisoned())?;
        let mut rng = self.rng.lock().map_err(|_| Self::poisoned())?;

        // Check every precondition before applying anything.
        for op in writes {
            if let WriteOp::Update { id, .. } = op {
                if !docs.contains_key(id) {
                    return Err(WordcraftError::Store {
                        status: 404,
                        message: format!("no document '{}' to update", id),
                    });
                }
            }
        }

        for op in writes {
            match op {
                WriteOp::Insert(entry) => {
                    docs.insert(auto_id(&mut rng), RemoteRecord::from(entry));
                }
                WriteOp::Update { id, entry } => {
                    docs.insert(id.clone(), RemoteRecord::from(entry));
                }
            }
        }

        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.docs.lock().map_err(|_| Self::poisoned())?.len())
    }

    fn max_batch(&self) -> usize {
        self.max_batch
    }

    fn name(&self) -> String {
        format!("memory:{}", self.collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::WordEntry;

    #[test]
    fn test_insert_and_update() {
        let store = MemoryStore::new();
        store
            .commit(&[WriteOp::Insert(WordEntry::new("garden", vec!["gardin".into()]))])
            .unwrap();
        let doc = store.find("GARDEN").unwrap();

        let updated = WordEntry::new("garden", vec!["gardn".into()]).with_definition("A plot.");
        store
            .commit(&[WriteOp::Update {
                id: doc.id.clone(),
                entry: updated,
            }])
            .unwrap();

        let record = store.get(&doc.id).unwrap();
        assert_eq!(record.definition.as_deref(), Some("A plot."));
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.commits(), 2);
    }

    #[test]
    fn test_commit_is_all_or_nothing() {
        let store = MemoryStore::new();
        let result = store.commit(&[
            WriteOp::Insert(WordEntry::new("lemon", vec![])),
            WriteOp::Update {
                id: "missing".into(),
                entry: WordEntry::new("melon", vec![]),
            },
        ]);
        assert!(matches!(result, Err(WordcraftError::Store { status: 404, .. })));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_batch_limit() {
        let store = MemoryStore::new().with_max_batch(1);
        let writes = vec![
            WriteOp::Insert(WordEntry::new("lemon", vec![])),
            WriteOp::Insert(WordEntry::new("melon", vec![])),
        ];
        assert!(store.commit(&writes).is_err());
    }
}
