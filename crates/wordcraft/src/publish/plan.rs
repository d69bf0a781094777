//! Diffing the local corpus against the remote collection.

use indexmap::IndexMap;
use serde::Serialize;

use crate::corpus::WordEntry;

use super::store::{RemoteDocument, WriteOp};

/// A changed local entry and the remote document it replaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingUpdate {
    pub id: String,
    pub entry: WordEntry,
}

/// Classification of every local entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PublishPlan {
    /// Entries with no remote document.
    pub new: Vec<WordEntry>,
    /// Entries whose remote document has different content.
    pub updated: Vec<PendingUpdate>,
    /// Keys of entries already up to date.
    pub unchanged: Vec<String>,
    /// Remote documents indexed by key.
    pub remote_words: usize,
}

impl PublishPlan {
    /// Classify `local` entries against `remote` documents.
    ///
    /// Remote documents are keyed by case-folded correct spelling; when two
    /// share a key the later one wins. Local entries without a spelling are
    /// ignored.
    pub fn build(local: &[WordEntry], remote: &[RemoteDocument]) -> Self {
        let mut index: IndexMap<String, &RemoteDocument> = IndexMap::new();
        for doc in remote {
            let key = doc.record.key();
            if !key.is_empty() {
                index.insert(key, doc);
            }
        }

        let mut plan = PublishPlan {
            remote_words: index.len(),
            ..PublishPlan::default()
        };

        for entry in local {
            let key = entry.key();
            if key.is_empty() {
                continue;
            }
            match index.get(&key) {
                None => plan.new.push(entry.clone()),
                Some(doc) if doc.record.differs_from(entry) => plan.updated.push(PendingUpdate {
                    id: doc.id.clone(),
                    entry: entry.clone(),
                }),
                Some(_) => plan.unchanged.push(key),
            }
        }

        plan
    }

    /// Whether anything needs to be written.
    pub fn has_changes(&self) -> bool {
        !self.new.is_empty() || !self.updated.is_empty()
    }

    /// Total writes the plan will issue.
    pub fn write_count(&self) -> usize {
        self.new.len() + self.updated.len()
    }

    /// Inserts first, then updates.
    pub fn writes(&self) -> Vec<WriteOp> {
        self.new
            .iter()
            .cloned()
            .map(WriteOp::Insert)
            .chain(self.updated.iter().map(|u| WriteOp::Update {
                id: u.id.clone(),
                entry: u.entry.clone(),
            }))
            .collect()
    }

    /// Up to `n` spellings from each class, for display.
    pub fn samples(&self, n: usize) -> PlanSamples {
        PlanSamples {
            new: self.new.iter().take(n).map(|e| e.correct_spelling.clone()).collect(),
            updated: self
                .updated
                .iter()
                .take(n)
                .map(|u| u.entry.correct_spelling.clone())
                .collect(),
            unchanged: self.unchanged.iter().take(n).cloned().collect(),
        }
    }
}

/// A few example spellings per class.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanSamples {
    pub new: Vec<String>,
    pub updated: Vec<String>,
    pub unchanged: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publish::RemoteRecord;

    fn local(word: &str, misspellings: &[&str], definition: &str) -> WordEntry {
        WordEntry::new(word, misspellings.iter().map(|s| s.to_string()).collect())
            .with_definition(definition)
    }

    fn remote(id: &str, entry: &WordEntry) -> RemoteDocument {
        RemoteDocument {
            id: id.to_string(),
            record: RemoteRecord::from(entry),
        }
    }

    #[test]
    fn test_classification() {
        let garden = local("garden", &["gardin", "gardne"], "A plot.");
        let lemon = local("lemon", &["lemmon"], "A fruit.");
        let planet = local("planet", &["plannet"], "");

        let mut reordered = remote("r1", &garden);
        reordered.record.misspellings = Some(vec!["gardne".into(), "gardin".into()]);
        let stale = remote("r2", &local("lemon", &["lemin"], "A fruit."));

        let plan = PublishPlan::build(&[garden, lemon.clone(), planet], &[reordered, stale]);

        assert_eq!(plan.unchanged, vec!["garden"]);
        assert_eq!(
            plan.updated,
            vec![PendingUpdate {
                id: "r2".into(),
                entry: lemon
            }]
        );
        assert_eq!(plan.new.len(), 1);
        assert_eq!(plan.new[0].correct_spelling, "planet");
        assert!(plan.has_changes());
        assert_eq!(plan.write_count(), 2);
    }

    #[test]
    fn test_remote_keys_fold_case() {
        let garden = local("garden", &["gardin"], "");
        let mut doc = remote("r1", &garden);
        doc.record.correct_spelling = "Garden".into();

        let plan = PublishPlan::build(&[garden], &[doc]);
        assert!(plan.new.is_empty());
        // Spelling differs in case, so the document is refreshed.
        assert_eq!(plan.updated.len(), 1);
    }

    #[test]
    fn test_missing_remote_field_is_update() {
        let garden = local("garden", &["gardin"], "");
        let mut doc = remote("r1", &garden);
        doc.record.definition = None;

        let plan = PublishPlan::build(&[garden], &[doc]);
        assert_eq!(plan.updated.len(), 1);
    }

    #[test]
    fn test_no_changes() {
        let garden = local("garden", &["gardin"], "A plot.");
        let plan = PublishPlan::build(&[garden.clone()], &[remote("r1", &garden)]);
        assert!(!plan.has_changes());
        assert!(plan.writes().is_empty());
    }

    #[test]
    fn test_writes_inserts_first() {
        let garden = local("garden", &["gardin"], "");
        let lemon = local("lemon", &["lemin"], "");
        let mut doc = remote("r1", &garden);
        doc.record.difficulty = None;

        let plan = PublishPlan::build(&[garden, lemon], &[doc]);
        let writes = plan.writes();
        assert!(matches!(writes[0], WriteOp::Insert(_)));
        assert!(matches!(writes[1], WriteOp::Update { .. }));
    }

    #[test]
    fn test_samples_capped() {
        let words: Vec<_> = ["alpha", "bravo", "charlie", "delta", "echoes", "foxtrot"]
            .iter()
            .map(|w| local(w, &[], ""))
            .collect();
        let plan = PublishPlan::build(&words, &[]);
        assert_eq!(plan.samples(5).new.len(), 5);
        assert!(plan.samples(5).updated.is_empty());
    }
}
