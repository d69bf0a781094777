//! The publish job: diff, snapshot, commit, verify.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::corpus::{load_json, save_json, CombinedFile, CorpusLayout};
use crate::error::{Result, WordcraftError};

use super::plan::PublishPlan;
use super::store::{DocumentStore, RemoteDocument};

/// Configuration for publishing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Firestore project; usually supplied through the environment.
    pub project_id: Option<String>,
    /// Remote collection holding one document per word.
    pub collection: String,
    /// Writes per commit, capped by the store's own limit.
    pub batch_size: usize,
    /// Spellings shown per class in the summary.
    pub sample_size: usize,
    /// Documents requested per list page.
    pub page_size: usize,
    /// HTTP timeout per request, in seconds.
    pub timeout_secs: u64,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            collection: "words".to_string(),
            batch_size: 500,
            sample_size: 5,
            page_size: 300,
            timeout_secs: 30,
        }
    }
}

/// Everything known before any write: local corpus, remote state, and the diff.
#[derive(Debug, Clone)]
pub struct PreparedPublish {
    pub local_words: usize,
    pub remote: Vec<RemoteDocument>,
    pub plan: PublishPlan,
}

/// Remote collection contents as saved before publishing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSnapshot {
    pub store: String,
    pub taken_at: DateTime<Utc>,
    pub count: usize,
    pub documents: Vec<RemoteDocument>,
}

/// Outcome of a publish run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishReport {
    pub inserted: usize,
    pub updated: usize,
    pub commits: usize,
    pub snapshot: PathBuf,
    pub remote_before: usize,
    /// Expected remote count after the run.
    pub expected: usize,
    /// Remote count after the run, if it could be read.
    pub remote_after: Option<usize>,
    pub finished_at: DateTime<Utc>,
}

impl PublishReport {
    /// Whether the recount matched the expectation.
    pub fn verified(&self) -> bool {
        self.remote_after == Some(self.expected)
    }
}

/// Uploads new and changed entries to a document store.
pub struct Publisher<S: DocumentStore> {
    store: S,
    config: PublishConfig,
}

impl<S: DocumentStore> Publisher<S> {
    /// Create a publisher with default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, PublishConfig::default())
    }

    /// Create a publisher with custom configuration.
    pub fn with_config(store: S, config: PublishConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    /// Load the combined corpus, list the remote collection and diff them.
    ///
    /// Nothing is written. A failed listing aborts here, so no write can
    /// happen against an unknown remote state.
    pub fn prepare(&self, layout: &CorpusLayout) -> Result<PreparedPublish> {
        let path = layout.combined();
        let local = load_json::<CombinedFile>(&path)?.doc;
        if local.words.is_empty() {
            return Err(WordcraftError::EmptyData(format!(
                "'{}' contains no words",
                path.display()
            )));
        }
        tracing::info!(words = local.words.len(), path = %path.display(), "local corpus loaded");

        let remote = self.store.list().inspect_err(|e| {
            tracing::error!(store = %self.store.name(), error = %e, "could not list remote collection");
        })?;
        tracing::info!(store = %self.store.name(), documents = remote.len(), "remote collection listed");

        let plan = PublishPlan::build(&local.words, &remote);
        tracing::info!(
            new = plan.new.len(),
            updated = plan.updated.len(),
            unchanged = plan.unchanged.len(),
            "change analysis"
        );

        Ok(PreparedPublish {
            local_words: local.words.len(),
            remote,
            plan,
        })
    }

    /// Snapshot the remote state, then commit the plan in batches.
    pub fn execute(&self, layout: &CorpusLayout, prepared: &PreparedPublish) -> Result<PublishReport> {
        let now = Utc::now();
        let snapshot = layout.remote_snapshot(&self.config.collection, now);
        save_json(
            &snapshot,
            &RemoteSnapshot {
                store: self.store.name(),
                taken_at: now,
                count: prepared.remote.len(),
                documents: prepared.remote.clone(),
            },
        )?;
        tracing::info!(path = %snapshot.display(), documents = prepared.remote.len(), "remote snapshot saved");

        let writes = prepared.plan.writes();
        let batch = self.config.batch_size.clamp(1, self.store.max_batch().max(1));
        let mut commits = 0;
        let mut written = 0;
        for chunk in writes.chunks(batch) {
            self.store.commit(chunk).inspect_err(|e| {
                tracing::error!(written, error = %e, "commit failed");
            })?;
            commits += 1;
            written += chunk.len();
            tracing::info!(commit = commits, written, of = writes.len(), "batch committed");
        }

        let remote_before = prepared.remote.len();
        let expected = remote_before + prepared.plan.new.len();
        let remote_after = match self.store.count() {
            Ok(count) => Some(count),
            Err(e) => {
                tracing::warn!(error = %e, "could not recount remote collection");
                None
            }
        };
        if let Some(count) = remote_after {
            if count != expected {
                tracing::warn!(expected, found = count, "remote count mismatch");
            }
        }

        Ok(PublishReport {
            inserted: prepared.plan.new.len(),
            updated: prepared.plan.updated.len(),
            commits,
            snapshot,
            remote_before,
            expected,
            remote_after,
            finished_at: Utc::now(),
        })
    }

    /// Prepare and, if there is anything to do, execute.
    ///
    /// Returns `None` when the remote collection is already up to date.
    pub fn run(&self, layout: &CorpusLayout) -> Result<Option<PublishReport>> {
        let prepared = self.prepare(layout)?;
        if !prepared.plan.has_changes() {
            tracing::info!("no changes, remote collection is up to date");
            return Ok(None);
        }
        self.execute(layout, &prepared).map(Some)
    }
}
