//! Publishing the corpus to a remote document collection.
//!
//! The local combined file is diffed against the remote collection, keyed
//! by case-folded correct spelling. Only new and changed entries are
//! written, in commits no larger than the store's batch limit. The remote
//! state is snapshotted to disk before the first write.
//!
//! # Example
//!
//! ```
//! use wordcraft::corpus::WordEntry;
//! use wordcraft::publish::PublishPlan;
//!
//! let local = vec![WordEntry::new("garden", vec!["gardin".to_string()])];
//! let plan = PublishPlan::build(&local, &[]);
//! assert_eq!(plan.new.len(), 1);
//! assert!(plan.has_changes());
//! ```

mod firestore;
mod memory;
mod plan;
mod publisher;
mod store;

pub use firestore::{encode_fields, FirestoreConfig, FirestoreStore, FIRESTORE_URL};
pub use memory::MemoryStore;
pub use plan::{PendingUpdate, PlanSamples, PublishPlan};
pub use publisher::{PreparedPublish, PublishConfig, PublishReport, Publisher, RemoteSnapshot};
pub use store::{auto_id, DocumentStore, RemoteDocument, RemoteRecord, WriteOp, AUTO_ID_LEN};
